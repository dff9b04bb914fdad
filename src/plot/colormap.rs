// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use image::Rgb;

/// Blue-white-red diverging colormap.
///
/// `0.0` is pure blue, `0.5` white and `1.0` pure red. Inputs outside
/// `[0, 1]` are clamped; NaN renders as white.
pub fn bwr(value: f64) -> Rgb<u8> {
    let v = if value.is_nan() { 0.5 } else { value.clamp(0.0, 1.0) };

    if v <= 0.5 {
        // blue -> white
        let t = v / 0.5;
        let c = channel(t);
        Rgb([c, c, 255])
    } else {
        // white -> red
        let t = (1.0 - v) / 0.5;
        let c = channel(t);
        Rgb([255, c, c])
    }
}

fn channel(t: f64) -> u8 {
    (t * 255.0).round() as u8
}
