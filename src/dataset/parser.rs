// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Line parser for the embedding source format
//!
//! Each line is `filename<TAB>[v1,v2,...,vn]`. The filename is everything
//! before the first tab; the remainder is the bracketed vector.

use super::errors::DatasetLoadError;

/// One parsed source line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub filename: String,
    pub embedding: Vec<f64>,
}

/// Parse a single line. `line_no` is only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<ParsedLine, DatasetLoadError> {
    let line = line.trim();
    let (filename, embedding) = line
        .split_once('\t')
        .ok_or(DatasetLoadError::MissingTab { line: line_no })?;

    Ok(ParsedLine {
        filename: filename.to_string(),
        embedding: parse_vector(embedding, line_no)?,
    })
}

/// Parse `[v1,v2,...]` into a vector of finite floats. `[]` is an empty vector.
pub fn parse_vector(text: &str, line_no: usize) -> Result<Vec<f64>, DatasetLoadError> {
    let malformed = |reason: String| DatasetLoadError::MalformedVector {
        line: line_no,
        reason,
    };

    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| malformed("expected [v1,v2,...]".to_string()))?
        .trim();

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .enumerate()
        .map(|(index, token)| {
            let token = token.trim();
            match token.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                Ok(_) => Err(malformed(format!("value {index} ('{token}') is not finite"))),
                Err(_) => Err(malformed(format!("value {index} ('{token}') is not a number"))),
            }
        })
        .collect()
}
