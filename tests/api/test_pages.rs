// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET / and GET /heatmap tests

use super::fixtures::{assert_status, body_text, get, TestLayout};
use axum::http::StatusCode;

#[tokio::test]
async fn test_index_links_every_dataset() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/").await;

    assert_status(&response, StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let body = body_text(response).await;
    for name in ["planes", "cats", "dogs"] {
        assert!(body.contains(&format!("/heatmap?dataset={}", name)));
    }
}

#[tokio::test]
async fn test_heatmap_page_for_known_dataset() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/heatmap?dataset=dogs").await;

    assert_status(&response, StatusCode::OK);
    assert!(body_text(response).await.contains("heatmapCanvas"));
}

#[tokio::test]
async fn test_heatmap_page_rejects_unknown_dataset() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/heatmap?dataset=birds").await;

    assert_status(&response, StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Invalid dataset parameter");
}

#[tokio::test]
async fn test_heatmap_page_requires_dataset() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/heatmap").await;
    assert_status(&response, StatusCode::BAD_REQUEST);
}
