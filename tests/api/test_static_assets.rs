// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Fallback asset handler tests

use super::fixtures::{assert_status, body_text, get, TestLayout};
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use tower::util::ServiceExt;

#[tokio::test]
async fn test_serves_allow_listed_script() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/heatmap.js").await;

    assert_status(&response, StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/javascript; charset=utf-8"
    );
    assert_eq!(body_text(response).await, "console.log('heatmap');");
}

#[tokio::test]
async fn test_serves_stylesheet() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/style.css").await;

    assert_status(&response, StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "text/css; charset=utf-8");
}

#[tokio::test]
async fn test_unlisted_extension_is_404() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/notes.txt").await;
    assert_status(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_asset_is_404() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/missing.js").await;
    assert_status(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_asset_used_as_directory_is_404() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/heatmap.js/x.js").await;
    assert_status(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_nul_byte_in_asset_name_is_404() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/heatmap%00.js").await;
    assert_status(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_escape_from_static_dir_is_forbidden() {
    let layout = TestLayout::new();
    layout.write("data/leak.json", b"{}");
    let response = get(layout.app().await, "/%2e%2e/data/leak.json").await;
    assert_status(&response, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_post_is_not_served() {
    let layout = TestLayout::new();
    let response = layout
        .app()
        .await
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/heatmap.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_status(&response, StatusCode::NOT_FOUND);
}
