// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /image/{dataset}/{relPath} tests

use super::fixtures::{assert_status, body_bytes, body_text, get, TestLayout, CAT_JPEG};
use axum::http::StatusCode;

#[tokio::test]
async fn test_serves_file_bytes() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/image/cats/a.jpg").await;

    assert_status(&response, StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "image/jpeg");
    assert_eq!(
        response.headers()["content-length"],
        CAT_JPEG.len().to_string().as_str()
    );
    assert_eq!(body_bytes(response).await, CAT_JPEG);
}

#[tokio::test]
async fn test_nested_relative_path() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/image/cats/nested/b.jpg").await;

    assert_status(&response, StatusCode::OK);
    assert_eq!(body_bytes(response).await, CAT_JPEG);
}

#[tokio::test]
async fn test_percent_encoded_filename() {
    let layout = TestLayout::new();
    layout.write("data/PetImages/Cat/my cat.jpg", CAT_JPEG);
    let response = get(layout.app().await, "/image/cats/my%20cat.jpg").await;

    assert_status(&response, StatusCode::OK);
}

#[tokio::test]
async fn test_traversal_is_forbidden() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/image/cats/../../etc/passwd").await;

    assert_status(&response, StatusCode::FORBIDDEN);
    assert_eq!(body_text(response).await, "Forbidden");
}

#[tokio::test]
async fn test_encoded_traversal_to_existing_file_is_forbidden() {
    let layout = TestLayout::new();
    let response = get(
        layout.app().await,
        "/image/cats/%2e%2e/%2e%2e/secret.txt",
    )
    .await;

    assert_status(&response, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_sibling_prefix_directory_is_forbidden() {
    let layout = TestLayout::new();
    layout.write("data/PetImages/CatEvil/x.jpg", CAT_JPEG);
    let response = get(layout.app().await, "/image/cats/../CatEvil/x.jpg").await;

    assert_status(&response, StatusCode::FORBIDDEN);
}

#[cfg(unix)]
#[tokio::test]
async fn test_symlink_escape_is_forbidden() {
    let layout = TestLayout::new();
    std::os::unix::fs::symlink(
        layout.path("data/secret.txt"),
        layout.path("data/PetImages/Cat/link.jpg"),
    )
    .unwrap();
    let response = get(layout.app().await, "/image/cats/link.jpg").await;

    assert_status(&response, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_missing_file_is_404() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/image/cats/nope.jpg").await;
    assert_status(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_file_used_as_directory_is_404() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/image/cats/a.jpg/x.jpg").await;
    assert_status(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_nul_byte_in_name_is_404() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/image/cats/a%00.jpg").await;
    assert_status(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_overlong_name_is_404() {
    let layout = TestLayout::new();
    let uri = format!("/image/cats/{}.jpg", "a".repeat(300));
    let response = get(layout.app().await, &uri).await;
    assert_status(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_directory_is_404() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/image/cats/nested").await;
    assert_status(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_dataset_is_400() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/image/birds/a.jpg").await;

    assert_status(&response, StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Invalid dataset");
}

#[tokio::test]
async fn test_short_paths_are_400() {
    let layout = TestLayout::new();
    for uri in ["/image", "/image/", "/image/cats", "/image/cats/"] {
        let response = get(layout.app().await, uri).await;
        assert_status(&response, StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Invalid image path", "uri {}", uri);
    }
}

#[tokio::test]
async fn test_oversized_file_is_413() {
    let layout = TestLayout::new();
    let config = embedding_heatmap::config::ServerConfig {
        max_image_bytes: 4,
        ..layout.config()
    };
    let response = get(layout.app_with(config).await, "/image/cats/a.jpg").await;

    assert_status(&response, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_images_served_for_dataset_with_missing_embeddings() {
    let layout = TestLayout::new();
    layout.write("data/PetImages/Dog/d.jpg", CAT_JPEG);
    let response = get(layout.app().await, "/image/dogs/d.jpg").await;

    assert_status(&response, StatusCode::OK);
}
