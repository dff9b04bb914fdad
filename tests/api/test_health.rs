// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /health tests

use super::fixtures::{assert_status, body_json, get, TestLayout};
use axum::http::StatusCode;

#[tokio::test]
async fn test_reports_each_dataset() {
    let layout = TestLayout::new();
    let response = get(layout.app().await, "/health").await;

    assert_status(&response, StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "degraded");

    let datasets = body["datasets"].as_array().unwrap();
    assert_eq!(datasets.len(), 3);

    let by_name = |name: &str| {
        datasets
            .iter()
            .find(|d| d["name"] == name)
            .unwrap()
            .clone()
    };
    assert_eq!(by_name("cats")["status"], "loaded");
    assert_eq!(by_name("cats")["records"], 2);
    assert_eq!(by_name("cats")["dimensions"], 3);
    assert_eq!(by_name("dogs")["status"], "missing");
    assert_eq!(by_name("planes")["status"], "failed");
    assert!(by_name("planes")["reason"]
        .as_str()
        .unwrap()
        .contains("line 2"));
}

#[tokio::test]
async fn test_ok_when_everything_loaded() {
    let layout = TestLayout::new();
    layout.write("embeddings/plane_embeddings_small.tsv", b"1.jpg\t[1.0]\n");
    layout.write("embeddings/dog_embeddings_small.tsv", b"d.jpg\t[2.0]\n");
    let response = get(layout.app().await, "/health").await;

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body.get("issues").is_none());
}
