// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Shared on-disk layout for router tests

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use embedding_heatmap::{
    api::http_server::{create_app, AppState},
    config::ServerConfig,
    dataset::DatasetRegistry,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot`

pub const CAT_JPEG: &[u8] = b"\xFF\xD8\xFF\xE0fake-cat-jpeg\xFF\xD9";

/// Temp tree with embeddings/, data/ and static/ under one root
pub struct TestLayout {
    pub dir: TempDir,
}

impl TestLayout {
    /// Cats have two records and one image; planes have a malformed
    /// file; dogs have no embedding file at all.
    pub fn new() -> Self {
        let layout = Self {
            dir: TempDir::new().unwrap(),
        };

        layout.write(
            "embeddings/cat_embeddings_small.tsv",
            b"a.jpg\t[0.0,5.0,10.0]\nb.jpg\t[10.0,5.0,0.0]\n",
        );
        layout.write(
            "embeddings/plane_embeddings_small.tsv",
            b"1.jpg\t[1.0,2.0]\nbroken line without tab\n",
        );
        layout.write("data/PetImages/Cat/a.jpg", CAT_JPEG);
        layout.write("data/PetImages/Cat/nested/b.jpg", CAT_JPEG);
        layout.write("data/secret.txt", b"outside the cat tree");
        layout.write("static/heatmap.js", b"console.log('heatmap');");
        layout.write("static/style.css", b"body { margin: 0; }");
        layout.write("static/notes.txt", b"not allow-listed");
        layout
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn write(&self, relative: &str, contents: &[u8]) {
        let path = self.path(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    pub fn config(&self) -> ServerConfig {
        ServerConfig {
            embeddings_dir: self.path("embeddings"),
            image_root: self.path("data"),
            static_dir: self.path("static"),
            ..ServerConfig::default()
        }
    }

    pub async fn app_with(&self, config: ServerConfig) -> Router {
        let registry = DatasetRegistry::load(config.dataset_layout()).await;
        create_app(AppState::new(registry, config))
    }

    pub async fn app(&self) -> Router {
        self.app_with(self.config()).await
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status");
}
