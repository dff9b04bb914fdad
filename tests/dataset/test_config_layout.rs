// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Config file to dataset layout

use embedding_heatmap::config::ServerConfig;
use embedding_heatmap::dataset::{DatasetName, DatasetRegistry, LoadStatus};
use std::io::Write;
use tempfile::TempDir;

#[tokio::test]
async fn test_toml_override_points_dataset_at_custom_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("kittens.tsv"), "k.jpg\t[1.0,2.0]\n").unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
embeddings_dir = "{}"
image_root = "{}"

[datasets.cats]
embedding_file = "kittens.tsv"
image_dir = "kitten-pics"
"#,
        dir.path().display(),
        dir.path().display()
    )
    .unwrap();

    let config = ServerConfig::from_toml_file(file.path()).unwrap();
    let cats = config.dataset_paths(DatasetName::Cats);
    assert_eq!(cats.image_dir, dir.path().join("kitten-pics"));

    let registry = DatasetRegistry::load(config.dataset_layout()).await;
    let dataset = registry.get(DatasetName::Cats).unwrap();
    assert_eq!(dataset.status, LoadStatus::Loaded);
    assert_eq!(dataset.dimensions(), 2);
    assert_eq!(
        registry.get(DatasetName::Dogs).unwrap().status,
        LoadStatus::Missing
    );
}

#[test]
fn test_unknown_dataset_table_is_rejected() {
    let result = ServerConfig::from_toml_str("[datasets.birds]\nimage_dir = \"x\"\n");
    assert!(result.is_err());
}
