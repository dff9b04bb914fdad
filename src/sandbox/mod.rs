// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Path sandbox for client-supplied file paths
//!
//! Resolves an untrusted relative path against a fixed root directory and
//! only accepts results contained in that root. Containment is checked by
//! path-component ancestry (`Path::starts_with`), never by string prefix, so
//! a root of `/data/cats` does not admit `/data/catsEvil/x.jpg`.
//!
//! Resolution happens twice: lexically first (so `..` escapes are rejected
//! even when the target does not exist), then on the canonical paths (so a
//! symlink inside the root cannot point outside it).

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SandboxError {
    /// Resolved path lies outside the root
    #[error("path escapes sandbox root")]
    Forbidden,

    /// Path is contained but no regular file exists there
    #[error("file not found")]
    NotFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolve `.` and `..` without touching the filesystem.
///
/// `..` at the filesystem root stays at the root. Meant for absolute paths.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                let _ = out.pop();
            }
            Component::CurDir => {}
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Component-wise containment: true when `candidate` equals `root` or is below it.
pub fn is_within(candidate: &Path, root: &Path) -> bool {
    candidate.starts_with(root)
}

/// Make `root` absolute against the working directory and normalize it.
fn absolute_root(root: &Path) -> Result<PathBuf, SandboxError> {
    let absolute = if root.is_absolute() {
        root.to_path_buf()
    } else {
        std::env::current_dir()?.join(root)
    };
    Ok(normalize_lexically(&absolute))
}

/// Lexical check only: join and normalize, reject anything outside `root`.
///
/// Absolute or drive-prefixed relative paths are always rejected.
pub fn contain(root: &Path, untrusted: &str) -> Result<PathBuf, SandboxError> {
    let relative = Path::new(untrusted);
    if relative
        .components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
    {
        return Err(SandboxError::Forbidden);
    }

    let root = absolute_root(root)?;
    let candidate = normalize_lexically(&root.join(relative));
    if is_within(&candidate, &root) {
        Ok(candidate)
    } else {
        Err(SandboxError::Forbidden)
    }
}

/// Resolve `untrusted` under `root` to an existing regular file.
///
/// Returns the canonical path of the file. Escapes are `Forbidden` whether
/// or not the target exists; a contained path without a regular file is
/// `NotFound`.
pub async fn resolve_within(root: &Path, untrusted: &str) -> Result<PathBuf, SandboxError> {
    let candidate = contain(root, untrusted)?;

    let canonical_root = canonicalize(&absolute_root(root)?).await?;
    // The candidate is already contained, so any failure to resolve it
    // (missing, a file used as a directory, NUL byte, name too long) means
    // there is no file to serve.
    let canonical = tokio::fs::canonicalize(&candidate)
        .await
        .map_err(|_| SandboxError::NotFound)?;
    if !is_within(&canonical, &canonical_root) {
        return Err(SandboxError::Forbidden);
    }

    match tokio::fs::metadata(&canonical).await {
        Ok(metadata) if metadata.is_file() => {}
        _ => return Err(SandboxError::NotFound),
    }

    Ok(canonical)
}

async fn canonicalize(path: &Path) -> Result<PathBuf, SandboxError> {
    match tokio::fs::canonicalize(path).await {
        Ok(p) => Ok(p),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(SandboxError::NotFound),
        Err(e) => Err(SandboxError::Io(e)),
    }
}
