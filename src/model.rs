//! Model snapshot files: a JSON array of elements.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fs;
use std::path::{Path, PathBuf};

use matcher::DocStore;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("cannot read model {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("cannot write model {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("invalid model {path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("cannot encode model: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Load a snapshot into a fresh document.
///
/// # Errors
///
/// `Read` if the file cannot be opened, `Parse` for malformed JSON or a
/// degenerate line segment.
pub fn load(path: &Path) -> Result<DocStore, ModelError> {
    let json = fs::read_to_string(path).map_err(|source| ModelError::Read { path: path.to_path_buf(), source })?;
    let doc = DocStore::from_json(&json).map_err(|source| ModelError::Parse { path: path.to_path_buf(), source })?;
    tracing::info!(path = %path.display(), elements = doc.len(), "model loaded");
    Ok(doc)
}

/// Write every element of `doc`, sorted by mark, as pretty JSON.
///
/// # Errors
///
/// `Write` if the file cannot be written.
pub fn save(path: &Path, doc: &DocStore) -> Result<(), ModelError> {
    let json = serde_json::to_string_pretty(&doc.snapshot())?;
    fs::write(path, json).map_err(|source| ModelError::Write { path: path.to_path_buf(), source })?;
    tracing::info!(path = %path.display(), elements = doc.len(), "model written");
    Ok(())
}
