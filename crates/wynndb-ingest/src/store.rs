//! Atomic catalog persistence.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use wynndb_core::IngredientCatalog;

use crate::error::StoreError;

/// Writes `catalog` to `path` as pretty-printed JSON (2-space indent).
///
/// Missing parent directories are created. The document is written to a
/// temporary file beside `path` and renamed over it, so readers see either
/// the previous catalog or the complete new one.
///
/// # Errors
///
/// - [`StoreError::Serialize`] if the catalog cannot be encoded.
/// - [`StoreError::Io`] if the directory or temporary file cannot be written.
/// - [`StoreError::Persist`] if the final rename fails. The previous file,
///   if any, is left untouched.
pub fn write_catalog(path: &Path, catalog: &IngredientCatalog) -> Result<(), StoreError> {
    let body = serde_json::to_vec_pretty(catalog)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let io_err = |source: std::io::Error| StoreError::Io {
        path: dir.clone(),
        source,
    };

    std::fs::create_dir_all(&dir).map_err(io_err)?;

    let mut tmp = NamedTempFile::new_in(&dir).map_err(io_err)?;
    tmp.write_all(&body).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;

    tmp.persist(path).map_err(|e| StoreError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::debug!(path = %path.display(), bytes = body.len(), "catalog written");
    Ok(())
}
