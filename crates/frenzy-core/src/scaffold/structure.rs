//! Asset folder layout

use crate::error::{Result, ScaffoldError};
use crate::layout::ScaffoldLayout;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Create every asset folder under the project's `Assets` directory.
///
/// Fails without touching the filesystem if the project root is missing.
/// Existing folders count as created, so re-running is harmless.
pub async fn build_structure(layout: &ScaffoldLayout) -> Result<Vec<PathBuf>> {
    let root = layout.project_root();
    if !root.is_dir() {
        return Err(ScaffoldError::ProjectNotFound { path: root });
    }

    let assets = layout.assets_dir();
    let mut folders = Vec::with_capacity(layout.asset_folders().len());

    for folder in layout.asset_folders() {
        let path = assets.join(folder);
        fs::create_dir_all(&path).await.map_err(|e| {
            ScaffoldError::io(format!("Impossible de créer {}", path.display()), e)
        })?;
        debug!("ensured {}", path.display());
        folders.push(path);
    }

    Ok(folders)
}
