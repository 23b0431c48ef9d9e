//! Script and asset copying into the project

use crate::error::{Result, ScaffoldError};
use crate::layout::ScaffoldLayout;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use walkdir::WalkDir;

/// What `copy_assets` moved into the project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetCopy {
    /// Number of image files merged, `None` when there was no images directory
    pub images_copied: Option<usize>,
    /// Names of the config files copied into `Assets/Resources`
    pub configs_copied: Vec<String>,
}

/// Copy the script file into `Assets/Scripts`.
///
/// The source file is checked first, then the destination folder; nothing
/// is written unless both exist.
pub async fn copy_script(layout: &ScaffoldLayout) -> Result<PathBuf> {
    let source = layout.script_source();
    if !source.is_file() {
        return Err(ScaffoldError::ScriptNotFound {
            name: layout.script_name().to_string(),
        });
    }

    let scripts = layout.scripts_dir();
    if !scripts.is_dir() {
        return Err(ScaffoldError::ScriptsFolderNotFound { path: scripts });
    }

    let target = scripts.join(layout.script_name());
    copy_file(&source, &target).await?;
    Ok(target)
}

/// Merge the images directory and copy the config files into the project.
///
/// Missing sources are skipped silently. Existing files at the destination
/// are overwritten.
pub async fn copy_assets(layout: &ScaffoldLayout) -> Result<AssetCopy> {
    let assets = layout.assets_dir();
    if !assets.is_dir() {
        return Err(ScaffoldError::ProjectNotFound { path: assets });
    }

    let mut copy = AssetCopy::default();

    let images = layout.images_source();
    if images.is_dir() {
        copy.images_copied = Some(merge_dir(&images, &layout.images_target()).await?);
    }

    let resources = layout.resources_dir();
    for (name, source) in layout.config_sources() {
        if !source.is_file() {
            debug!("skipping absent config {}", name);
            continue;
        }
        fs::create_dir_all(&resources).await.map_err(|e| {
            ScaffoldError::io(format!("Impossible de créer {}", resources.display()), e)
        })?;
        copy_file(&source, &resources.join(name)).await?;
        copy.configs_copied.push(name.to_string());
    }

    Ok(copy)
}

/// Recursively copy `source` into `target`, creating directories as needed.
/// Symlinks are followed and their contents copied. Returns the number of
/// files copied.
async fn merge_dir(source: &Path, target: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(|e| {
            let context = format!("Impossible de parcourir {}", source.display());
            ScaffoldError::io(context, e.into())
        })?;
        let Ok(rel) = entry.path().strip_prefix(source) else {
            continue;
        };
        let dest = target.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).await.map_err(|e| {
                ScaffoldError::io(format!("Impossible de créer {}", dest.display()), e)
            })?;
        } else {
            copy_file(entry.path(), &dest).await?;
            copied += 1;
        }
    }

    Ok(copied)
}

async fn copy_file(source: &Path, target: &Path) -> Result<()> {
    debug!("copying {} -> {}", source.display(), target.display());
    fs::copy(source, target).await.map_err(|e| {
        ScaffoldError::io(
            format!(
                "Impossible de copier {} vers {}",
                source.display(),
                target.display()
            ),
            e,
        )
    })?;
    Ok(())
}
