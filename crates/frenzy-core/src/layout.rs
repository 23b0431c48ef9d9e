//! Resolution of the product configuration against a working directory

use crate::product::ProductConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Engine-defined directory holding every project asset
pub const ASSETS_DIR: &str = "Assets";

const SCRIPTS_DIR: &str = "Scripts";
const IMAGES_DIR: &str = "Images";
const RESOURCES_DIR: &str = "Resources";
const GIT_DIR: &str = ".git";

/// Every path the scaffold steps read from or write to
#[derive(Debug, Clone)]
pub struct ScaffoldLayout {
    base: PathBuf,
    project_dir_name: &'static str,
    asset_folders: &'static [&'static str],
    script_file: &'static str,
    images_dir: &'static str,
    config_files: &'static [&'static str],
    commit_message: &'static str,
}

impl ScaffoldLayout {
    /// Resolve a product configuration against `base`
    pub fn new<C: ProductConfig>(config: &C, base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            project_dir_name: config.project_dir_name(),
            asset_folders: config.asset_folders(),
            script_file: config.script_file(),
            images_dir: config.images_dir(),
            config_files: config.config_files(),
            commit_message: config.commit_message(),
        }
    }

    /// Resolve a product configuration against the process working directory
    pub fn from_current_dir<C: ProductConfig>(config: &C) -> Result<Self> {
        let base = std::env::current_dir().context("Failed to read the working directory")?;
        Ok(Self::new(config, base))
    }

    /// Working directory: source files live here and git runs here
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Project path as shown to the user, relative to the working directory
    pub fn display_project_root(&self) -> String {
        format!("./{}", self.project_dir_name)
    }

    pub fn project_root(&self) -> PathBuf {
        self.base.join(self.project_dir_name)
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.project_root().join(ASSETS_DIR)
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.assets_dir().join(SCRIPTS_DIR)
    }

    pub fn images_target(&self) -> PathBuf {
        self.assets_dir().join(IMAGES_DIR)
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.assets_dir().join(RESOURCES_DIR)
    }

    pub fn asset_folders(&self) -> &'static [&'static str] {
        self.asset_folders
    }

    pub fn script_name(&self) -> &'static str {
        self.script_file
    }

    pub fn script_source(&self) -> PathBuf {
        self.base.join(self.script_file)
    }

    pub fn images_source(&self) -> PathBuf {
        self.base.join(self.images_dir)
    }

    /// Config files paired with their location in the working directory
    pub fn config_sources(&self) -> impl Iterator<Item = (&'static str, PathBuf)> + '_ {
        self.config_files
            .iter()
            .map(move |name| (*name, self.base.join(name)))
    }

    pub fn git_dir(&self) -> PathBuf {
        self.base.join(GIT_DIR)
    }

    pub fn commit_message(&self) -> &'static str {
        self.commit_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestProduct;

    #[test]
    fn test_paths_are_rooted_at_base() {
        let layout = ScaffoldLayout::new(&TestProduct, "/work");

        assert_eq!(layout.project_root(), PathBuf::from("/work/FailFrenzy"));
        assert_eq!(
            layout.scripts_dir(),
            PathBuf::from("/work/FailFrenzy/Assets/Scripts")
        );
        assert_eq!(
            layout.resources_dir(),
            PathBuf::from("/work/FailFrenzy/Assets/Resources")
        );
        assert_eq!(
            layout.script_source(),
            PathBuf::from("/work/UNITY_SCRIPTS_COMPLETE.cs")
        );
        assert_eq!(layout.git_dir(), PathBuf::from("/work/.git"));
        assert_eq!(layout.display_project_root(), "./FailFrenzy");
    }

    #[test]
    fn test_config_sources() {
        let layout = ScaffoldLayout::new(&TestProduct, "/work");
        let names: Vec<_> = layout.config_sources().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["CONFIG_COSMETICS.json", "CONFIG_GAME.json"]);
    }
}
