//! Shared fixtures for unit tests

use crate::layout::ScaffoldLayout;
use crate::product::ProductConfig;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[derive(Clone)]
pub struct TestProduct;

impl ProductConfig for TestProduct {
    fn display_name(&self) -> &'static str {
        "Fail Frenzy"
    }

    fn project_dir_name(&self) -> &'static str {
        "FailFrenzy"
    }

    fn asset_folders(&self) -> &'static [&'static str] {
        &[
            "Scripts/Core",
            "Scripts/UI",
            "Resources",
            "Images",
            "Audio/Music",
            "Audio/SFX",
        ]
    }

    fn script_file(&self) -> &'static str {
        "UNITY_SCRIPTS_COMPLETE.cs"
    }

    fn images_dir(&self) -> &'static str {
        "images"
    }

    fn config_files(&self) -> &'static [&'static str] {
        &["CONFIG_COSMETICS.json", "CONFIG_GAME.json"]
    }

    fn commit_message(&self) -> &'static str {
        "Initial commit"
    }

    fn engine_binary(&self) -> &'static str {
        "unity"
    }

    fn engine_binary_env(&self) -> &'static str {
        "FRENZY_TEST_UNITY"
    }

    fn next_steps(&self, project_dir: &Path) -> Vec<String> {
        vec![format!("Open {}", project_dir.display())]
    }

    fn cli_description(&self) -> &'static str {
        "test"
    }
}

/// A temporary working directory and the layout resolved against it
pub fn workspace() -> (TempDir, ScaffoldLayout) {
    let dir = TempDir::new().unwrap();
    let layout = ScaffoldLayout::new(&TestProduct, dir.path());
    (dir, layout)
}

/// Every path under `root` mapped to its file contents (`None` for directories)
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.unwrap())
        .map(|entry| {
            let rel = entry.path().strip_prefix(root).unwrap().to_path_buf();
            let contents = if entry.file_type().is_file() {
                Some(std::fs::read(entry.path()).unwrap())
            } else {
                None
            };
            (rel, contents)
        })
        .collect()
}

/// Write an executable shell script standing in for an external tool
#[cfg(unix)]
pub fn write_executable(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
