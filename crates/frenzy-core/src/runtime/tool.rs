//! Engine command-line interface
//!
//! Wraps the Unity executable used to create a project skeleton in
//! unattended mode.

use super::check::Probe;
use anyhow::{Context, Result};
use colored::Colorize;
use std::ffi::OsString;
use std::path::Path;
use tokio::process::Command as TokioCommand;
use tracing::debug;

/// The engine executable, resolved or by bare name
#[derive(Debug, Clone)]
pub struct EngineCli {
    program: OsString,
}

impl EngineCli {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Use the executable the probe resolves, falling back to the bare name
    /// so a launch failure is reported against what the user configured
    pub fn from_probe(probe: &Probe) -> Self {
        match probe.resolve(probe.engine_binary()) {
            Some(path) => Self::new(path),
            None => Self::new(probe.engine_binary()),
        }
    }

    /// Arguments creating a project at `project_path` and quitting
    fn create_args(project_path: &Path) -> Vec<OsString> {
        vec![
            "-createProject".into(),
            project_path.as_os_str().to_owned(),
            "-quit".into(),
            "-batchmode".into(),
        ]
    }

    /// Command line string, for display
    pub fn create_command(&self, project_path: &Path) -> String {
        let mut parts = vec![self.program.to_string_lossy().into_owned()];
        parts.extend(
            Self::create_args(project_path)
                .iter()
                .map(|a| a.to_string_lossy().into_owned()),
        );
        parts.join(" ")
    }

    /// Create a project at `project_path` in batch mode.
    ///
    /// Output goes straight to the terminal. The engine may take minutes and
    /// is waited on without a timeout.
    pub async fn create_project(&self, project_path: &Path) -> Result<()> {
        let cmd = self.create_command(project_path);
        println!();
        println!("{} {}", "Exécution:".dimmed(), cmd.yellow());
        println!();

        debug!("spawning engine: {}", cmd);
        let status = TokioCommand::new(&self.program)
            .args(Self::create_args(project_path))
            .status()
            .await
            .with_context(|| {
                format!("Impossible de lancer {}", self.program.to_string_lossy())
            })?;

        if !status.success() {
            anyhow::bail!(
                "{} a échoué avec le code {}",
                self.program.to_string_lossy(),
                status.code().unwrap_or(-1)
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_create_command() {
        let engine = EngineCli::new("unity");
        assert_eq!(
            engine.create_command(&PathBuf::from("/work/FailFrenzy")),
            "unity -createProject /work/FailFrenzy -quit -batchmode"
        );
    }

    #[test]
    fn test_unresolved_engine_falls_back_to_bare_name() {
        let dir = tempfile::TempDir::new().unwrap();
        let probe = Probe::new("unity").with_search_path(dir.path());
        let engine = EngineCli::from_probe(&probe);
        assert!(engine.create_command(Path::new("p")).starts_with("unity "));
    }

    #[tokio::test]
    async fn test_missing_engine_is_an_error() {
        let engine = EngineCli::new("definitely-not-an-engine-binary");
        let dir = tempfile::TempDir::new().unwrap();
        let err = engine
            .create_project(&dir.path().join("Project"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Impossible de lancer"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_engine_receives_batch_arguments() {
        let dir = tempfile::TempDir::new().unwrap();
        let log = dir.path().join("args.txt");
        let engine_path = crate::testing::write_executable(
            dir.path(),
            "unity",
            &format!("echo \"$@\" > '{}'\nmkdir -p \"$2\"", log.display()),
        );
        let project = dir.path().join("FailFrenzy");

        EngineCli::new(engine_path)
            .create_project(&project)
            .await
            .unwrap();

        let args = std::fs::read_to_string(&log).unwrap();
        assert_eq!(
            args.trim(),
            format!("-createProject {} -quit -batchmode", project.display())
        );
        assert!(project.is_dir());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_engine_failure_reports_exit_code() {
        let dir = tempfile::TempDir::new().unwrap();
        let engine_path = crate::testing::write_executable(dir.path(), "unity", "exit 3");

        let err = EngineCli::new(engine_path)
            .create_project(&dir.path().join("FailFrenzy"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("code 3"));
    }
}
