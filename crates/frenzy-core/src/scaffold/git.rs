//! Repository initialization

use crate::error::{Result, ScaffoldError};
use crate::layout::ScaffoldLayout;
use std::ffi::OsString;
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitOutcome {
    Initialized,
    AlreadyInitialized,
}

/// Runs git commands in the working directory
#[derive(Debug, Clone)]
pub struct Git {
    program: OsString,
}

impl Default for Git {
    fn default() -> Self {
        Self::new("git")
    }
}

impl Git {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Initialize a repository at the working root, stage everything, and
    /// create the initial commit.
    ///
    /// Does nothing if `.git` already exists. The first failing command
    /// aborts the sequence with `ScaffoldError::Git`.
    pub async fn init_repository(&self, layout: &ScaffoldLayout) -> Result<GitOutcome> {
        if layout.git_dir().exists() {
            debug!("git repository already exists at {}", layout.base().display());
            return Ok(GitOutcome::AlreadyInitialized);
        }

        let dir = layout.base();
        info!("initializing git repository at {}", dir.display());
        self.run(dir, "init", &["init"]).await?;
        self.run(dir, "add", &["add", "."]).await?;
        self.run(dir, "commit", &["commit", "-m", layout.commit_message()])
            .await?;

        Ok(GitOutcome::Initialized)
    }

    async fn run(&self, dir: &Path, step: &'static str, args: &[&str]) -> Result<()> {
        debug!("running: git {}", args.join(" "));
        let status = Command::new(&self.program)
            .current_dir(dir)
            .args(args)
            .status()
            .await
            .map_err(|source| ScaffoldError::GitLaunch { step, source })?;

        if !status.success() {
            return Err(ScaffoldError::Git {
                step,
                code: status.code(),
            });
        }
        Ok(())
    }
}
