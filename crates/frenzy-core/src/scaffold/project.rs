//! Engine project creation

use crate::error::{Result, ScaffoldError};
use crate::layout::ScaffoldLayout;
use crate::runtime::tool::EngineCli;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// State of the project path before the engine runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Nothing existed at the path
    Fresh,
    /// An existing project was deleted on request
    Cleared,
    /// An existing project was kept; creation must be skipped
    Kept,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectOutcome {
    Created { replaced: bool },
    Kept,
    /// The engine could not create the project; the user has to do it by hand
    EngineFailed { reason: String },
}

/// Make the project path ready for creation.
///
/// When the path already exists, `confirm_replace` decides whether it is
/// deleted. It is not called otherwise.
pub async fn prepare_target<F>(layout: &ScaffoldLayout, confirm_replace: F) -> Result<TargetState>
where
    F: FnOnce(&Path) -> io::Result<bool>,
{
    let root = layout.project_root();
    if !root.exists() {
        return Ok(TargetState::Fresh);
    }

    let replace = confirm_replace(&root)
        .map_err(|e| ScaffoldError::io("Confirmation interrompue", e))?;
    if !replace {
        debug!("keeping existing project at {}", root.display());
        return Ok(TargetState::Kept);
    }

    info!("removing existing project at {}", root.display());
    fs::remove_dir_all(&root)
        .await
        .map_err(|e| ScaffoldError::io(format!("Impossible de supprimer {}", root.display()), e))?;
    Ok(TargetState::Cleared)
}

/// Run the engine against the project path. Engine failures are folded into
/// the outcome rather than returned as errors.
pub async fn launch_engine(
    layout: &ScaffoldLayout,
    engine: &EngineCli,
    state: TargetState,
) -> ProjectOutcome {
    if state == TargetState::Kept {
        return ProjectOutcome::Kept;
    }

    match engine.create_project(&layout.project_root()).await {
        Ok(()) => ProjectOutcome::Created {
            replaced: state == TargetState::Cleared,
        },
        Err(e) => ProjectOutcome::EngineFailed {
            reason: format!("{:#}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{snapshot, workspace};

    fn unreachable_engine() -> EngineCli {
        EngineCli::new("definitely-not-an-engine-binary")
    }

    async fn create_answering(
        layout: &ScaffoldLayout,
        engine: &EngineCli,
        replace: bool,
    ) -> ProjectOutcome {
        let state = prepare_target(layout, |_| Ok(replace)).await.unwrap();
        launch_engine(layout, engine, state).await
    }

    fn seed_project(layout: &ScaffoldLayout) {
        let scripts = layout.scripts_dir();
        std::fs::create_dir_all(&scripts).unwrap();
        std::fs::write(scripts.join("Player.cs"), b"class Player {}").unwrap();
        std::fs::write(layout.project_root().join("notes.txt"), b"keep me").unwrap();
    }

    #[tokio::test]
    async fn test_declining_keeps_project_byte_identical() {
        let (_dir, layout) = workspace();
        seed_project(&layout);
        let before = snapshot(&layout.project_root());

        let outcome = create_answering(&layout, &unreachable_engine(), false).await;

        assert_eq!(outcome, ProjectOutcome::Kept);
        assert_eq!(snapshot(&layout.project_root()), before);
    }

    #[tokio::test]
    async fn test_confirm_not_asked_for_fresh_path() {
        let (_dir, layout) = workspace();

        let state = prepare_target(&layout, |_| panic!("no prompt expected"))
            .await
            .unwrap();

        assert_eq!(state, TargetState::Fresh);
    }

    #[tokio::test]
    async fn test_accepting_deletes_existing_project() {
        let (_dir, layout) = workspace();
        seed_project(&layout);

        let state = prepare_target(&layout, |path| {
            assert!(path.ends_with("FailFrenzy"));
            Ok(true)
        })
        .await
        .unwrap();

        assert_eq!(state, TargetState::Cleared);
        assert!(!layout.project_root().exists());
    }

    #[tokio::test]
    async fn test_prompt_failure_leaves_project_alone() {
        let (_dir, layout) = workspace();
        seed_project(&layout);

        let err = prepare_target(&layout, |_| {
            Err(io::Error::new(io::ErrorKind::Interrupted, "ctrl-c"))
        })
        .await
        .unwrap_err();

        assert!(matches!(err, ScaffoldError::Io { .. }));
        assert!(layout.project_root().join("notes.txt").exists());
    }

    #[tokio::test]
    async fn test_engine_failure_is_recoverable() {
        let (_dir, layout) = workspace();

        let outcome = create_answering(&layout, &unreachable_engine(), true).await;

        assert!(matches!(outcome, ProjectOutcome::EngineFailed { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_replaced_project_is_recreated() {
        let (_dir, layout) = workspace();
        seed_project(&layout);
        let tools = tempfile::TempDir::new().unwrap();
        let engine_path =
            crate::testing::write_executable(tools.path(), "unity", "mkdir -p \"$2/Assets\"");

        let outcome = create_answering(&layout, &EngineCli::new(engine_path), true).await;

        assert_eq!(outcome, ProjectOutcome::Created { replaced: true });
        assert!(layout.assets_dir().is_dir());
        assert!(!layout.project_root().join("notes.txt").exists());
    }
}
