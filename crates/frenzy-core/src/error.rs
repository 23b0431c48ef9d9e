//! Errors raised by the scaffold steps

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The project root (or its `Assets` directory) has not been created yet
    #[error("Projet Unity non trouvé. Créez-le d'abord!")]
    ProjectNotFound { path: PathBuf },

    /// The script file to copy is missing from the working directory
    #[error("{name} non trouvé")]
    ScriptNotFound { name: String },

    #[error("Dossier Scripts non trouvé")]
    ScriptsFolderNotFound { path: PathBuf },

    /// A git invocation exited unsuccessfully
    #[error("git {step} a échoué ({})", describe_code(*code))]
    Git { step: &'static str, code: Option<i32> },

    #[error("Impossible de lancer git {step}: {source}")]
    GitLaunch {
        step: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether the step was skipped because an expected path is absent.
    /// These are reported and the menu flow carries on.
    pub fn is_missing_path(&self) -> bool {
        matches!(
            self,
            Self::ProjectNotFound { .. }
                | Self::ScriptNotFound { .. }
                | Self::ScriptsFolderNotFound { .. }
        )
    }

    /// Process exit status to terminate with when this error is fatal.
    ///
    /// Git failures surface git's own status; anything that has no usable
    /// status (signals, launch failures, codes outside 1..=255) maps to 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Git {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "interrompu par un signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_exit_code_is_propagated() {
        let err = ScaffoldError::Git {
            step: "commit",
            code: Some(128),
        };
        assert_eq!(err.exit_code(), 128);
        assert!(err.to_string().contains("code 128"));
    }

    #[test]
    fn test_unusable_codes_map_to_one() {
        let signal = ScaffoldError::Git {
            step: "init",
            code: None,
        };
        assert_eq!(signal.exit_code(), 1);

        let out_of_range = ScaffoldError::Git {
            step: "add",
            code: Some(300),
        };
        assert_eq!(out_of_range.exit_code(), 1);

        let launch = ScaffoldError::GitLaunch {
            step: "init",
            source: io::Error::new(io::ErrorKind::NotFound, "git"),
        };
        assert_eq!(launch.exit_code(), 1);
    }

    #[test]
    fn test_missing_path_classification() {
        assert!(ScaffoldError::ScriptsFolderNotFound {
            path: PathBuf::from("FailFrenzy/Assets/Scripts")
        }
        .is_missing_path());
        assert!(!ScaffoldError::Git {
            step: "init",
            code: Some(1)
        }
        .is_missing_path());
    }

    #[test]
    fn test_messages() {
        let err = ScaffoldError::ScriptNotFound {
            name: "UNITY_SCRIPTS_COMPLETE.cs".to_string(),
        };
        assert_eq!(err.to_string(), "UNITY_SCRIPTS_COMPLETE.cs non trouvé");

        let err = ScaffoldError::ScriptsFolderNotFound {
            path: PathBuf::from("x"),
        };
        assert_eq!(err.to_string(), "Dossier Scripts non trouvé");
    }
}
