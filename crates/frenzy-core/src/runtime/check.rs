//! Prerequisite detection for Unity, Git, Node.js and Python

use super::version;
use crate::product::ProductConfig;
use semver::Version;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Oldest Python accepted by the setup
pub const MIN_PYTHON: Version = Version::new(3, 8, 0);

/// External tools the setup depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Unity,
    Git,
    Node,
    Python,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Unity, Tool::Git, Tool::Node, Tool::Python];

    pub fn display_name(&self) -> &'static str {
        match self {
            Tool::Unity => "Unity Hub",
            Tool::Git => "Git",
            Tool::Node => "Node.js",
            Tool::Python => "Python",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Detection result for one tool
#[derive(Debug, Clone)]
pub struct ToolStatus {
    pub tool: Tool,
    pub version: Option<String>,
    pub available: bool,
}

impl ToolStatus {
    fn missing(tool: Tool) -> Self {
        Self {
            tool,
            version: None,
            available: false,
        }
    }
}

/// Outcome of probing every tool
#[derive(Debug, Clone)]
pub struct PrerequisiteReport {
    pub tools: Vec<ToolStatus>,
}

impl PrerequisiteReport {
    pub fn all_available(&self) -> bool {
        self.tools.iter().all(|t| t.available)
    }

    pub fn missing(&self) -> Vec<Tool> {
        self.tools
            .iter()
            .filter(|t| !t.available)
            .map(|t| t.tool)
            .collect()
    }
}

/// Looks tools up on a search path and queries their versions.
///
/// Probing never fails: a tool that cannot be found, launched, or that
/// exits unsuccessfully is reported as not installed.
#[derive(Debug, Clone)]
pub struct Probe {
    engine_binary: String,
    search_path: Option<OsString>,
}

impl Probe {
    /// Probe for `engine_binary` and the other tools on the process `PATH`
    pub fn new(engine_binary: impl Into<String>) -> Self {
        Self {
            engine_binary: engine_binary.into(),
            search_path: std::env::var_os("PATH"),
        }
    }

    /// Build a probe from a product config, honouring its engine override variable
    pub fn from_config<C: ProductConfig>(config: &C) -> Self {
        let engine = std::env::var(config.engine_binary_env())
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| config.engine_binary().to_string());
        Self::new(engine)
    }

    /// Replace the search path (same syntax as `PATH`)
    pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    pub fn engine_binary(&self) -> &str {
        &self.engine_binary
    }

    /// Resolve an executable against the probe's search path
    pub fn resolve(&self, binary: &str) -> Option<PathBuf> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        match which::which_in(binary, self.search_path.as_ref(), cwd) {
            Ok(path) => Some(path),
            Err(e) => {
                debug!("{} not found on search path: {}", binary, e);
                None
            }
        }
    }

    /// Run `<binary> --version`, returning its trimmed output on success.
    /// Some tools print their version to stderr.
    fn version_of(&self, binary: &str) -> Option<String> {
        let path = self.resolve(binary)?;
        let output = match Command::new(&path).arg("--version").output() {
            Ok(output) => output,
            Err(e) => {
                debug!("failed to launch {}: {}", path.display(), e);
                return None;
            }
        };

        if !output.status.success() {
            debug!("{} --version exited with {}", path.display(), output.status);
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let version = if stdout.trim().is_empty() {
            stderr.trim().to_string()
        } else {
            stdout.trim().to_string()
        };
        Some(version)
    }

    /// Unity is only checked for presence; it has no cheap version query
    pub fn check_unity(&self) -> ToolStatus {
        ToolStatus {
            tool: Tool::Unity,
            version: None,
            available: self.resolve(&self.engine_binary).is_some(),
        }
    }

    pub fn check_git(&self) -> ToolStatus {
        self.check_version(Tool::Git, "git")
    }

    pub fn check_node(&self) -> ToolStatus {
        self.check_version(Tool::Node, "node")
    }

    /// Python 3.8 or newer, as `python3` or else `python`.
    ///
    /// Every candidate is tried; the first recent enough one wins. When none
    /// qualifies, the first version found is reported.
    pub fn check_python(&self) -> ToolStatus {
        let mut first_found = None;

        for bin in ["python3", "python"] {
            let Some(output) = self.version_of(bin) else {
                continue;
            };
            if version::meets_minimum(&output, &MIN_PYTHON) {
                return ToolStatus {
                    tool: Tool::Python,
                    version: Some(output),
                    available: true,
                };
            }
            debug!("{} reports {}, older than {}", bin, output, MIN_PYTHON);
            if first_found.is_none() {
                first_found = Some(output);
            }
        }

        ToolStatus {
            tool: Tool::Python,
            version: first_found,
            available: false,
        }
    }

    fn check_version(&self, tool: Tool, binary: &str) -> ToolStatus {
        match self.version_of(binary) {
            Some(version) => ToolStatus {
                tool,
                version: Some(version),
                available: true,
            },
            None => ToolStatus::missing(tool),
        }
    }

    /// Probe all four tools
    pub fn check_all(&self) -> PrerequisiteReport {
        let tools = Tool::ALL
            .iter()
            .map(|tool| match tool {
                Tool::Unity => self.check_unity(),
                Tool::Git => self.check_git(),
                Tool::Node => self.check_node(),
                Tool::Python => self.check_python(),
            })
            .collect();
        PrerequisiteReport { tools }
    }
}
