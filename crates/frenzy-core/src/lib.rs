//! Frenzy Core - bootstrap library for the Fail Frenzy Unity project
//!
//! Checks the local toolchain, creates the Unity project, lays out its asset
//! folders, copies scripts and assets in, and initializes a git repository.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Tool probes and the scaffold steps, each
//!   returning an explicit outcome
//! - **Layer 2: Configuration** - `ProductConfig` trait resolved into a
//!   `ScaffoldLayout` against a working directory
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based menu (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based menu module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use frenzy_core::{scaffold, ScaffoldLayout};
//!
//! let layout = ScaffoldLayout::from_current_dir(&MyConfig)?;
//! scaffold::build_structure(&layout).await?;
//! scaffold::copy_script(&layout).await?;
//! ```

pub mod error;
pub mod layout;
pub mod product;
pub mod runtime;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use layout::ScaffoldLayout;
pub use product::ProductConfig;
pub use runtime::{EngineCli, PrerequisiteReport, Probe, Tool, ToolStatus};

#[cfg(feature = "tui")]
pub use tui::run;
