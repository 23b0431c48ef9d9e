//! The scaffold steps, in the order a full setup runs them
//!
//! Steps share no in-memory state. Each one checks the filesystem for what
//! the previous step should have produced.

pub mod assets;
pub mod git;
pub mod project;
pub mod structure;

pub use assets::{copy_assets, copy_script, AssetCopy};
pub use git::{Git, GitOutcome};
pub use project::{launch_engine, prepare_target, ProjectOutcome, TargetState};
pub use structure::build_structure;
