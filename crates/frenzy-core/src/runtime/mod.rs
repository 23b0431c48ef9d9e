//! Runtime detection and external tool management
//!
//! This module provides:
//! - Prerequisite probes for Unity, Git, Node.js and Python
//! - The engine CLI wrapper used to create projects
//! - Version parsing for tool output

pub mod check;
pub mod tool;
pub mod version;

pub use check::{PrerequisiteReport, Probe, Tool, ToolStatus};
pub use tool::EngineCli;
