//! Product configuration trait for setup binaries
//!
//! The scaffold steps never hardcode names or paths. Everything they need
//! about the game project being bootstrapped comes through this trait.

use std::path::Path;

/// Configuration trait for the project being bootstrapped
///
/// Implementors define:
/// - Product identity (display name, project directory)
/// - The asset folder layout and the files copied into it
/// - The engine executable and its environment override
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Name of the project directory created next to the working directory
    fn project_dir_name(&self) -> &'static str;

    /// Folders created under the project's `Assets` directory, relative paths
    fn asset_folders(&self) -> &'static [&'static str];

    /// Script file copied into `Assets/Scripts`
    fn script_file(&self) -> &'static str;

    /// Directory of images merged into `Assets/Images`
    fn images_dir(&self) -> &'static str;

    /// Configuration files copied into `Assets/Resources` when present
    fn config_files(&self) -> &'static [&'static str];

    /// Message of the initial commit
    fn commit_message(&self) -> &'static str;

    /// Name of the engine executable looked up on the search path
    fn engine_binary(&self) -> &'static str;

    /// Environment variable overriding the engine executable
    fn engine_binary_env(&self) -> &'static str;

    /// Generate the "next steps" instructions shown after a full setup
    fn next_steps(&self, project_dir: &Path) -> Vec<String>;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;
}
