//! Fail Frenzy quick start - bootstrap the Unity project

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use frenzy_core::ProductConfig;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable controlling diagnostic output (e.g. `FRENZY_LOG=debug`)
const LOG_ENV: &str = "FRENZY_LOG";

/// Fail Frenzy product configuration
#[derive(Clone)]
pub struct FailFrenzyConfig;

impl ProductConfig for FailFrenzyConfig {
    fn display_name(&self) -> &'static str {
        "FAIL FRENZY: THE LOOP"
    }

    fn project_dir_name(&self) -> &'static str {
        "FailFrenzy"
    }

    fn asset_folders(&self) -> &'static [&'static str] {
        &[
            "Scripts/Core",
            "Scripts/Managers",
            "Scripts/Controllers",
            "Scripts/Systems",
            "Scripts/UI",
            "Prefabs",
            "Scenes",
            "Resources",
            "Images",
            "Audio/Music",
            "Audio/SFX",
            "Fonts",
            "Materials",
            "Animations",
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
        "Initial commit - Fail Frenzy by Grouptechflow"
    }

    fn engine_binary(&self) -> &'static str {
        if cfg!(windows) {
            "Unity"
        } else {
            "unity"
        }
    }

    fn engine_binary_env(&self) -> &'static str {
        "FAIL_FRENZY_UNITY"
    }

    fn next_steps(&self, project_dir: &Path) -> Vec<String> {
        vec![
            "Ouvrir Unity Hub".to_string(),
            format!("Ajouter le projet: {}", project_dir.display()),
            "Ouvrir le projet avec Unity 2022 LTS".to_string(),
            "Importer les packages requis: Unity Input System, Unity IAP, Firebase SDK, AdMob SDK"
                .to_string(),
            "Lire PHASE_1_2_3_GUIDE.md (puis DEVELOPER_INSTRUCTIONS.md, GAME_ARCHITECTURE_ADVANCED.md)"
                .to_string(),
            "Commencer le développement !".to_string(),
        ]
    }

    fn cli_description(&self) -> &'static str {
        "Quick start setup for the Fail Frenzy Unity project"
    }
}

#[derive(Parser, Debug)]
#[command(name = "frenzy-setup")]
#[command(version)]
pub struct Args {}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = FailFrenzyConfig;
    let matches = Args::command()
        .about(config.cli_description())
        .get_matches();
    let _args = Args::from_arg_matches(&matches)?;
    init_tracing();

    let result = frenzy_core::run(&config).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
