//! Charm-style setup menu using cliclack

use crate::error::{self, ScaffoldError};
use crate::layout::ScaffoldLayout;
use crate::product::ProductConfig;
use crate::runtime::check::{PrerequisiteReport, Probe, Tool};
use crate::runtime::tool::EngineCli;
use crate::scaffold::{self, Git, GitOutcome, ProjectOutcome, TargetState};
use anyhow::Result;
use colored::Colorize;
use std::fmt;
use std::path::Path;
use std::process::ExitCode;
use std::str::FromStr;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FullSetup,
    ProjectOnly,
    StructureOnly,
    AssetsOnly,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::FullSetup,
        MenuChoice::ProjectOnly,
        MenuChoice::StructureOnly,
        MenuChoice::AssetsOnly,
        MenuChoice::Quit,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::FullSetup => "1",
            MenuChoice::ProjectOnly => "2",
            MenuChoice::StructureOnly => "3",
            MenuChoice::AssetsOnly => "4",
            MenuChoice::Quit => "5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::FullSetup => "Setup complet (recommandé)",
            MenuChoice::ProjectOnly => "Créer uniquement le projet Unity",
            MenuChoice::StructureOnly => "Configurer la structure de dossiers",
            MenuChoice::AssetsOnly => "Copier les scripts et assets",
            MenuChoice::Quit => "Quitter",
        }
    }
}

/// Menu input that matches no entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice(pub String);

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Choix invalide: '{}'", self.0)
    }
}

impl std::error::Error for InvalidChoice {}

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| InvalidChoice(key.to_string()))
    }
}

/// One unit of work run by a menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreateProject,
    BuildStructure,
    CopyScript,
    CopyAssets,
    InitRepository,
    NextSteps,
}

impl MenuChoice {
    /// Steps run for this entry, in order
    pub fn steps(&self) -> &'static [Step] {
        match self {
            MenuChoice::FullSetup => &[
                Step::CreateProject,
                Step::BuildStructure,
                Step::CopyScript,
                Step::CopyAssets,
                Step::InitRepository,
                Step::NextSteps,
            ],
            MenuChoice::ProjectOnly => &[Step::CreateProject],
            MenuChoice::StructureOnly => &[Step::BuildStructure],
            MenuChoice::AssetsOnly => &[Step::CopyScript, Step::CopyAssets],
            MenuChoice::Quit => &[],
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    Quit,
    MissingPrerequisites,
    InvalidInput,
    /// A git command failed with this status
    GitFailed(u8),
}

impl RunStatus {
    pub fn code(&self) -> u8 {
        match self {
            RunStatus::Completed | RunStatus::Quit => 0,
            RunStatus::MissingPrerequisites | RunStatus::InvalidInput => 1,
            RunStatus::GitFailed(code) => *code,
        }
    }
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// What to do with the line read from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dispatch {
    Run(MenuChoice),
    Stop(RunStatus),
}

/// Stop before the menu when any prerequisite is missing
fn prerequisite_gate(report: &PrerequisiteReport) -> Option<RunStatus> {
    if report.all_available() {
        None
    } else {
        Some(RunStatus::MissingPrerequisites)
    }
}

fn dispatch(input: std::result::Result<MenuChoice, InvalidChoice>) -> Dispatch {
    match input {
        Ok(MenuChoice::Quit) => Dispatch::Stop(RunStatus::Quit),
        Ok(choice) => Dispatch::Run(choice),
        Err(_) => Dispatch::Stop(RunStatus::InvalidInput),
    }
}

/// External programs the steps shell out to
struct Toolchain {
    engine: EngineCli,
    git: Git,
}

/// Run the setup: probe prerequisites, show the menu, dispatch one choice.
///
/// Returns the process exit status. Missing prerequisites and invalid input
/// give 1; a failing git command gives git's own status.
pub async fn run<C: ProductConfig>(config: &C) -> Result<ExitCode> {
    cliclack::intro(format!("{} - Quick Start", config.display_name()))?;

    let probe = Probe::from_config(config);
    let report = check_prerequisites(&probe)?;
    if let Some(status) = prerequisite_gate(&report) {
        cliclack::outro_cancel("Installez les prérequis manquants avant de continuer.")?;
        return Ok(status.into());
    }

    let layout = ScaffoldLayout::from_current_dir(config)?;
    let tools = Toolchain {
        engine: EngineCli::from_probe(&probe),
        git: Git::default(),
    };

    let input = prompt_choice()?;
    if let Err(invalid) = &input {
        cliclack::log::error(invalid.to_string())?;
    }

    let status = match dispatch(input) {
        Dispatch::Run(choice) => execute(config, &layout, &tools, choice).await?,
        Dispatch::Stop(RunStatus::Quit) => {
            cliclack::outro("À bientôt !")?;
            RunStatus::Quit
        }
        Dispatch::Stop(status) => {
            cliclack::outro_cancel("Choix invalide")?;
            status
        }
    };

    Ok(status.into())
}

async fn execute<C: ProductConfig>(
    config: &C,
    layout: &ScaffoldLayout,
    tools: &Toolchain,
    choice: MenuChoice,
) -> Result<RunStatus> {
    let steps = choice.steps();

    for step in steps {
        match step {
            Step::CreateProject => create_project(layout, &tools.engine).await?,
            Step::BuildStructure => build_structure(layout).await?,
            Step::CopyScript => copy_script(layout).await?,
            Step::CopyAssets => copy_assets(layout).await?,
            Step::InitRepository => {
                if let Some(status) = init_repository(layout, &tools.git).await? {
                    return Ok(status);
                }
            }
            Step::NextSteps => print_next_steps(config, layout)?,
        }
    }

    if !steps.contains(&Step::NextSteps) {
        cliclack::outro("Terminé")?;
    }

    Ok(RunStatus::Completed)
}

fn check_prerequisites(probe: &Probe) -> Result<PrerequisiteReport> {
    let spinner = cliclack::spinner();
    spinner.start("Vérification des prérequis...");

    let report = probe.check_all();

    if report.all_available() {
        spinner.stop("Tous les prérequis sont installés !");
    } else {
        spinner.stop("Certains prérequis manquent");
    }

    for status in report.tools.iter().filter(|t| t.available) {
        cliclack::log::success(format!(
            "{} ({})",
            status.tool,
            status.version.as_deref().unwrap_or("installé")
        ))?;
    }

    if !report.all_available() {
        let missing: Vec<String> = report
            .tools
            .iter()
            .filter(|t| !t.available)
            .map(|t| match (&t.version, t.tool) {
                (Some(found), Tool::Python) => format!(
                    "   - {} ({} trouvé, {} requis)",
                    t.tool,
                    found,
                    crate::runtime::check::MIN_PYTHON
                ),
                _ => format!("   - {}", t.tool),
            })
            .collect();
        cliclack::log::error(format!(
            "Certains prérequis manquent. Veuillez les installer:\n{}",
            missing.join("\n")
        ))?;
    }

    Ok(report)
}

/// Show the menu and read one line. The outer error is a terminal failure,
/// the inner one an unknown entry.
fn prompt_choice() -> Result<std::result::Result<MenuChoice, InvalidChoice>> {
    let menu = MenuChoice::ALL
        .iter()
        .map(|c| format!("{}. {}", c.key(), c.label()))
        .collect::<Vec<_>>()
        .join("\n");
    cliclack::note("Que souhaitez-vous faire?", menu)?;

    let input: String = cliclack::input("Votre choix (1-5)")
        .placeholder("1")
        .required(false)
        .interact()?;

    Ok(input.parse())
}

/// Report a skipped step and carry on; anything else is fatal
fn recoverable<T>(result: error::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_missing_path() => {
            cliclack::log::error(e.to_string())?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

async fn create_project(layout: &ScaffoldLayout, engine: &EngineCli) -> Result<()> {
    cliclack::log::step("Création du projet Unity...")?;
    let display_root = layout.display_project_root();

    let state = scaffold::prepare_target(layout, |_| {
        cliclack::log::warning(format!("Le projet existe déjà: {}", display_root))?;
        cliclack::confirm("Voulez-vous le supprimer et recommencer?")
            .initial_value(false)
            .interact()
    })
    .await?;

    match state {
        TargetState::Kept => {
            cliclack::log::info("Conservation du projet existant")?;
            return Ok(());
        }
        TargetState::Cleared => cliclack::log::success("Projet supprimé")?,
        TargetState::Fresh => {}
    }

    cliclack::log::info("Création en cours... (cela peut prendre quelques minutes)")?;

    match scaffold::launch_engine(layout, engine, state).await {
        ProjectOutcome::Created { .. } => {
            cliclack::log::success(format!("Projet Unity créé: {}", display_root))?;
        }
        ProjectOutcome::EngineFailed { reason } => {
            cliclack::log::error(format!(
                "Erreur lors de la création du projet Unity\n{}",
                reason
            ))?;
            cliclack::log::info("Créez le projet manuellement via Unity Hub")?;
        }
        ProjectOutcome::Kept => {}
    }

    Ok(())
}

async fn build_structure(layout: &ScaffoldLayout) -> Result<()> {
    cliclack::log::step("Configuration de la structure du projet...")?;
    if recoverable(scaffold::build_structure(layout).await)?.is_some() {
        cliclack::log::success("Structure de dossiers créée")?;
    }
    Ok(())
}

async fn copy_script(layout: &ScaffoldLayout) -> Result<()> {
    cliclack::log::step("Copie des scripts Unity...")?;
    if recoverable(scaffold::copy_script(layout).await)?.is_some() {
        cliclack::log::success("Scripts copiés")?;
    }
    Ok(())
}

async fn copy_assets(layout: &ScaffoldLayout) -> Result<()> {
    cliclack::log::step("Copie des assets...")?;
    let Some(copy) = recoverable(scaffold::copy_assets(layout).await)? else {
        return Ok(());
    };

    if let Some(count) = copy.images_copied {
        cliclack::log::success(format!("Images copiées ({} fichiers)", count))?;
    }
    if !copy.configs_copied.is_empty() {
        cliclack::log::info(format!(
            "Configurations copiées: {}",
            copy.configs_copied.join(", ")
        ))?;
    }
    cliclack::log::success("Assets copiés")?;
    Ok(())
}

/// Returns the status to terminate with when git fails
async fn init_repository(layout: &ScaffoldLayout, git: &Git) -> Result<Option<RunStatus>> {
    cliclack::log::step("Configuration Git...")?;

    match git.init_repository(layout).await {
        Ok(GitOutcome::Initialized) => {
            cliclack::log::success("Repository Git initialisé")?;
            Ok(None)
        }
        Ok(GitOutcome::AlreadyInitialized) => {
            cliclack::log::info("Repository Git déjà initialisé")?;
            Ok(None)
        }
        Err(e @ (ScaffoldError::Git { .. } | ScaffoldError::GitLaunch { .. })) => {
            cliclack::log::error(e.to_string())?;
            cliclack::outro_cancel("Setup interrompu")?;
            Ok(Some(RunStatus::GitFailed(e.exit_code())))
        }
        Err(e) => Err(e.into()),
    }
}

fn print_next_steps<C: ProductConfig>(config: &C, layout: &ScaffoldLayout) -> Result<()> {
    let steps = config.next_steps(Path::new(&layout.display_project_root()));

    cliclack::log::success("SETUP TERMINÉ !")?;

    println!();
    println!("  {}", "Prochaines étapes".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }
    println!();

    cliclack::outro("Bon développement !")?;

    Ok(())
}
