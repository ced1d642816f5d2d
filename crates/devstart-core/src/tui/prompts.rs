//! Charm-style stack interview using cliclack

use crate::generate::generate_project;
use crate::install::{init_git, install_dependencies, PackageManager};
use crate::manifest::PackageManifest;
use crate::stack::{
    Auth, Database, DataFetching, ExtraTool, Framework, StackConfig, StateManagement, Styling,
    UiKit,
};
use crate::validate::{validate_project_name, validate_project_path};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Pre-answered interview questions, usually from CLI flags.
/// Any field left `None` is asked interactively (or defaulted with `yes`).
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name (also the target directory name)
    pub name: Option<String>,

    /// Stack choices by identifier (e.g. "nextjs-app", "tailwind")
    pub framework: Option<String>,
    pub styling: Option<String>,
    pub ui: Option<String>,
    pub state: Option<String>,
    pub data: Option<String>,
    pub database: Option<String>,
    pub auth: Option<String>,

    /// Additional tool identifiers
    pub tools: Option<Vec<String>>,

    /// Confirm answers; `None` means ask
    pub typescript: Option<bool>,
    pub git: Option<bool>,
    pub install: Option<bool>,

    /// Accept the default for every unanswered question (non-interactive mode)
    pub yes: bool,
}

/// Run the full interview and scaffold the project
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("DevStart")?;
    cliclack::log::remark("Stop configuring. Start building.")?;

    // Step 1: Project name and target path
    let project_name = resolve_name(&args)?;
    let project_dir = std::env::current_dir()?.join(&project_name);
    if let Err(e) = validate_project_path(&project_dir) {
        cliclack::log::error(e.to_string())?;
        anyhow::bail!("Setup cancelled.");
    }

    // Step 2: The stack interview
    let config = interview(&args, project_name)?;

    // Step 3: Write the skeleton
    let spinner = cliclack::spinner();
    spinner.start("Creating your project...");
    match generate_project(&config, &project_dir).await {
        Ok(files) => {
            spinner.stop(format!(
                "Created {} files in {}",
                files.len(),
                project_dir.display()
            ));
        }
        Err(e) => {
            spinner.stop("Project generation failed");
            return Err(e);
        }
    }

    // Step 4: Optional git init (non-fatal)
    if config.git {
        handle_git(&project_dir).await?;
    }

    // Step 5: Optional dependency install (non-fatal)
    let manager = PackageManager::detect(&project_dir);
    if config.install {
        handle_install(&project_dir, manager).await?;
    } else {
        cliclack::log::info("Skipping dependency installation")?;
    }

    // Step 6: Next steps
    print_next_steps(&config, &project_dir, manager)?;

    Ok(())
}

fn resolve_name(args: &CreateArgs) -> Result<String> {
    if let Some(name) = &args.name {
        if let Err(e) = validate_project_name(name) {
            anyhow::bail!("{e}");
        }
        return Ok(name.clone());
    }

    if args.yes {
        return Ok("my-awesome-app".to_string());
    }

    let name: String = cliclack::input("What's your project name?")
        .placeholder("my-awesome-app")
        .default_input("my-awesome-app")
        .validate(|input: &String| validate_project_name(input).map_err(|e| e.to_string()))
        .interact()?;

    Ok(name)
}

/// Ask every stack question, honoring presets and `--yes`
fn interview(args: &CreateArgs, project_name: String) -> Result<StackConfig> {
    let defaults = StackConfig::defaults(&project_name);

    let framework = choose(
        "Which framework?",
        Framework::ALL,
        defaults.framework,
        args.framework.as_deref(),
        args.yes,
        Framework::id,
        Framework::display_name,
    )?;

    let styling = choose(
        "Choose your styling solution:",
        Styling::ALL,
        defaults.styling,
        args.styling.as_deref(),
        args.yes,
        Styling::id,
        Styling::display_name,
    )?;

    let ui = choose(
        "Add UI components?",
        UiKit::ALL,
        defaults.ui,
        args.ui.as_deref(),
        args.yes,
        UiKit::id,
        UiKit::display_name,
    )?;

    let state_management = choose(
        "State management?",
        StateManagement::ALL,
        defaults.state_management,
        args.state.as_deref(),
        args.yes,
        StateManagement::id,
        StateManagement::display_name,
    )?;

    let data_fetching = choose(
        "Data fetching?",
        DataFetching::ALL,
        defaults.data_fetching,
        args.data.as_deref(),
        args.yes,
        DataFetching::id,
        DataFetching::display_name,
    )?;

    let database = choose(
        "Database & Backend?",
        Database::ALL,
        defaults.database,
        args.database.as_deref(),
        args.yes,
        Database::id,
        Database::display_name,
    )?;

    let auth = choose(
        "Authentication?",
        Auth::ALL,
        defaults.auth,
        args.auth.as_deref(),
        args.yes,
        Auth::id,
        Auth::display_name,
    )?;

    let extra_tools = select_tools(args)?;

    let typescript = confirm("TypeScript?", args.typescript, true, args.yes)?;
    let git = confirm("Initialize Git?", args.git, true, args.yes)?;
    let install = confirm("Install dependencies now?", args.install, true, args.yes)?;

    Ok(StackConfig {
        project_name,
        framework,
        styling,
        ui,
        state_management,
        data_fetching,
        database,
        auth,
        extra_tools,
        typescript,
        git,
        install,
    })
}

/// One single-select question: preset id wins, then `--yes` takes the
/// default, then the user is asked.
fn choose<T>(
    label: &str,
    all: &[T],
    default: T,
    preset: Option<&str>,
    yes: bool,
    id: impl Fn(&T) -> &'static str,
    display: impl Fn(&T) -> &'static str,
) -> Result<T>
where
    T: Copy + Clone + Eq + 'static,
{
    if let Some(wanted) = preset {
        return match all.iter().find(|v| id(v) == wanted) {
            Some(v) => Ok(*v),
            None => {
                let available: Vec<&str> = all.iter().map(&id).collect();
                anyhow::bail!(
                    "Unknown option '{}'. Available: {}",
                    wanted,
                    available.join(", ")
                );
            }
        };
    }

    if yes {
        cliclack::log::info(format!("{} {}", label, display(&default)))?;
        return Ok(default);
    }

    let mut select = cliclack::select(label).initial_value(default);
    for value in all {
        select = select.item(*value, display(value), "");
    }

    Ok(select.interact()?)
}

fn select_tools(args: &CreateArgs) -> Result<Vec<ExtraTool>> {
    if let Some(wanted) = &args.tools {
        let mut tools = Vec::new();
        for id in wanted {
            match ExtraTool::from_id(id) {
                Some(tool) if !tools.contains(&tool) => tools.push(tool),
                Some(_) => {}
                None => cliclack::log::warning(format!("Unknown tool: {id}"))?,
            }
        }
        return Ok(tools);
    }

    if args.yes {
        return Ok(Vec::new());
    }

    let mut multi = cliclack::multiselect("Additional tools? (multi-select)");
    for tool in ExtraTool::ALL {
        multi = multi.item(*tool, tool.display_name(), "");
    }

    Ok(multi.required(false).interact()?)
}

fn confirm(label: &str, preset: Option<bool>, default: bool, yes: bool) -> Result<bool> {
    if let Some(answer) = preset {
        return Ok(answer);
    }
    if yes {
        return Ok(default);
    }
    Ok(cliclack::confirm(label).initial_value(default).interact()?)
}

async fn handle_git(project_dir: &PathBuf) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Initializing Git repository...");

    match init_git(project_dir).await {
        Ok(()) => {
            spinner.stop("Git repository initialized");
        }
        Err(e) => {
            spinner.stop("Failed to initialize Git");
            cliclack::log::warning(format!("{e}"))?;
            cliclack::log::info(format!(
                "You can initialize Git manually:\n  cd {}\n  git init",
                project_dir.display()
            ))?;
        }
    }

    Ok(())
}

async fn handle_install(project_dir: &PathBuf, manager: PackageManager) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start(format!("Installing dependencies with {manager}..."));

    match install_dependencies(project_dir, manager).await {
        Ok(()) => {
            spinner.stop("Dependencies installed successfully!");
        }
        Err(e) => {
            spinner.stop("Failed to install dependencies");
            cliclack::log::warning(format!("{e}"))?;
            cliclack::log::info(format!(
                "You can install dependencies manually:\n  cd {}\n  {}",
                project_dir.display(),
                manager.install_command()
            ))?;
        }
    }

    Ok(())
}

fn print_next_steps(
    config: &StackConfig,
    project_dir: &PathBuf,
    manager: PackageManager,
) -> Result<()> {
    // Sanity: the manifest is reproducible from the config alone, so the
    // summary and package.json always agree.
    let manifest = PackageManifest::compose(config);

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    let mut steps = vec![format!("cd {}", config.project_name)];
    steps.push("Copy .env.local.example to .env.local".to_string());
    steps.push("Add your environment variables".to_string());
    if !config.install {
        steps.push(manager.install_command().to_string());
    }
    steps.push(format!("{} run dev", manager.name()));

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    println!();
    println!(
        "  {}",
        format!(
            "{} dependencies ready at ./{}",
            manifest.dependencies.len() + manifest.dev_dependencies.len(),
            config.project_name
        )
        .dimmed()
    );
    println!(
        "  {}",
        format!("Documentation: {}/README.md", project_dir.display()).dimmed()
    );

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_honors_preset() {
        let picked = choose(
            "Which framework?",
            Framework::ALL,
            Framework::NextjsApp,
            Some("remix"),
            false,
            Framework::id,
            Framework::display_name,
        )
        .unwrap();
        assert_eq!(picked, Framework::Remix);
    }

    #[test]
    fn test_choose_rejects_unknown_preset() {
        let err = choose(
            "Which framework?",
            Framework::ALL,
            Framework::NextjsApp,
            Some("svelte"),
            false,
            Framework::id,
            Framework::display_name,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Available: nextjs-app"));
    }

    #[test]
    fn test_confirm_precedence() {
        // Preset beats --yes
        assert!(!confirm("TypeScript?", Some(false), true, true).unwrap());
        // --yes takes the default
        assert!(confirm("TypeScript?", None, true, true).unwrap());
    }

    #[test]
    fn test_tools_preset_dedupes_and_skips_unknown() {
        let args = CreateArgs {
            tools: Some(vec![
                "zod".to_string(),
                "zod".to_string(),
                "not-a-tool".to_string(),
                "axios".to_string(),
            ]),
            ..Default::default()
        };
        let tools = select_tools(&args).unwrap();
        assert_eq!(tools, vec![ExtraTool::Zod, ExtraTool::Axios]);
    }

    #[test]
    fn test_yes_interview_matches_defaults() {
        let args = CreateArgs {
            yes: true,
            ..Default::default()
        };
        let config = interview(&args, "my-awesome-app".to_string()).unwrap();
        let defaults = StackConfig::defaults("my-awesome-app");
        assert_eq!(config.framework, defaults.framework);
        assert_eq!(config.styling, defaults.styling);
        assert_eq!(config.auth, defaults.auth);
        assert!(config.typescript && config.git && config.install);
        assert!(config.extra_tools.is_empty());
    }

    #[test]
    fn test_resolve_name_rejects_invalid_preset() {
        let args = CreateArgs {
            name: Some("Bad Name".to_string()),
            ..Default::default()
        };
        assert!(resolve_name(&args).is_err());
    }
}
