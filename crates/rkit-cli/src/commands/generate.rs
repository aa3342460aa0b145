//! The generation command — rkit's single job.
//!
//! Responsibility: assemble a complete `OptionSet` from positional arguments
//! and (where those are missing) interactive prompts, then call the core
//! compose service and display results. No composition logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use rkit_adapters::{BuiltinStore, DirStore, LocalFilesystem, NpmRegistry};
use rkit_core::{
    application::{
        ComposeService,
        ports::{FileEmitter, TemplateStore},
    },
    domain::{
        CompositionPlan, DataFetching, OptionSet, StateManagement, UiLibrary, parse_bool_like,
    },
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a generation run.
///
/// Dispatch sequence:
/// 1. Collect the full option set (positionals, then prompts for the rest)
/// 2. Show configuration and confirm unless `--yes` or `--quiet`
/// 3. Handle `--force` / existing directory
/// 4. Early-exit if `--dry-run`
/// 5. Execute generation via `ComposeService`
/// 6. Print next-steps guidance
#[instrument(skip_all)]
pub fn execute(args: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Assemble options
    let options = collect_options(&args)?;
    let project_path = args.output.join(options.name.as_str());

    debug!(
        ui = %options.ui_library,
        router = options.router,
        state = %options.state_management,
        fetch = %options.data_fetching,
        storybook = options.storybook,
        "options resolved"
    );

    // 2. Show configuration and confirm
    if !output.is_quiet() && !args.yes {
        show_configuration(&options, &project_path, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 3. Existing directory: --force wipes it, otherwise bail before the
    //    service ever runs.
    let filesystem = LocalFilesystem::new();
    if filesystem.exists(&project_path) {
        if args.force {
            output.warning(&format!("Removing existing '{}'", project_path.display()))?;
            filesystem.remove_dir_all(&project_path)?;
        } else {
            return Err(CliError::ProjectExists { path: project_path });
        }
    }

    // 4. Dry run: describe the plan but resolve nothing and write nothing.
    if args.dry_run {
        return show_plan(&options, &project_path, &output);
    }

    // 5. Create adapters and generate
    let store: Box<dyn TemplateStore> = match &config.templates.dir {
        Some(dir) => Box::new(DirStore::new(dir)),
        None => Box::new(BuiltinStore::new()),
    };
    let service = ComposeService::new(
        store,
        Box::new(filesystem),
        Box::new(NpmRegistry::new(config.registry.url.clone())),
    );

    output.header(&format!("Creating '{}'...", options.name))?;
    info!(project = %options.name, path = %project_path.display(), "generation started");

    let report = service.generate(&options, &project_path)?;

    info!(project = %options.name, "generation completed");

    // 6. Success + next steps
    output.success(&format!(
        "Project '{}' created! ({} files, {} dependencies, {} dev dependencies)",
        options.name, report.files_written, report.dependencies, report.dev_dependencies
    ))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", options.name))?;
        output.print("  npm install")?;
        output.print("  npm start")?;
        if options.storybook {
            output.print("  npm run storybook")?;
        }
    }

    Ok(())
}

// ── Option collection ─────────────────────────────────────────────────────────

/// Build the full `OptionSet`, prompting for whatever the positional
/// arguments did not cover.
///
/// Positional values are parsed strictly; a typo fails the run rather than
/// silently picking a default or shifting later arguments.
fn collect_options(args: &Cli) -> CliResult<OptionSet> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompt_name()?,
    };

    let ui_library = match &args.ui_library {
        Some(value) => value
            .parse::<UiLibrary>()
            .map_err(|e| CliError::Core(e.into()))?,
        None => prompt_ui_library()?,
    };

    let router = match &args.router {
        Some(value) => parse_bool_like("router", value).map_err(|e| CliError::Core(e.into()))?,
        None => prompt_router()?,
    };

    let state_management = match &args.state_management {
        Some(value) => value
            .parse::<StateManagement>()
            .map_err(|e| CliError::Core(e.into()))?,
        None => prompt_state_management()?,
    };

    let data_fetching = match &args.data_fetching {
        Some(value) => value
            .parse::<DataFetching>()
            .map_err(|e| CliError::Core(e.into()))?,
        None => prompt_data_fetching()?,
    };

    let storybook = match &args.storybook {
        Some(value) => {
            parse_bool_like("storybook", value).map_err(|e| CliError::Core(e.into()))?
        }
        None => prompt_storybook()?,
    };

    OptionSet::new(
        name,
        ui_library,
        router,
        state_management,
        data_fetching,
        storybook,
    )
    .map_err(|e| CliError::Core(e.into()))
}

// ── Prompt shims ──────────────────────────────────────────────────────────────
// With the `interactive` feature off, a missing positional is a hard error;
// scripts must pass all six values.

#[cfg(feature = "interactive")]
fn prompt_name() -> CliResult<String> {
    crate::prompts::project_name()
}

#[cfg(feature = "interactive")]
fn prompt_ui_library() -> CliResult<UiLibrary> {
    crate::prompts::ui_library()
}

#[cfg(feature = "interactive")]
fn prompt_router() -> CliResult<bool> {
    crate::prompts::router()
}

#[cfg(feature = "interactive")]
fn prompt_state_management() -> CliResult<StateManagement> {
    crate::prompts::state_management()
}

#[cfg(feature = "interactive")]
fn prompt_data_fetching() -> CliResult<DataFetching> {
    crate::prompts::data_fetching()
}

#[cfg(feature = "interactive")]
fn prompt_storybook() -> CliResult<bool> {
    crate::prompts::storybook()
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    crate::prompts::confirm_generation()
}

#[cfg(not(feature = "interactive"))]
fn prompt_name() -> CliResult<String> {
    Err(no_prompts())
}

#[cfg(not(feature = "interactive"))]
fn prompt_ui_library() -> CliResult<UiLibrary> {
    Err(no_prompts())
}

#[cfg(not(feature = "interactive"))]
fn prompt_router() -> CliResult<bool> {
    Err(no_prompts())
}

#[cfg(not(feature = "interactive"))]
fn prompt_state_management() -> CliResult<StateManagement> {
    Err(no_prompts())
}

#[cfg(not(feature = "interactive"))]
fn prompt_data_fetching() -> CliResult<DataFetching> {
    Err(no_prompts())
}

#[cfg(not(feature = "interactive"))]
fn prompt_storybook() -> CliResult<bool> {
    Err(no_prompts())
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    Ok(true)
}

#[cfg(not(feature = "interactive"))]
fn no_prompts() -> CliError {
    CliError::FeatureNotAvailable {
        feature: "interactive",
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    options: &OptionSet,
    project_path: &PathBuf,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:          {}", options.name))?;
    out.print(&format!("  UI library:       {}", options.ui_library))?;
    out.print(&format!("  Router:           {}", yes_no(options.router)))?;
    out.print(&format!("  State management: {}", options.state_management))?;
    out.print(&format!("  Data fetching:    {}", options.data_fetching))?;
    out.print(&format!("  Storybook:        {}", yes_no(options.storybook)))?;
    out.print(&format!("  Location:         {}", project_path.display()))?;
    out.print("")?;
    Ok(())
}

/// Print the composition plan without resolving versions or touching disk.
fn show_plan(options: &OptionSet, project_path: &PathBuf, out: &OutputManager) -> CliResult<()> {
    let plan = CompositionPlan::for_options(options);

    out.info(&format!(
        "Dry run: would create '{}' at {}",
        options.name,
        project_path.display()
    ))?;

    out.print("")?;
    out.print("Template trees:")?;
    for step in &plan.steps {
        let mount = if step.mount.is_empty() {
            "."
        } else {
            step.mount
        };
        out.print(&format!("  {} -> {}", step.tree, mount))?;
    }

    out.print("")?;
    out.print("Packages (versions resolved at generation time):")?;
    for package in plan.all_packages() {
        out.print(&format!("  {package}"))?;
    }

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(argv: &[&str]) -> Cli {
        Cli::parse_from(argv)
    }

    #[test]
    fn full_positional_run_needs_no_prompts() {
        let args = cli(&["rkit", "demo", "mui", "yes", "redux", "react-query", "no"]);
        let options = collect_options(&args).unwrap();
        assert_eq!(options.name.as_str(), "demo");
        assert_eq!(options.ui_library, UiLibrary::Mui);
        assert!(options.router);
        assert_eq!(options.state_management, StateManagement::Redux);
        assert_eq!(options.data_fetching, DataFetching::ReactQuery);
        assert!(!options.storybook);
    }

    #[test]
    fn positional_aliases_are_accepted() {
        let args = cli(&[
            "rkit",
            "demo",
            "material-ui",
            "1",
            "none",
            "tanstack",
            "false",
        ]);
        let options = collect_options(&args).unwrap();
        assert_eq!(options.ui_library, UiLibrary::Mui);
        assert_eq!(options.data_fetching, DataFetching::ReactQuery);
    }

    #[test]
    fn invalid_enum_positional_fails_loudly() {
        let args = cli(&["rkit", "demo", "chakra", "yes", "none", "none", "no"]);
        assert!(matches!(
            collect_options(&args),
            Err(CliError::Core(_))
        ));
    }

    #[test]
    fn invalid_bool_positional_fails_loudly() {
        let args = cli(&["rkit", "demo", "none", "maybe", "none", "none", "no"]);
        assert!(collect_options(&args).is_err());
    }

    #[test]
    fn invalid_project_name_is_rejected() {
        let args = cli(&["rkit", ".hidden", "none", "no", "none", "none", "no"]);
        assert!(collect_options(&args).is_err());
    }
}
