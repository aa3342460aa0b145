//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.
//!
//! rkit is a single-command tool: every generation option can be supplied
//! positionally, and any omitted option is collected interactively. The
//! positional order matches the interactive prompt order, so a partial
//! argument list is always a prefix of a full one.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "rkit",
    bin_name = "rkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant React project generation",
    long_about = "rkit generates a TypeScript React application with your \
                  choice of UI library, routing, state management, data \
                  fetching, and Storybook — all wired together.",
    after_help = "EXAMPLES:\n\
        \x20 rkit                                        # fully interactive\n\
        \x20 rkit my-app                                 # prompt for the rest\n\
        \x20 rkit my-app mui yes redux react-query no    # no prompts\n\
        \x20 rkit my-app none no none none no --dry-run  # preview only\n\
        \x20 rkit --completions bash > /usr/share/bash-completion/completions/rkit"
)]
pub struct Cli {
    /// Flags available everywhere.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Project name.  A plain name creates `./name` (see `--output`).
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// UI component library.
    #[arg(value_name = "UI_LIBRARY", help = "UI library: mui, antd, none")]
    pub ui_library: Option<String>,

    /// Whether to wire up react-router.
    #[arg(value_name = "ROUTER", help = "Include routing: yes/no")]
    pub router: Option<String>,

    /// State-management library.
    #[arg(
        value_name = "STATE_MANAGEMENT",
        help = "State management: redux, jotai, none"
    )]
    pub state_management: Option<String>,

    /// Data-fetching library.
    #[arg(
        value_name = "DATA_FETCHING",
        help = "Data fetching: react-query, swr, none"
    )]
    pub data_fetching: Option<String>,

    /// Whether to include Storybook.
    #[arg(value_name = "STORYBOOK", help = "Include Storybook: yes/no")]
    pub storybook: Option<String>,

    /// Parent directory for the generated project.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Parent directory for the project"
    )]
    pub output: PathBuf,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Generate shell completions and exit.
    #[arg(
        long = "completions",
        value_name = "SHELL",
        value_enum,
        conflicts_with = "name",
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
            Shell::Elvish => Self::Elvish,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
