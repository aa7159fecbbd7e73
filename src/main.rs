//! Obscura Studio - terminal showcase for a photography studio
//!
//! A single-page studio site rendered in the terminal: hero, about,
//! gallery, a self-driving services carousel with deep-linkable detail
//! views, and a contact form.

// Module declarations
mod cli;
mod config;
mod constants;
mod content;
mod models;
mod services;
mod tui;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use config::{Config, ThemeMode};

/// Obscura Studio - terminal showcase for a photography studio
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Route to open at startup (e.g. "/services/portrait")
    #[arg(value_name = "ROUTE")]
    route: Option<String>,

    /// Theme override for this run
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Inspect the service catalog without launching the TUI
    Services(cli::ServicesArgs),
}

/// Theme choices exposed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    /// Follow the OS preference
    Auto,
    /// Always dark
    Dark,
    /// Always light
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Auto => Self::Auto,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Light => Self::Light,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Headless subcommands never touch the terminal state
    if let Some(Command::Services(args)) = &cli.command {
        return cli::services::run(args);
    }

    // Load or fall back to default config
    let config = Config::load().unwrap_or_else(|_| Config::default());

    let route = cli.route.as_deref().unwrap_or("/");
    let mut state = tui::AppState::new(config, route)?;
    if let Some(theme) = cli.theme {
        state.theme_mode = theme.into();
    }

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut state, &mut terminal);

    // Restore terminal before surfacing any loop error
    tui::restore_terminal(terminal)?;
    result
}
