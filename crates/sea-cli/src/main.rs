//! Sea region selector CLI
//!
//! Copies the world map bookmark block of a chosen sea region into the game's
//! `gamevariable.xml`.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use context::AppContext;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    // Completions need no home directory
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "sea", &mut std::io::stdout());
        return Ok(());
    }

    let mut ctx = AppContext::resolve(cli.home)?;
    execute_command(&mut ctx, cli.command)
}

/// Log to stderr when `--verbose` is given or `RUST_LOG` is set.
fn init_tracing(verbose: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("debug"),
        Err(_) => return Ok(()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))?;
    tracing::debug!("Verbose mode enabled");
    Ok(())
}

fn execute_command(ctx: &mut AppContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List { filter, json } => commands::run_list(ctx, filter.as_deref(), json),
        Commands::Folder { path } => commands::run_folder(ctx, path.as_deref()),
        Commands::Apply { name, dry_run } => commands::run_apply(ctx, &name, dry_run),
        Commands::Pick { filter, dry_run } => commands::run_pick(ctx, filter.as_deref(), dry_run),
        Commands::Restore => commands::run_restore(ctx),
        Commands::Status { json } => commands::run_status(ctx, json),
        Commands::Completions { .. } => Ok(()),
    }
}
