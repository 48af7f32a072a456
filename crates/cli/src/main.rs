//! lorebrief CLI, the main entry point.
//!
//! Commands:
//! - `build`   — Print the briefing report (default)
//! - `sources` — List the files a build would read
//! - `config`  — Show, locate or generate configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

#[derive(Parser)]
#[command(
    name = "lorebrief",
    about = "lorebrief: assemble a text adventure's sources into a single LLM briefing",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ./lorebrief.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the report and print it to stdout
    Build,

    /// List the interface, inventory and world files a build would read
    Sources {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location that would be used
    Path,
    /// Print a default lorebrief.toml
    Init,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only command output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = cli.config.as_deref();
    let result = match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => commands::build::run(config),
        Commands::Sources { json } => commands::sources::run(config, json),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show(config),
            ConfigAction::Path => commands::config_cmd::path(config),
            ConfigAction::Init => commands::config_cmd::init(),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
