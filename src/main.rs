//! instill - skill installer for AI coding agents
//!
//! Command line entry point: parses arguments, sets up logging and dispatches
//! to the command implementations.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use instill::cli::{Cli, Commands};
use instill::commands::{self, Context, helpers};
use instill::error::Result;
use instill::paths::Environment;

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let project_dir = helpers::resolve_project_path(cli.project)?;
    let ctx = Context::new(project_dir, cli.json, Environment::from_process());

    match cli.command {
        Commands::Install(args) => commands::install::run(&ctx, args),
        Commands::Remove(args) => commands::remove::run(&ctx, args),
        Commands::Show(args) => commands::show::run(&ctx, args),
        Commands::Detect(args) => commands::detect::run(&ctx, args),
        Commands::Agents => commands::agents::run(&ctx),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
