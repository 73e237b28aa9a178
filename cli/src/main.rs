use std::process::ExitCode;

use clap::Parser;
mod commands;
mod logging;
use commands::cli;
use recurse_core::api as core_api;
use recurse_core::config;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", anyhow::Error::new(e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: cli::Args) -> Result<(), core_api::CliError> {
    let cfg = config::load(args.config.as_deref())?;
    let _guard = logging::init(&cfg.logging, args.verbose)?;
    tracing::debug!(?cfg, "config loaded");

    let outcome = commands::menu::handle_menu(&args, &cfg)?;
    tracing::info!(%outcome, "done");
    Ok(())
}
