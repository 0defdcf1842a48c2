use mealplan::cli::Cli;
use mealplan::commands;
use mealplan::error::MealplanError;
use mealplan::logger::initialize as LoggerInitialize;

use api_client::{CancellationToken, ClientConfig};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Client failures are already in the log; this is for the user
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, MealplanError> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => ClientConfig::default_dir()?,
    };
    let log_dir = cli.log_dir.clone().unwrap_or_else(|| config_dir.clone());

    create_dir_all(&log_dir).map_err(|e| MealplanError::Mealplan {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Logger first so config problems are recorded
    LoggerInitialize(&log_dir, cli.verbose)?;

    info!("Config directory: {}", config_dir.display());
    info!("Log directory: {}", log_dir.display());

    let config = ClientConfig::load(&config_dir)?;
    let client = config.build_client()?;

    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted; cancelling in-flight request");
            interrupt.cancel();
        }
    });

    commands::run(&cli.command, &client, &cancel).await
}
