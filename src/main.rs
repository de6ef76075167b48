mod cli;
mod commands;
mod error;
mod key;

use clap::Parser;
use cli::Command;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _ = dotenvy::dotenv(); // load .env if present

    let app_id = match key::resolve_app_id(cli.app_id.clone()) {
        Ok(k) => k,
        Err(e) => {
            error!(error = %e, "could not obtain an api key");
            std::process::exit(1);
        }
    };

    let command = cli.command.unwrap_or(Command::Demo);
    let config = cli.client_config(app_id);
    info!(?command, base_url = %config.base_url, "dummyapi-collector starting");

    let mut stdout = std::io::stdout();
    match commands::run(command, config, &mut stdout).await {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!(error = %e, "fatal error");
            std::process::exit(1);
        }
    }
}
