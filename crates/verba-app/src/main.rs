use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod cli;
mod controller;
mod events;
mod io;
mod profile;
mod state;
mod ui;


use self::cli::{Cli, CliCommand};
use self::controller::AppController;
use self::io::InputSource;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = profile::load_config(&cli)?;

    init_tracing(&config.log_level, cli.log_json);
    tracing::debug!("Config: {:?}", config);

    let input = match &cli.command {
        Some(CliCommand::Import { yes: false, .. }) => {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            if !io::confirm_replace(&mut lines).await? {
                println!("Import cancelled.");
                return Ok(());
            }
            cli.command.as_ref().and_then(CliCommand::to_command)
        }
        Some(command) => command.to_command(),
        None => None,
    };
    let input = match input {
        Some(command) => InputSource::Script(vec![command]),
        None => {
            println!("verba shell. Type a word to search, :help for commands.");
            InputSource::Interactive
        }
    };

    let state = Arc::new(AppState::new(config));
    let (session, startup_error) = state.open_session().await;

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(session, startup_error, input);

    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::error!("Task failed: {:#}", e);
                controller.shutdown();
            }
            Err(e) => {
                tracing::error!("Task panicked: {}", e);
                controller.shutdown();
            }
        }
    }

    Ok(())
}

fn init_tracing(fallback: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("Logging already initialized: {e}");
    }
}
