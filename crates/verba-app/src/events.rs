use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use verba_core::Session;
use verba_types::{AppEvent, Command};

use crate::state::AppState;

pub mod details;
pub mod search;
pub mod study_list;
pub mod transfer;

use details::handle_show;
use search::handle_search;
use study_list::{handle_add, handle_list, handle_remove, handle_toggle, handle_wheel};
use transfer::{handle_copy, handle_export, handle_import};

/// App's main loop. Sole owner of the session.
pub async fn event_loop(
    state: Arc<AppState>,
    mut session: Session,
    startup_error: Option<String>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if let Some(message) = startup_error {
        app_to_ui_tx.send(AppEvent::Error(message)).await?;
    }

    tracing::debug!("[EVENT_LOOP] Waiting for events");
    loop {
        let event = match ui_to_app_rx.recv().await {
            Ok(event) => event,
            Err(_) => {
                tracing::debug!("[EVENT_LOOP] Input channel closed");
                break;
            }
        };

        match event {
            AppEvent::Command(command) => {
                handle_command(&state, &mut session, command, &app_to_ui_tx).await?;
            }
            AppEvent::Shutdown => {
                app_to_ui_tx.send(AppEvent::Shutdown).await?;
                break;
            }
            other => {
                tracing::debug!("Ignoring UI-only event: {:?}", std::mem::discriminant(&other));
            }
        }
    }

    Ok(())
}

async fn handle_command(
    state: &AppState,
    session: &mut Session,
    command: Command,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!("Handling command: {:?}", command);
    match command {
        Command::Search { query, limit } => {
            handle_search(session, &query, limit, app_to_ui_tx).await?;
        }
        Command::Show(headword) => {
            handle_show(session, &headword, app_to_ui_tx).await?;
        }
        Command::Add(headword) => {
            handle_add(session, &headword, app_to_ui_tx).await?;
        }
        Command::Remove(headword) => {
            handle_remove(session, &headword, app_to_ui_tx).await?;
        }
        Command::Toggle(headword) => {
            handle_toggle(session, &headword, app_to_ui_tx).await?;
        }
        Command::List => {
            handle_list(session, app_to_ui_tx).await?;
        }
        Command::Wheel => {
            handle_wheel(session, app_to_ui_tx).await?;
        }
        Command::Export { path } => {
            let path = path.unwrap_or_else(|| state.config.study_list.export_file_name.clone().into());
            handle_export(session, path, app_to_ui_tx).await?;
        }
        Command::Copy => {
            handle_copy(session, app_to_ui_tx).await?;
        }
        Command::Import { path } => {
            handle_import(session, &path, app_to_ui_tx).await?;
        }
        Command::Help => {
            app_to_ui_tx
                .send(AppEvent::Status(crate::io::SHELL_HELP.to_string()))
                .await?;
        }
    }

    Ok(())
}
