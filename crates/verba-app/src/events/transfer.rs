use std::path::{Path, PathBuf};

use kanal::AsyncSender;
use verba_core::Session;
use verba_types::AppEvent;

pub async fn handle_export(
    session: &Session,
    path: PathBuf,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let count = session.display_entries().len();
    let tsv = session.export_tsv();

    let event = match verba_io::files::write_export_file(&path, &tsv).await {
        Ok(()) => {
            tracing::info!("Exported {} entries to {}", count, path.display());
            AppEvent::Exported { path, count }
        }
        Err(e) => {
            tracing::error!("Export failed: {:#}", e);
            AppEvent::Error(format!("Failed to export list: {e:#}"))
        }
    };

    app_to_ui_tx.send(event).await?;
    Ok(())
}

pub async fn handle_copy(
    session: &Session,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let count = session.display_entries().len();
    let tsv = session.export_tsv();

    let result = tokio::task::spawn_blocking(move || verba_io::clipboard::copy_text(&tsv)).await?;

    let event = match result {
        Ok(()) => AppEvent::Copied { count },
        Err(e) => {
            tracing::error!("Clipboard copy failed: {}", e);
            AppEvent::Error(format!("Failed to copy list: {e}"))
        }
    };

    app_to_ui_tx.send(event).await?;
    Ok(())
}

/// Replace the study list from a TSV file, then show the new list
pub async fn handle_import(
    session: &mut Session,
    path: &Path,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let text = match verba_io::files::read_import_file(path).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Import failed: {:#}", e);
            app_to_ui_tx
                .send(AppEvent::Error(format!("{e:#}")))
                .await?;
            return Ok(());
        }
    };

    let accepted = session.import_text(&text);
    app_to_ui_tx
        .send(AppEvent::ImportComplete { accepted })
        .await?;

    let entries = session.display_entries().into_iter().cloned().collect();
    app_to_ui_tx.send(AppEvent::ShowStudyList(entries)).await?;

    Ok(())
}
