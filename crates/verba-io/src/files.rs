use std::path::Path;

use anyhow::Context;

/// Read a user-supplied import file in one shot
pub async fn read_import_file(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read import file {}", path.display()))
}

/// Write the TSV export, replacing any existing file
pub async fn write_export_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("failed to write export file {}", path.display()))
}
