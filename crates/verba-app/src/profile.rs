use std::env;
use std::path::PathBuf;

use anyhow::Context;
use verba_config::Config;

use crate::cli::Cli;

/// Resolve the active config: `--config`, then `VERBA_CONFIG`, then the
/// environment. Command-line paths override whatever was loaded.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let profile = cli
        .config
        .clone()
        .or_else(|| env::var("VERBA_CONFIG").ok().map(PathBuf::from));

    let mut config = match profile {
        Some(path) => Config::from_file(&path)
            .with_context(|| format!("failed to load profile {}", path.display()))?,
        None => Config::new(),
    };

    if let Some(dataset) = &cli.dataset {
        config.dataset.source = dataset.clone();
    }
    if let Some(state) = &cli.state {
        config.study_list.state_path = state.clone();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_profile_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(
            &path,
            r#"{ "dataset": { "source": "profile.csv" }, "search": { "max_suggestions": 4 } }"#,
        )
        .unwrap();

        let cli = Cli::parse_from([
            "verba".to_string(),
            "--config".to_string(),
            path.display().to_string(),
            "--state".to_string(),
            "mine.json".to_string(),
            "list".to_string(),
        ]);
        let config = load_config(&cli).unwrap();

        assert_eq!(config.dataset.source, "profile.csv");
        assert_eq!(config.search.max_suggestions, 4);
        assert_eq!(config.study_list.state_path, PathBuf::from("mine.json"));
    }

    #[test]
    fn test_missing_profile() {
        let cli = Cli::parse_from(["verba", "--config", "/nonexistent/verba.json", "list"]);
        assert!(load_config(&cli).is_err());
    }
}
