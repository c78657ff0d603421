use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dataset::DatasetConfig;
use self::search::SearchConfig;
use self::study_list::StudyListConfig;

pub mod dataset;
pub mod search;
pub mod study_list;

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub study_list: StudyListConfig,
    pub search: SearchConfig,

    /// Fallback tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Build from environment variables, reading `.env` first if present
    pub fn new() -> Self {
        dotenvy::dotenv().ok();

        let log_level = env::var("VERBA_LOG").unwrap_or_else(|_| default_log_level());

        Config {
            dataset: DatasetConfig::new(),
            study_list: StudyListConfig::new(),
            search: SearchConfig::new(),

            log_level,
        }
    }

    /// Load a JSON profile; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            study_list: StudyListConfig::default(),
            search: SearchConfig::default(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
