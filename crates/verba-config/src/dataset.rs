use std::env;

use serde::{Deserialize, Serialize};

fn default_source() -> String {
    "vocabulary.csv".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DatasetConfig {
    /// Local path or http(s) URL of the CSV dataset
    #[serde(default = "default_source")]
    pub source: String,
}

impl DatasetConfig {
    pub fn new() -> Self {
        let source = env::var("VERBA_DATASET").unwrap_or_else(|_| default_source());

        Self { source }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}
