use std::env;

use serde::{Deserialize, Serialize};

fn default_max_suggestions() -> usize {
    10
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Hard cap on autocomplete suggestions
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

impl SearchConfig {
    pub fn new() -> Self {
        let max_suggestions = env::var("VERBA_MAX_SUGGESTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_suggestions);

        Self { max_suggestions }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
        }
    }
}
