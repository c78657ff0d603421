use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_state_path() -> PathBuf {
    PathBuf::from("study_list.json")
}

fn default_export_file_name() -> String {
    "latin_study_list.tsv".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StudyListConfig {
    /// Where the study list is persisted after every change
    #[serde(default = "default_state_path")]
    pub state_path: PathBuf,
    /// File name used by `export` when no path is given
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

impl StudyListConfig {
    pub fn new() -> Self {
        let state_path = env::var("VERBA_STATE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_state_path());

        let export_file_name =
            env::var("VERBA_EXPORT_FILE").unwrap_or_else(|_| default_export_file_name());

        Self {
            state_path,
            export_file_name,
        }
    }
}

impl Default for StudyListConfig {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
            export_file_name: default_export_file_name(),
        }
    }
}
