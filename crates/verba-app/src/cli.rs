use std::path::PathBuf;

use clap::{Parser, Subcommand};
use verba_types::Command;

#[derive(Parser, Debug)]
#[command(name = "verba", version, about = "Vocabulary lookup and study list")]
pub struct Cli {
    /// JSON profile to load instead of environment variables
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset path or http(s) URL
    #[arg(long, global = true)]
    pub dataset: Option<String>,

    /// Study list state file
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Autocomplete suggestions for a query
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a word's details
    Show {
        #[arg(required = true, num_args = 1..)]
        headword: Vec<String>,
    },
    /// Add a word to the study list
    Add {
        #[arg(required = true, num_args = 1..)]
        headword: Vec<String>,
    },
    /// Remove a word from the study list
    Remove {
        #[arg(required = true, num_args = 1..)]
        headword: Vec<String>,
    },
    /// Add the word if absent, remove it otherwise
    Toggle {
        #[arg(required = true, num_args = 1..)]
        headword: Vec<String>,
    },
    /// Print the study list
    List,
    /// Print every headword, marking study list members
    Wheel,
    /// Write the study list as TSV
    Export {
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Copy the study list TSV to the clipboard
    Copy,
    /// Replace the study list with the words in a TSV file
    Import {
        path: PathBuf,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Interactive lookup shell
    Shell,
}

impl CliCommand {
    /// Event-loop command for one-shot invocations. `None` for `shell`.
    pub fn to_command(&self) -> Option<Command> {
        let command = match self {
            CliCommand::Search { query, limit } => Command::Search {
                query: query.join(" "),
                limit: *limit,
            },
            CliCommand::Show { headword } => Command::Show(headword.join(" ")),
            CliCommand::Add { headword } => Command::Add(headword.join(" ")),
            CliCommand::Remove { headword } => Command::Remove(headword.join(" ")),
            CliCommand::Toggle { headword } => Command::Toggle(headword.join(" ")),
            CliCommand::List => Command::List,
            CliCommand::Wheel => Command::Wheel,
            CliCommand::Export { out } => Command::Export { path: out.clone() },
            CliCommand::Copy => Command::Copy,
            CliCommand::Import { path, .. } => Command::Import { path: path.clone() },
            CliCommand::Shell => return None,
        };
        Some(command)
    }
}
