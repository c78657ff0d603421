use std::path::PathBuf;

/// One row of the vocabulary dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub headword: String,
    pub definition: String,
    pub frequency: u32,
    pub part_of_speech: String,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Front end -> event loop
    Command(Command),
    /// Either direction: stop after draining
    Shutdown,

    ShowSuggestions(Vec<SuggestionView>),
    HideSuggestions,
    ShowDetails(WordDetailsView),
    WordNotFound(String),
    ShowStudyList(Vec<VocabularyEntry>),
    ShowWordWheel(Vec<WheelItem>),
    StudyListChanged {
        headword: String,
        in_study_list: bool,
    },
    Exported {
        path: PathBuf,
        count: usize,
    },
    Copied {
        count: usize,
    },
    ImportComplete {
        accepted: usize,
    },
    Status(String),
    Error(String),
}

/// User intents understood by the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search { query: String, limit: Option<usize> },
    Show(String),
    Add(String),
    Remove(String),
    Toggle(String),
    List,
    Wheel,
    Export { path: Option<PathBuf> },
    Copy,
    /// Replaces the whole study list. Confirmation happens before this is sent.
    Import { path: PathBuf },
    Help,
}

/// A headword split into highlighted and plain runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionView {
    pub headword: String,
    pub primary: bool,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDetailsView {
    pub entry: VocabularyEntry,
    pub in_study_list: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelItem {
    pub headword: String,
    pub in_study_list: bool,
}
