pub mod clipboard;
pub mod dataset;
pub mod files;
pub mod state_file;

pub use dataset::{DatasetSource, fetch_dataset, load_store};
pub use state_file::FileStatePersistence;
