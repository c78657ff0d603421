pub mod codec;
pub mod collation;
pub mod error;
pub mod normalize;
pub mod persistence;
pub mod search;
pub mod session;
pub mod store;
pub mod study_list;

pub use error::{LoadError, PersistError, StateError};
pub use normalize::normalize;
pub use persistence::{MemoryPersistence, StatePersistence};
pub use search::{HighlightSpan, Suggestion};
pub use session::{Session, WordDetails};
pub use store::{HeadwordSet, VocabularyStore};
pub use study_list::StudyList;
