mod content_provider;
mod high_score;
mod serializer;
mod validate;
mod yaml_store;

pub use content_provider::{ContentProvider, FileContentProvider, MemoryContentProvider};
pub use high_score::{HighScoreRecord, HighScoreStore, YamlHighScoreStore};
pub use serializer::{StoreSerializer, YamlSerializer};
pub use validate::Validate;
pub use yaml_store::YamlStore;
