use serde::{Deserialize, Serialize};

use crate::log;
use super::{ContentProvider, FileContentProvider, Validate, YamlSerializer, YamlStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u32,
}

impl Validate for HighScoreRecord {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Durable storage for the best score across sessions.
pub trait HighScoreStore: Send {
    /// The stored high score, 0 when nothing usable is stored.
    fn high_score(&self) -> u32;

    fn set_high_score(&self, score: u32) -> Result<(), String>;
}

pub struct YamlHighScoreStore<TProvider: ContentProvider> {
    store: YamlStore<TProvider, HighScoreRecord>,
}

impl<TProvider: ContentProvider> YamlHighScoreStore<TProvider> {
    pub fn new(provider: TProvider) -> Self {
        Self {
            store: YamlStore::new(provider, YamlSerializer::new()),
        }
    }
}

impl YamlHighScoreStore<FileContentProvider> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentProvider::new(file_path))
    }
}

impl<TProvider: ContentProvider + Send> HighScoreStore for YamlHighScoreStore<TProvider> {
    fn high_score(&self) -> u32 {
        match self.store.load() {
            Ok(record) => record.high_score,
            Err(e) => {
                log!("Failed to load high score, starting from 0: {}", e);
                0
            }
        }
    }

    fn set_high_score(&self, score: u32) -> Result<(), String> {
        self.store.save(&HighScoreRecord { high_score: score })
    }
}
