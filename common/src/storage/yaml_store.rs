use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use super::{
    ContentProvider, FileContentProvider, StoreSerializer, Validate, YamlSerializer,
};

/// A typed value persisted through a `ContentProvider`, validated on the way
/// in and out and cached after the first successful load.
pub struct YamlStore<TProvider, T, TSerializer = YamlSerializer>
where
    TProvider: ContentProvider,
    T: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: StoreSerializer<T>,
{
    serializer: TSerializer,
    provider: TProvider,
    cached: Arc<Mutex<Option<T>>>,
}

impl<T> YamlStore<FileContentProvider, T, YamlSerializer>
where
    T: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentProvider::new(file_path), YamlSerializer::new())
    }
}

impl<TProvider, T, TSerializer> YamlStore<TProvider, T, TSerializer>
where
    TProvider: ContentProvider,
    T: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: StoreSerializer<T>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            serializer,
            provider,
            cached: Arc::new(Mutex::new(None)),
        }
    }

    /// The stored value, or `T::default()` when nothing is stored yet.
    pub fn load(&self) -> Result<T, String> {
        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Store cache lock poisoned".to_string())?;

        if let Some(value) = cached.as_ref() {
            return Ok(value.clone());
        }

        let Some(content) = self.provider.get_content()? else {
            return Ok(T::default());
        };

        let value = self.serializer.deserialize(&content)?;
        value
            .validate()
            .map_err(|e| format!("Validation error: {}", e))?;

        *cached = Some(value.clone());
        Ok(value)
    }

    pub fn save(&self, value: &T) -> Result<(), String> {
        value
            .validate()
            .map_err(|e| format!("Validation error: {}", e))?;

        let content = self.serializer.serialize(value)?;
        self.provider.set_content(&content)?;

        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Store cache lock poisoned".to_string())?;
        *cached = Some(value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryContentProvider;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        lives: u32,
    }

    impl Validate for Sample {
        fn validate(&self) -> Result<(), String> {
            if self.lives > 9 {
                return Err("too many lives".to_string());
            }
            Ok(())
        }
    }

    fn temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_arcade_snake_store_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_missing_content_loads_default() {
        let store: YamlStore<_, Sample> = YamlStore::new(MemoryContentProvider::new(), YamlSerializer::new());
        assert_eq!(store.load().unwrap(), Sample::default());
    }

    #[test]
    fn test_save_then_load_from_file() {
        let file_path = temp_file_path();
        let store: YamlStore<_, Sample> = YamlStore::from_yaml_file(&file_path);
        store.save(&Sample { lives: 3 }).unwrap();

        let reopened: YamlStore<_, Sample> = YamlStore::from_yaml_file(&file_path);
        assert_eq!(reopened.load().unwrap(), Sample { lives: 3 });
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_value_is_not_saved() {
        let provider = MemoryContentProvider::new();
        let store: YamlStore<_, Sample> = YamlStore::new(provider.clone(), YamlSerializer::new());
        assert!(store.save(&Sample { lives: 10 }).is_err());
        assert_eq!(provider.get_content().unwrap(), None);
    }

    #[test]
    fn test_invalid_content_cant_be_loaded() {
        let store: YamlStore<_, Sample> =
            YamlStore::new(MemoryContentProvider::with_content("lives: 12\n"), YamlSerializer::new());
        assert!(store.load().is_err());

        let garbage: YamlStore<_, Sample> =
            YamlStore::new(MemoryContentProvider::with_content("lives: [nope"), YamlSerializer::new());
        assert!(garbage.load().is_err());
    }

    #[test]
    fn test_load_is_cached() {
        let provider = MemoryContentProvider::with_content("lives: 2\n");
        let store: YamlStore<_, Sample> = YamlStore::new(provider.clone(), YamlSerializer::new());
        assert_eq!(store.load().unwrap().lives, 2);

        provider.set_content("lives: 5\n").unwrap();
        assert_eq!(store.load().unwrap().lives, 2);
    }
}
