use common::storage::{FileContentProvider, Validate, YamlStore};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{DisplayConfig, SpeedConfig};

const CONFIG_FILE_NAME: &str = "arcade_snake_config.yaml";
const HIGH_SCORE_FILE_NAME: &str = "arcade_snake_high_score.yaml";

pub type ConfigStore = YamlStore<FileContentProvider, Config>;

fn path_next_to_exe(file_name: &str) -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name).to_string_lossy().into_owned();
    }
    file_name.to_string()
}

/// The config file at `path`, or the one next to the executable.
pub fn get_config_store(path: Option<&str>) -> ConfigStore {
    match path {
        Some(path) => ConfigStore::from_yaml_file(path),
        None => ConfigStore::from_yaml_file(&path_next_to_exe(CONFIG_FILE_NAME)),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub speed: SpeedConfig,
    pub display: DisplayConfig,
    pub high_score_file: String,
}

impl Config {
    /// Relative high score paths are resolved against the executable directory.
    pub fn high_score_path(&self) -> String {
        if Path::new(&self.high_score_file).is_absolute() {
            self.high_score_file.clone()
        } else {
            path_next_to_exe(&self.high_score_file)
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.speed.validate()?;
        self.display.validate()?;
        if self.high_score_file.is_empty() {
            return Err("high score file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: SpeedConfig::default(),
            display: DisplayConfig::default(),
            high_score_file: HIGH_SCORE_FILE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::storage::{MemoryContentProvider, StoreSerializer, YamlSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_arcade_snake_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_default_config_can_be_saved_and_loaded_file() {
        let file_path = get_temp_file_path();
        let store = get_config_store(Some(&file_path));
        store.save(&Config::default()).unwrap();

        let reopened = get_config_store(Some(&file_path));
        assert_eq!(reopened.load().unwrap(), Config::default());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let store = get_config_store(Some(&get_temp_file_path()));
        assert_eq!(store.load().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_speed_section_is_rejected() {
        let content = "speed:\n  normal_tick_ms: 150\ndisplay:\n  cell_size: 10.0\n  grid_opacity: 0.2\n  show_grid: true\nhigh_score_file: hs.yaml\n";
        let store: YamlStore<_, Config> =
            YamlStore::new(MemoryContentProvider::with_content(content), YamlSerializer::new());
        assert!(store.load().is_err());
    }

    #[test]
    fn test_invalid_display_is_rejected() {
        let config = Config {
            display: DisplayConfig {
                grid_opacity: 1.5,
                ..DisplayConfig::default()
            },
            ..Config::default()
        };
        let store: YamlStore<_, Config> = YamlStore::new(MemoryContentProvider::new(), YamlSerializer::new());
        assert!(store.save(&config).is_err());
    }

    #[test]
    fn test_empty_high_score_file_is_rejected() {
        let config = Config {
            high_score_file: String::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_absolute_high_score_path_kept() {
        let absolute = std::env::temp_dir().join("hs.yaml").to_string_lossy().into_owned();
        let config = Config {
            high_score_file: absolute.clone(),
            ..Config::default()
        };
        assert_eq!(config.high_score_path(), absolute);
        assert!(Config::default().high_score_path().ends_with(HIGH_SCORE_FILE_NAME));
    }
}
