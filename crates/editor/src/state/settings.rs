//! Editor settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::factory::DUPLICATE_OFFSET;
use super::history::DEFAULT_HISTORY_LIMIT;

/// Placeholder name for a project that was never saved
pub const DEFAULT_PROJECT_NAME: &str = "Untitled Project";

/// Where projects are saved and loaded from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreSettings {
    /// Process-local store, lost on exit
    #[default]
    Memory,
    /// JSON files in a directory (data dir when `dir` is unset)
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dir: Option<PathBuf>,
    },
    /// Project REST service
    Http { base_url: String },
}

/// All editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Name given to new projects
    pub default_project_name: String,
    /// Maximum number of undo snapshots
    pub history_limit: usize,
    /// X/Z offset of duplicated parts
    pub duplicate_offset: f64,
    /// Project store backend
    pub store: StoreSettings,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_project_name: DEFAULT_PROJECT_NAME.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            duplicate_offset: DUPLICATE_OFFSET,
            store: StoreSettings::Memory,
        }
    }
}

impl EditorSettings {
    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("com", "partforge", "partforge")
    }

    /// Settings file in the user config dir
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Default directory for file-backed projects
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("projects"))
    }

    /// Load settings from the config dir, or return defaults if not found
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from a file; unreadable or invalid files give defaults
    pub fn load_from(path: &Path) -> Self {
        let Ok(json) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring invalid settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to the config dir
    pub fn save(&self) -> std::io::Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = EditorSettings::default();
        assert_eq!(s.default_project_name, "Untitled Project");
        assert_eq!(s.history_limit, 100);
        assert_eq!(s.duplicate_offset, 0.5);
        assert_eq!(s.store, StoreSettings::Memory);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let s: EditorSettings =
            serde_json::from_str(r#"{"store": {"kind": "http", "base_url": "http://localhost:3001"}}"#)
                .unwrap();
        assert_eq!(s.history_limit, 100);
        assert_eq!(
            s.store,
            StoreSettings::Http {
                base_url: "http://localhost:3001".to_string()
            }
        );
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = EditorSettings {
            history_limit: 10,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(EditorSettings::load_from(&path), settings);
    }

    #[test]
    fn test_missing_or_invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert_eq!(EditorSettings::load_from(&path), EditorSettings::default());
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(EditorSettings::load_from(&path), EditorSettings::default());
    }
}
