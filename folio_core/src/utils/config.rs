//! Persisted user preferences.
//!
//! One key today: the theme. Stored as JSON under the platform config
//! directory. Absence of a stored theme means dark; only the literal
//! value `"light"` switches the startup theme, although the toggle
//! writes `"dark"` explicitly as well.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::FolioError;
use super::logger;

const APP_DIR: &str = "folio";
const PREFS_FILE: &str = "preferences.json";

const THEME_LIGHT: &str = "light";
const THEME_DARK: &str = "dark";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Preferences {
    /// Path of the preference file under the platform config directory.
    pub fn config_path() -> Result<PathBuf, FolioError> {
        let base = dirs::config_dir()
            .ok_or_else(|| FolioError::Config("no config directory on this platform".into()))?;
        Ok(base.join(APP_DIR).join(PREFS_FILE))
    }

    /// Strict load: a missing file is the first-run default, a corrupt
    /// file is an error.
    pub fn load() -> Result<Self, FolioError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, FolioError> {
        if !path.exists() {
            // First run: nothing persisted yet.
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load that never fails: problems are logged and defaults win.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(prefs) => prefs,
            Err(err) => {
                logger::warn(&format!("failed to load preferences: {err}"));
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), FolioError> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), FolioError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// True only for the exact persisted value `"light"`.
    pub fn is_light(&self) -> bool {
        self.theme.as_deref() == Some(THEME_LIGHT)
    }

    /// Records the theme chosen by a toggle click.
    pub fn set_theme(&mut self, light: bool) {
        self.theme = Some(if light { THEME_LIGHT } else { THEME_DARK }.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_defaults_to_dark() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("preferences.json");
        let prefs = Preferences::load_from(&path).expect("load");
        assert_eq!(prefs.theme, None);
        assert!(!prefs.is_light());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("preferences.json");

        let mut prefs = Preferences::default();
        prefs.set_theme(true);
        prefs.save_to(&path).expect("save");

        let loaded = Preferences::load_from(&path).expect("load");
        assert!(loaded.is_light());
        assert_eq!(loaded.theme.as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_round_trip_restores_dark() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("preferences.json");

        let mut prefs = Preferences::default();
        prefs.set_theme(true);
        prefs.save_to(&path).expect("save");
        prefs.set_theme(false);
        prefs.save_to(&path).expect("save");

        let loaded = Preferences::load_from(&path).expect("load");
        assert!(!loaded.is_light());
        // The toggle writes "dark" explicitly even though load only
        // distinguishes "light" from everything else.
        assert_eq!(loaded.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{not json").expect("write");

        let result = Preferences::load_from(&path);
        assert!(matches!(result, Err(FolioError::Json(_))));
    }

    #[test]
    fn test_unknown_theme_value_renders_dark() {
        let prefs = Preferences {
            theme: Some("solarized".to_string()),
        };
        assert!(!prefs.is_light());
    }
}
