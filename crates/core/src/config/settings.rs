use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name used under the user's config home
const CONFIG_DIR: &str = "runc";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Settings {
    /// Environment variable naming the editor executable
    pub editor_var: String,

    /// Where scratch sources and compiled binaries are placed.
    /// Falls back to the system temp directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<PathBuf>,

    /// Base name of the scratch source; the language extension is appended
    pub scratch_name: String,

    /// File name of the binary produced by compiled languages
    pub binary_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor_var: "EDITOR".to_string(),
            temp_dir: None,
            scratch_name: "runc_runner".to_string(),
            binary_name: "a.out".to_string(),
        }
    }
}

impl Settings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load the user's config file if one exists, otherwise defaults
    pub fn discover() -> Result<Self> {
        match Self::find_config_file(|key| std::env::var(key).ok()) {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                Self::load_from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// `$XDG_CONFIG_HOME/runc/config.json`, then `$HOME/.config/runc/config.json`
    pub fn find_config_file(env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
        let config_home = match env("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(env("HOME")?).join(".config"),
        };

        let path = config_home.join(CONFIG_DIR).join(CONFIG_FILE);
        path.is_file().then_some(path)
    }

    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    pub fn binary_path(&self) -> PathBuf {
        self.temp_dir().join(&self.binary_name)
    }

    pub fn validate(&self) -> Result<()> {
        if self.editor_var.is_empty() {
            return Err(Error::ConfigError("editor_var must not be empty".to_string()));
        }
        for (field, value) in [
            ("scratch_name", &self.scratch_name),
            ("binary_name", &self.binary_name),
        ] {
            if value.is_empty() || value.contains(std::path::MAIN_SEPARATOR) {
                return Err(Error::ConfigError(format!(
                    "{field} must be a plain file name, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}
