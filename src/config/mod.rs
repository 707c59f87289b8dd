use crate::core::session::{DEFAULT_FILE_PREFIX, SessionOptions};
use crate::errors::{AppError, AppResult};
use crate::models::raw_row::WhitespaceMode;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys written by `init`; used by `config --check`.
pub const KNOWN_KEYS: [&str; 6] = [
    "output_dir",
    "file_prefix",
    "whitespace",
    "caption_width",
    "separator_char",
    "color",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    #[serde(default)]
    pub whitespace: WhitespaceMode,
    #[serde(default = "default_caption_width")]
    pub caption_width: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_output_dir() -> String {
    ".".to_string()
}
fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}
fn default_caption_width() -> usize {
    40
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_prefix: default_file_prefix(),
            whitespace: WhitespaceMode::default(),
            caption_width: default_caption_width(),
            separator_char: default_separator_char(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.telopcsv`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".telopcsv")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("telopcsv.conf")
    }

    /// `--config` override, or the default location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom.map(expand_tilde).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.caption_width == 0 {
            return Err(AppError::Config("caption_width must be at least 1".into()));
        }
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character, got '{}'",
                self.separator_char
            )));
        }
        Ok(())
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Keys from `KNOWN_KEYS` absent from the file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)?;

        let missing = match value.as_mapping() {
            Some(map) => KNOWN_KEYS
                .iter()
                .copied()
                .filter(|k| !map.contains_key(*k))
                .collect(),
            None => KNOWN_KEYS.to_vec(),
        };

        Ok(missing)
    }

    pub fn output_dir(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            whitespace: self.whitespace,
            file_prefix: self.file_prefix.clone(),
        }
    }
}
