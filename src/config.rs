//! Configuration: loads optional ~/.fremorizer/config.yaml plus environment overrides.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming the log file. Empty disables logging.
pub const LOG_ENV: &str = "FREMORIZER_LOG";

/// Settings for the fretboard host.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FremorizerConfig {
    /// Open notes, lowest string first.
    #[serde(default = "FremorizerConfig::default_tuning")]
    pub tuning: Vec<String>,
    /// Number of frets to draw.
    #[serde(default = "FremorizerConfig::default_frets")]
    pub frets: u32,
    /// Log destination. None = logging disabled.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl FremorizerConfig {
    fn default_tuning() -> Vec<String> {
        ["E", "A", "D", "G", "B", "E"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn default_frets() -> u32 {
        24
    }

    /// Standard config file path (~/.fremorizer/config.yaml).
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".fremorizer").join("config.yaml"))
    }

    /// Load from the standard path and apply environment overrides.
    /// A missing file yields defaults.
    pub fn load() -> Result<Self, io::Error> {
        let mut config = match Self::default_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_env(std::env::var(LOG_ENV).ok());
        Ok(config)
    }

    /// Load a file the user named explicitly, then apply environment
    /// overrides. Unlike [`FremorizerConfig::load`], the file must exist.
    pub fn load_required(path: &Path) -> Result<Self, io::Error> {
        if !path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            ));
        }
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        config.apply_env(std::env::var(LOG_ENV).ok());
        Ok(config)
    }

    /// Load from a specific file. A missing file yields defaults; a file that
    /// exists but does not parse is an error.
    pub fn load_from(path: &Path) -> Result<Self, io::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, io::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the config as YAML, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(io::Error::other)?;
        std::fs::write(path, yaml)
    }

    /// Apply the value of `FREMORIZER_LOG`, if set.
    pub fn apply_env(&mut self, log_var: Option<String>) {
        match log_var {
            Some(v) if v.trim().is_empty() => self.log_file = None,
            Some(v) => self.log_file = Some(PathBuf::from(v)),
            None => {}
        }
    }
}

impl Default for FremorizerConfig {
    fn default() -> Self {
        Self {
            tuning: Self::default_tuning(),
            frets: Self::default_frets(),
            log_file: None,
        }
    }
}
