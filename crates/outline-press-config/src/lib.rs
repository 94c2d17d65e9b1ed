use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid exclude pattern {pattern:?}: {source}")]
    InvalidExcludePattern {
        pattern: String,
        source: glob::PatternError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub notes_path: PathBuf,

    /// Block whose reference `((uuid))` marks an article bullet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_block: Option<Uuid>,

    /// Raw marker substring; takes precedence over `publish_block`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_token: Option<String>,

    #[serde(default = "default_end_token")]
    pub end_token: String,

    #[serde(default = "default_property_label")]
    pub property_label: String,

    #[serde(default = "default_source_dirs")]
    pub source_dirs: Vec<String>,

    #[serde(default = "default_whole_file_dirs")]
    pub whole_file_dirs: Vec<String>,

    /// Glob patterns matched against paths relative to `notes_path`.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    #[serde(default = "default_max_file_name_len")]
    pub max_file_name_len: usize,

    #[serde(default = "default_true")]
    pub sanitize_links: bool,
}

fn default_end_token() -> String {
    "🏁".to_string()
}

fn default_property_label() -> String {
    "frontmatter".to_string()
}

fn default_source_dirs() -> Vec<String> {
    vec!["journals".to_string(), "pages".to_string()]
}

fn default_whole_file_dirs() -> Vec<String> {
    vec!["pages".to_string()]
}

fn default_exclude() -> Vec<String> {
    vec!["**/Uncategorized/**".to_string(), "**/index.md".to_string()]
}

fn default_max_file_name_len() -> usize {
    100
}

fn default_true() -> bool {
    true
}

impl Config {
    /// A config with every optional key at its default.
    pub fn new(notes_path: impl Into<PathBuf>) -> Self {
        Self {
            notes_path: notes_path.into(),
            publish_block: None,
            marker_token: None,
            end_token: default_end_token(),
            property_label: default_property_label(),
            source_dirs: default_source_dirs(),
            whole_file_dirs: default_whole_file_dirs(),
            exclude: default_exclude(),
            max_file_name_len: default_max_file_name_len(),
            sanitize_links: true,
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded notes path
        config.notes_path = Self::expand_path(&config.notes_path).unwrap_or(config.notes_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/outline-press");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The marker token articles are flagged with, if one is configured.
    pub fn marker(&self) -> Option<String> {
        match &self.marker_token {
            Some(token) if !token.is_empty() => Some(token.clone()),
            _ => self.publish_block.map(|id| format!("(({id}))")),
        }
    }

    pub fn exclude_patterns(&self) -> Result<Vec<glob::Pattern>, ConfigError> {
        self.exclude
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|source| ConfigError::InvalidExcludePattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
