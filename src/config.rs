//! Configuration management
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (bombers.toml)
//! - Environment variables (BOMBERS__*)
//!
//! ## Example config file (bombers.toml):
//! ```toml
//! [content]
//! dir = "./content"
//! warn_unrecognized = true
//!
//! [report]
//! format = "json"
//!
//! [contact]
//! endpoint = "https://api.web3forms.com/submit"
//! access_key = "..."
//! subject_prefix = "Bombers Website: "
//! timeout_secs = 30
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::loader::ContentLoader;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Content store settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Contact form relay settings
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding `<domain>.json` files. Unset means the store
    /// embedded at build time.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Warn about JSON files that belong to no domain
    #[serde(default = "default_true")]
    pub warn_unrecognized: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Mail relay endpoint submissions are POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Relay access key. Submissions are refused while this is unset.
    #[serde(default)]
    pub access_key: Option<String>,

    /// Prepended to the subject the visitor typed
    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_true() -> bool {
    true
}

fn default_endpoint() -> String {
    "https://api.web3forms.com/submit".to_string()
}

fn default_subject_prefix() -> String {
    "Bombers Website: ".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: None,
            warn_unrecognized: true,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            access_key: None,
            subject_prefix: default_subject_prefix(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering an explicit file over the defaults
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = ["bombers.toml", ".bombers.toml", "config/bombers.toml"];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(dirs) = directories::ProjectDirs::from("org", "ofallon-bombers", "bombers") {
            let xdg_config = dirs.config_dir().join("bombers.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // BOMBERS__CONTACT__ACCESS_KEY=... and friends
        builder = builder.add_source(
            Environment::with_prefix("BOMBERS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Loader for the configured content store
    pub fn loader(&self) -> ContentLoader {
        match self.content_dir() {
            Some(dir) => ContentLoader::from_dir(dir),
            None => ContentLoader::embedded(),
        }
    }

    /// Content directory with relative paths resolved against the cwd
    pub fn content_dir(&self) -> Option<PathBuf> {
        self.content.dir.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                std::env::current_dir().unwrap_or_default().join(p)
            }
        })
    }
}
