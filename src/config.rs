//! Configuration management for the breaking change detector
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (breaking-changes.toml)
//! - Environment variables (BREAKING_CHANGES__*)
//!
//! ## Example config file (breaking-changes.toml):
//! ```toml
//! [docs]
//! base_url = "https://familiar.dev/docs/breaking-changes"
//! version = "v5"
//!
//! [report]
//! format = "json"
//! fail_on_violation = true
//! ```

use config_crate::{Config, ConfigError, Environment, File, Map};
use serde::{Deserialize, Serialize};

use crate::rules::DEFAULT_DOCS_BASE_URL;

/// Main configuration for the detector
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Documentation link settings
    #[serde(default)]
    pub docs: DocsConfig,

    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Documentation link configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Base URL rule identifiers are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Version path segment used when none is given on the command line
    #[serde(default = "default_version")]
    pub version: String,
}

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Exit with a failure status when violations are found
    #[serde(default = "default_true")]
    pub fail_on_violation: bool,
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_base_url() -> String {
    DEFAULT_DOCS_BASE_URL.to_string()
}

fn default_version() -> String {
    "latest".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            version: default_version(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            fail_on_violation: true,
        }
    }
}

impl DetectorConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, adding a specific file on top of the defaults
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, None)
    }

    /// Load configuration, reading `BREAKING_CHANGES__*` variables from
    /// `env` instead of the process environment when given
    fn load_with_env(
        config_path: Option<&str>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = [
            "breaking-changes.toml",
            ".breaking-changes.toml",
            "config/breaking-changes.toml",
        ];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "breaking-changes") {
            let xdg_config = config_dir.config_dir().join("breaking-changes.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Values stay strings: versions such as "6.0" must not become numbers
        builder = builder.add_source(
            Environment::with_prefix("BREAKING_CHANGES")
                .separator("__")
                .source(env),
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
}
