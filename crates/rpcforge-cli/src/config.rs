//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the pieces it needs
//! (layout, project descriptors, run options).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables prefixed `RPCFORGE__`, `__` between sections
//!    (`RPCFORGE__DEFAULTS__AUTHOR=jane`)
//! 3. Config file: `--config FILE`, else the platform config file, else
//!    `.rpcforge.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use rpcforge_core::domain::{DuplicatePolicy, ProjectDescriptor, SourceLayout};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "RPCFORGE";

/// File name of the per-directory config.
pub const LOCAL_CONFIG_FILE: &str = ".rpcforge.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallbacks for `generate` arguments.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Where each module's sources live.
    pub layout: SourceLayout,
    pub generate: GenerateConfig,
    /// Extra or replacement project descriptors, keyed by project id.
    pub projects: BTreeMap<String, ProjectDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub author: Option<String>,
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `<id>.tpl` overrides.
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub on_duplicate: DuplicatePolicy,
    pub overwrite: bool,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. The
    /// fallback locations are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let file_source = match config_file {
            Some(path) => File::from(path.as_path()).format(FileFormat::Toml).required(true),
            None => File::from(Self::config_path().as_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        let config: Self = settings
            .try_deserialize()
            .context("Invalid configuration")?;

        debug!(
            projects = config.projects.len(),
            templates = ?config.templates.local_path,
            "configuration loaded"
        );
        Ok(config)
    }

    /// The config file that [`AppConfig::load`] reads when `--config` is not
    /// given: the platform file if it exists, otherwise `.rpcforge.toml`.
    pub fn config_path() -> PathBuf {
        match Self::platform_config_path() {
            Some(path) if path.exists() => path,
            _ => PathBuf::from(LOCAL_CONFIG_FILE),
        }
    }

    /// `<platform config dir>/rpcforge/config.toml`, when one can be found.
    pub fn platform_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rpcforge", "rpcforge")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// The active file for `config path`: the explicit one when given.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }
}
