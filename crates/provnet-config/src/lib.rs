//! Configuration loading for provnet.
//!
//! A TOML file plus `PROVNET_*` environment variables describe the
//! provisioning fields and the platform. This crate merges them with
//! figment and turns the platform into an explicit
//! `provnet_core::EnabledFeatures` value. The CLI layers its flag
//! overrides on top.

mod provider;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use provider::{FieldNames, ProvisioningEnv};
use provnet_core::{EnabledFeatures, PlatformType, ProvisioningConfig, ProvisioningNetwork};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown platform '{name}'")]
    UnknownPlatform { name: String },

    #[error("unknown provisioning network mode '{name}'")]
    UnknownMode { name: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Platform the cluster runs on (e.g. "BareMetal", "OpenStack").
    #[serde(default = "default_platform")]
    pub platform: String,

    /// Explicit list of permitted modes. Overrides the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_modes: Option<Vec<String>>,

    /// The provisioning fields under validation.
    #[serde(default)]
    pub provisioning: ProvisioningConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            enabled_modes: None,
            provisioning: ProvisioningConfig::default(),
        }
    }
}

fn default_platform() -> String {
    PlatformType::BareMetal.to_string()
}

impl Config {
    pub fn platform_type(&self) -> Result<PlatformType, ConfigError> {
        self.platform
            .parse()
            .map_err(|_| ConfigError::UnknownPlatform {
                name: self.platform.clone(),
            })
    }

    /// Modes permitted for this config: `enabled_modes` when given,
    /// otherwise whatever the platform allows.
    pub fn enabled_features(&self) -> Result<EnabledFeatures, ConfigError> {
        match self.enabled_modes {
            Some(ref modes) => modes
                .iter()
                .map(|name| {
                    name.parse::<ProvisioningNetwork>()
                        .map_err(|_| ConfigError::UnknownMode { name: name.clone() })
                })
                .collect(),
            None => Ok(EnabledFeatures::for_platform(self.platform_type()?)),
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "provnet", "provnet").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("provnet");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Figment for `path` layered as defaults → TOML file → environment.
///
/// `PROVNET_PLATFORM` sets the platform and `PROVNET_PROVISIONING_<FIELD>`
/// sets a provisioning field, e.g. `PROVNET_PROVISIONING_NETWORK_MODE`.
///
/// The file may name provisioning fields by their custom resource names
/// (`provisioningIP`); they are renamed before merging, so the environment
/// still overrides them.
pub fn figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::default("platform", default_platform()))
        .merge(FieldNames(Toml::file(path)))
        .merge(Env::prefixed("PROVNET_").only(&["platform"]))
        .merge(ProvisioningEnv::prefixed("PROVNET_PROVISIONING_"))
}

/// Load config from `path` and the environment. A missing file is not an
/// error; figment simply skips it.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    tracing::debug!(path = %path.display(), "loading provisioning config");
    let config: Config = figment(path).extract()?;
    Ok(config)
}
