//! CLI error types with miette diagnostics.
//!
//! Maps engine rejections and config failures into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use provnet_config::ConfigError;
use provnet_core::ValidationError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const REJECTED: i32 = 3;
    pub const NO_CONFIG: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Validation outcome ───────────────────────────────────────────
    #[error("Provisioning configuration rejected: {message}")]
    #[diagnostic(
        code(provnet::rejected),
        help("Fix {field} ({reason}) and run `provnet validate` again.")
    )]
    Rejected {
        field: String,
        reason: String,
        message: String,
    },

    // ── Inputs ───────────────────────────────────────────────────────
    #[error("Unknown platform '{name}'")]
    #[diagnostic(
        code(provnet::unknown_platform),
        help(
            "Known platforms: BareMetal, AWS, Azure, GCP, OpenStack, VSphere, oVirt, Nutanix, External, None"
        )
    )]
    UnknownPlatform { name: String },

    #[error("Unknown provisioning network mode '{name}' in enabled_modes")]
    #[diagnostic(
        code(provnet::unknown_mode),
        help("Use Managed, Unmanaged or Disabled.")
    )]
    UnknownMode { name: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file not found")]
    #[diagnostic(
        code(provnet::no_config),
        help("Expected at: {path}\nDrop --config to use flags and environment only.")
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(provnet::config))]
    Config(Box<figment::Error>),

    #[error("Failed to serialize configuration: {0}")]
    #[diagnostic(code(provnet::serialize))]
    Serialize(#[from] toml::ser::Error),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid spec file: {0}")]
    #[diagnostic(
        code(provnet::spec),
        help("Pass a YAML or JSON custom resource or its spec object.")
    )]
    Spec(#[from] serde_yaml::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        Self::Rejected {
            field: err.field().to_string(),
            reason: err.reason().into(),
            message: err.to_string(),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownPlatform { name } => Self::UnknownPlatform { name },
            ConfigError::UnknownMode { name } => Self::UnknownMode { name },
            ConfigError::Figment(e) => Self::Config(e),
        }
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Rejected { .. } => exit_code::REJECTED,
            Self::NoConfig { .. } => exit_code::NO_CONFIG,
            Self::UnknownPlatform { .. }
            | Self::UnknownMode { .. }
            | Self::Spec(_) => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provnet_core::{Field, ProvisioningNetwork};

    #[test]
    fn rejection_carries_field_and_reason() {
        let err = CliError::from(ValidationError::MissingRequiredField {
            field: Field::DhcpRange,
            mode: ProvisioningNetwork::Managed,
        });
        assert_eq!(err.exit_code(), exit_code::REJECTED);
        assert_eq!(
            err.to_string(),
            "Provisioning configuration rejected: provisioningDHCPRange is required in Managed mode"
        );
        let CliError::Rejected { field, reason, .. } = err else {
            panic!("expected Rejected");
        };
        assert_eq!(field, "provisioningDHCPRange");
        assert_eq!(reason, "MissingRequiredField");
    }

    #[test]
    fn config_errors_map_to_usage() {
        let err = CliError::from(ConfigError::UnknownPlatform {
            name: "mainframe".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
