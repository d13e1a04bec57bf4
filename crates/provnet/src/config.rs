//! CLI configuration: thin wrapper around `provnet_config`.
//!
//! Loads the file + environment layers and applies the flag overrides
//! from `GlobalOpts` and `FieldArgs` on top.

use std::path::{Path, PathBuf};

use provnet_core::{EnabledFeatures, ProvisioningConfig, ProvisioningNetwork};

use crate::cli::{FieldArgs, GlobalOpts, ModeArg};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use provnet_config::{Config, config_path};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Config file in effect: `--config` / `PROVNET_CONFIG`, else the
/// platform default location.
pub fn active_config_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}

/// Load file + environment, then apply `--platform`.
///
/// An explicitly requested file must exist; the default location may be
/// absent.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let path = active_config_path(global);
    if global.config.is_some() && !path.exists() {
        return Err(CliError::NoConfig {
            path: path.display().to_string(),
        });
    }

    let mut cfg = provnet_config::load_config_from(&path)?;
    if let Some(ref platform) = global.platform {
        cfg.platform.clone_from(platform);
    }
    Ok(cfg)
}

/// Everything a command needs: provisioning fields and permitted modes.
#[derive(Debug)]
pub struct Inputs {
    pub provisioning: ProvisioningConfig,
    pub features: EnabledFeatures,
}

/// Resolve provisioning fields (config < spec file < flags) and the
/// permitted modes (`--enable` < platform / `enabled_modes`).
pub fn resolve_inputs(global: &GlobalOpts, args: &FieldArgs) -> Result<Inputs, CliError> {
    let cfg = load(global)?;

    let features = if args.enable.is_empty() {
        cfg.enabled_features()?
    } else {
        args.enable.iter().copied().map(ProvisioningNetwork::from).collect()
    };

    let base = match args.spec {
        Some(ref path) => read_spec(path)?,
        None => cfg.provisioning,
    };

    Ok(Inputs {
        provisioning: apply_overrides(base, args),
        features,
    })
}

/// Layer `FieldArgs` flags over `base`.
pub fn apply_overrides(mut base: ProvisioningConfig, args: &FieldArgs) -> ProvisioningConfig {
    let overrides = [
        (&mut base.interface_name, &args.interface),
        (&mut base.provisioning_ip, &args.ip),
        (&mut base.network_cidr, &args.cidr),
        (&mut base.dhcp_range, &args.dhcp_range),
        (&mut base.os_download_url, &args.image_url),
        (&mut base.network_mode, &args.mode),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            field.clone_from(value);
        }
    }
    if let Some(external) = args.dhcp_external {
        base.dhcp_external_legacy = external;
    }
    base
}

/// Read a custom resource (or just its `spec`) from YAML or JSON.
pub fn read_spec(path: &Path) -> Result<ProvisioningConfig, CliError> {
    let contents = std::fs::read_to_string(path)?;
    let doc: serde_yaml::Value = serde_yaml::from_str(&contents)?;
    let spec = doc.get("spec").cloned().unwrap_or(doc);
    Ok(serde_yaml::from_value(spec)?)
}

impl From<ModeArg> for ProvisioningNetwork {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Managed => Self::Managed,
            ModeArg::Unmanaged => Self::Unmanaged,
            ModeArg::Disabled => Self::Disabled,
        }
    }
}
