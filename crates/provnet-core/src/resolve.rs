// ── Mode resolution ──
//
// Turns the explicit mode field and the deprecated DHCP-external flag into
// exactly one `ProvisioningNetwork`. Resolution never fails: unknown or
// missing values default rather than reject.

use serde::Serialize;

use crate::model::{ProvisioningConfig, ProvisioningNetwork};

/// How the effective mode was decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ModeSource {
    /// `network_mode` named a known mode.
    Explicit,
    /// `network_mode` held an unknown value; fell back to Managed.
    Unrecognized(String),
    /// `network_mode` was empty and the deprecated DHCP-external flag was set.
    LegacyDhcpExternal,
    /// Nothing was set.
    Default,
}

/// Effective mode plus the reason it was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub mode: ProvisioningNetwork,
    pub source: ModeSource,
}

impl Resolution {
    /// Whether the deprecated DHCP-external flag decided the mode. Callers
    /// log the deprecation; resolution itself has no side effects.
    pub fn used_legacy_field(&self) -> bool {
        self.source == ModeSource::LegacyDhcpExternal
    }
}

/// Effective provisioning network mode for `cfg`.
pub fn resolve(cfg: &ProvisioningConfig) -> ProvisioningNetwork {
    resolve_with_source(cfg).mode
}

/// Like [`resolve`], also reporting which input decided the mode.
pub fn resolve_with_source(cfg: &ProvisioningConfig) -> Resolution {
    if !cfg.network_mode.is_empty() {
        return match cfg.network_mode.parse::<ProvisioningNetwork>() {
            Ok(mode) => Resolution {
                mode,
                source: ModeSource::Explicit,
            },
            Err(_) => Resolution {
                mode: ProvisioningNetwork::Managed,
                source: ModeSource::Unrecognized(cfg.network_mode.clone()),
            },
        };
    }

    if cfg.dhcp_external_legacy {
        Resolution {
            mode: ProvisioningNetwork::Unmanaged,
            source: ModeSource::LegacyDhcpExternal,
        }
    } else {
        Resolution {
            mode: ProvisioningNetwork::Managed,
            source: ModeSource::Default,
        }
    }
}
