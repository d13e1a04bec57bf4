// ── Feature enablement ──
//
// Which provisioning modes the cluster's platform permits. Always an
// explicit value handed to `validate`; there is no process-wide default.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use super::mode::ProvisioningNetwork;

/// Platform the cluster runs on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum PlatformType {
    #[default]
    BareMetal,
    #[strum(serialize = "AWS")]
    #[serde(rename = "AWS")]
    Aws,
    Azure,
    #[strum(serialize = "GCP")]
    #[serde(rename = "GCP")]
    Gcp,
    OpenStack,
    VSphere,
    #[strum(serialize = "oVirt")]
    #[serde(rename = "oVirt")]
    Ovirt,
    Nutanix,
    External,
    None,
}

/// Set of provisioning modes permitted on the current platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnabledFeatures {
    modes: BTreeSet<ProvisioningNetwork>,
}

impl EnabledFeatures {
    /// No mode is permitted.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every mode is permitted.
    pub fn all() -> Self {
        ProvisioningNetwork::iter().collect()
    }

    pub fn only(modes: impl IntoIterator<Item = ProvisioningNetwork>) -> Self {
        modes.into_iter().collect()
    }

    /// Bare metal permits every mode; every other platform has no
    /// provisioning network to manage and only permits `Disabled`.
    pub fn for_platform(platform: PlatformType) -> Self {
        match platform {
            PlatformType::BareMetal => Self::all(),
            _ => Self::only([ProvisioningNetwork::Disabled]),
        }
    }

    pub fn enable(mut self, mode: ProvisioningNetwork) -> Self {
        self.modes.insert(mode);
        self
    }

    pub fn is_enabled(&self, mode: ProvisioningNetwork) -> bool {
        self.modes.contains(&mode)
    }

    pub fn iter(&self) -> impl Iterator<Item = ProvisioningNetwork> + '_ {
        self.modes.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

impl FromIterator<ProvisioningNetwork> for EnabledFeatures {
    fn from_iter<I: IntoIterator<Item = ProvisioningNetwork>>(iter: I) -> Self {
        Self {
            modes: iter.into_iter().collect(),
        }
    }
}
