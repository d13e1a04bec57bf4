// ── Provisioning network modes ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// How hosts are reached on the provisioning network.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum ProvisioningNetwork {
    /// The cluster runs its own DHCP server on the provisioning network.
    Managed,
    /// A provisioning network exists, but DHCP is administered externally.
    Unmanaged,
    /// No provisioning network; hosts boot over virtual media.
    Disabled,
}

impl ProvisioningNetwork {
    /// Whether this mode requires a dedicated provisioning interface.
    pub fn uses_provisioning_interface(self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Whether the cluster serves DHCP itself in this mode.
    pub fn serves_dhcp(self) -> bool {
        matches!(self, Self::Managed)
    }
}
