// ── User-facing field names ──
//
// Messages name fields the way the custom resource spells them, so an
// operator reading a rejected admission request can find the key to fix.

use serde::Serialize;
use strum::{Display, IntoStaticStr};

/// A provisioning field as named on the custom resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
pub enum Field {
    #[strum(serialize = "provisioningInterface")]
    #[serde(rename = "provisioningInterface")]
    Interface,

    #[strum(serialize = "provisioningIP")]
    #[serde(rename = "provisioningIP")]
    ProvisioningIp,

    #[strum(serialize = "provisioningNetworkCIDR")]
    #[serde(rename = "provisioningNetworkCIDR")]
    NetworkCidr,

    #[strum(serialize = "provisioningDHCPRange")]
    #[serde(rename = "provisioningDHCPRange")]
    DhcpRange,

    #[strum(serialize = "provisioningOSDownloadURL")]
    #[serde(rename = "provisioningOSDownloadURL")]
    OsDownloadUrl,

    #[strum(serialize = "provisioningNetwork")]
    #[serde(rename = "provisioningNetwork")]
    NetworkMode,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
