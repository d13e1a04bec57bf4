// ── Provisioning configuration ──
//
// The raw user-supplied field set. Values stay as strings: parsing them is
// the validator's job, and a rejected value must be echoed back verbatim.

use serde::{Deserialize, Serialize};

use super::field::Field;
use super::mode::ProvisioningNetwork;

/// User-supplied provisioning network settings.
///
/// Built by the caller (from a custom resource, an admission request or a
/// config file) immediately before validation. Empty strings mean "unset".
/// Deserialization accepts both the snake_case names and the custom
/// resource's camelCase names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisioningConfig {
    /// Network device on the provisioning network (e.g. `eth0`).
    #[serde(alias = "provisioningInterface")]
    pub interface_name: String,

    /// Dotted-decimal IPv4 address of the provisioning host.
    #[serde(alias = "provisioningIP")]
    pub provisioning_ip: String,

    /// CIDR block of the provisioning subnet.
    #[serde(alias = "provisioningNetworkCIDR")]
    pub network_cidr: String,

    /// `"begin, end"` pool handed out by the internal DHCP server.
    #[serde(alias = "provisioningDHCPRange")]
    pub dhcp_range: String,

    /// Compressed disk image URL carrying a `sha256` query parameter.
    #[serde(alias = "provisioningOSDownloadURL")]
    pub os_download_url: String,

    /// Explicit mode: `Managed`, `Unmanaged`, `Disabled`, or empty.
    #[serde(alias = "provisioningNetwork")]
    pub network_mode: String,

    /// Deprecated. Consulted only when `network_mode` is empty.
    #[serde(alias = "provisioningDHCPExternal")]
    pub dhcp_external_legacy: bool,
}

impl ProvisioningConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of a user-facing field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Interface => &self.interface_name,
            Field::ProvisioningIp => &self.provisioning_ip,
            Field::NetworkCidr => &self.network_cidr,
            Field::DhcpRange => &self.dhcp_range,
            Field::OsDownloadUrl => &self.os_download_url,
            Field::NetworkMode => &self.network_mode,
        }
    }

    pub fn is_set(&self, field: Field) -> bool {
        !self.value(field).is_empty()
    }

    // ── Field-setting helpers ───────────────────────────────────────

    pub fn with_interface(mut self, name: impl Into<String>) -> Self {
        self.interface_name = name.into();
        self
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.provisioning_ip = ip.into();
        self
    }

    pub fn with_cidr(mut self, cidr: impl Into<String>) -> Self {
        self.network_cidr = cidr.into();
        self
    }

    pub fn with_dhcp_range(mut self, range: impl Into<String>) -> Self {
        self.dhcp_range = range.into();
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.os_download_url = url.into();
        self
    }

    pub fn with_mode(mut self, mode: ProvisioningNetwork) -> Self {
        self.network_mode = mode.to_string();
        self
    }

    /// Set the mode field to an arbitrary string, including empty.
    pub fn with_network_mode(mut self, mode: impl Into<String>) -> Self {
        self.network_mode = mode.into();
        self
    }

    pub fn with_dhcp_external(mut self, external: bool) -> Self {
        self.dhcp_external_legacy = external;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_custom_resource_field_names() {
        let json = serde_json::json!({
            "provisioningInterface": "eth0",
            "provisioningIP": "172.30.20.3",
            "provisioningNetworkCIDR": "172.30.20.0/24",
            "provisioningDHCPRange": "172.30.20.11, 172.30.20.101",
            "provisioningOSDownloadURL": "http://example.com/image.qcow2.gz",
            "provisioningNetwork": "Managed",
            "provisioningDHCPExternal": true,
        });
        let cfg: ProvisioningConfig = serde_json::from_value(json).unwrap();
        assert_eq!(
            cfg,
            ProvisioningConfig::new()
                .with_interface("eth0")
                .with_ip("172.30.20.3")
                .with_cidr("172.30.20.0/24")
                .with_dhcp_range("172.30.20.11, 172.30.20.101")
                .with_image_url("http://example.com/image.qcow2.gz")
                .with_mode(ProvisioningNetwork::Managed)
                .with_dhcp_external(true)
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let cfg: ProvisioningConfig =
            serde_json::from_value(serde_json::json!({ "network_mode": "Disabled" })).unwrap();
        assert_eq!(cfg.network_mode, "Disabled");
        assert!(!cfg.is_set(Field::ProvisioningIp));
        assert!(!cfg.dhcp_external_legacy);
    }

    #[test]
    fn value_maps_every_field() {
        let cfg = ProvisioningConfig::new()
            .with_interface("eth1")
            .with_network_mode("Bogus");
        assert_eq!(cfg.value(Field::Interface), "eth1");
        assert_eq!(cfg.value(Field::NetworkMode), "Bogus");
        assert_eq!(cfg.value(Field::DhcpRange), "");
    }
}
