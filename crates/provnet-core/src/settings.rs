// ── Derived provisioning settings ──
//
// Values the surrounding operator needs when it renders pod templates
// (DHCP range with prefix length, IP with prefix length, image file name
// and checksum). Only ever derived from a configuration that validates.

use serde::Serialize;

use crate::error::Result;
use crate::image_url::{self, validate_image_url};
use crate::model::{EnabledFeatures, Field, ProvisioningConfig, ProvisioningNetwork};
use crate::net::{self, DhcpRange};

/// OS image location split into the parts the image cache needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageReference {
    pub url: String,
    pub file_name: String,
    pub checksum: String,
}

/// Settings derived from a validated [`ProvisioningConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisioningSettings {
    pub mode: ProvisioningNetwork,
    /// Provisioning interface, absent in Disabled mode.
    pub interface: Option<String>,
    /// `"<ip>/<prefix>"`, e.g. `172.30.20.3/24`.
    pub provisioning_ip_cidr: Option<String>,
    /// `"<begin>,<end>,<prefix>"`, Managed mode only.
    pub dhcp_range: Option<String>,
    pub image: Option<ImageReference>,
}

impl ProvisioningSettings {
    /// Validate `cfg`, then derive its settings. Fails with exactly the
    /// error [`crate::validate()`] would return.
    pub fn derive(cfg: &ProvisioningConfig, features: &EnabledFeatures) -> Result<Self> {
        let mode = crate::validate(cfg, features)?;

        // Validation has already parsed every value used below; the
        // `.ok()` calls only drop errors that cannot occur.
        let network = net::parse_cidr(&cfg.network_cidr).ok();

        let provisioning_ip_cidr = network.and_then(|network| {
            cfg.is_set(Field::ProvisioningIp)
                .then(|| format!("{}/{}", cfg.provisioning_ip, network.prefix()))
        });

        let dhcp_range = match (mode.serves_dhcp(), network) {
            (true, Some(network)) => DhcpRange::parse(&cfg.dhcp_range)
                .ok()
                .map(|range| format!("{range},{}", network.prefix())),
            _ => None,
        };

        let image = if cfg.is_set(Field::OsDownloadUrl) {
            let url = validate_image_url(&cfg.os_download_url)?;
            Some(ImageReference {
                file_name: image_url::file_name(&url).unwrap_or_default(),
                checksum: image_url::checksum(&url).unwrap_or_default(),
                url: cfg.os_download_url.clone(),
            })
        } else {
            None
        };

        Ok(Self {
            mode,
            interface: mode
                .uses_provisioning_interface()
                .then(|| cfg.interface_name.clone()),
            provisioning_ip_cidr,
            dhcp_range,
            image,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ValidationError;
    use pretty_assertions::assert_eq;

    const CHECKSUM: &str = "e98f83a2b9d4043719664a2be75fe8134dc6ca1fdbde807996622f8cc7ecd234";

    fn image_url() -> String {
        format!("http://172.22.0.1/images/rhcos-openstack.x86_64.qcow2.gz?sha256={CHECKSUM}")
    }

    fn managed() -> ProvisioningConfig {
        ProvisioningConfig::new()
            .with_interface("eth0")
            .with_ip("172.30.20.3")
            .with_cidr("172.30.20.0/24")
            .with_dhcp_range("172.30.20.11, 172.30.20.101")
            .with_image_url(image_url())
            .with_mode(ProvisioningNetwork::Managed)
    }

    #[test]
    fn managed_settings() {
        let settings = ProvisioningSettings::derive(&managed(), &EnabledFeatures::all()).unwrap();
        assert_eq!(
            settings,
            ProvisioningSettings {
                mode: ProvisioningNetwork::Managed,
                interface: Some("eth0".into()),
                provisioning_ip_cidr: Some("172.30.20.3/24".into()),
                dhcp_range: Some("172.30.20.11,172.30.20.101,24".into()),
                image: Some(ImageReference {
                    url: image_url(),
                    file_name: "rhcos-openstack.x86_64.qcow2.gz".into(),
                    checksum: CHECKSUM.into(),
                }),
            }
        );
    }

    #[test]
    fn unmanaged_settings_have_no_dhcp_range() {
        let cfg = managed().with_mode(ProvisioningNetwork::Unmanaged);
        let settings = ProvisioningSettings::derive(&cfg, &EnabledFeatures::all()).unwrap();
        assert_eq!(settings.dhcp_range, None);
        assert_eq!(settings.interface.as_deref(), Some("eth0"));
    }

    #[test]
    fn disabled_settings_without_network() {
        let cfg = ProvisioningConfig::new()
            .with_interface("eth9")
            .with_mode(ProvisioningNetwork::Disabled);
        let settings = ProvisioningSettings::derive(&cfg, &EnabledFeatures::all()).unwrap();
        assert_eq!(
            settings,
            ProvisioningSettings {
                mode: ProvisioningNetwork::Disabled,
                interface: None,
                provisioning_ip_cidr: None,
                dhcp_range: None,
                image: None,
            }
        );
    }

    #[test]
    fn invalid_config_yields_validation_error() {
        let cfg = managed().with_ip("172.30.20.20");
        assert!(matches!(
            ProvisioningSettings::derive(&cfg, &EnabledFeatures::all()),
            Err(ValidationError::ProvisioningIpInsideDhcpRange { .. })
        ));
    }
}
