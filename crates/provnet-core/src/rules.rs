// ── Per-mode rule sets ──
//
// Each mode is a fixed, ordered list of checks and the first failure wins.
// Presence checks always run before any parsing, CIDR/IP parsing before
// containment, and DHCP range checks before the image URL.

use std::net::Ipv4Addr;

use ipnetwork::Ipv4Network;

use crate::error::{Result, ValidationError};
use crate::image_url::validate_image_url;
use crate::model::{Field, ProvisioningConfig, ProvisioningNetwork};
use crate::net::{self, DhcpRange, RangeError};

const MANAGED_REQUIRED: [Field; 5] = [
    Field::Interface,
    Field::ProvisioningIp,
    Field::NetworkCidr,
    Field::DhcpRange,
    Field::OsDownloadUrl,
];

const UNMANAGED_REQUIRED: [Field; 4] = [
    Field::Interface,
    Field::ProvisioningIp,
    Field::NetworkCidr,
    Field::OsDownloadUrl,
];

const DISABLED_REQUIRED: [Field; 1] = [Field::NetworkMode];

/// Managed: the cluster's own DHCP server hands out `dhcp_range`, so the
/// range must sit inside the subnet and never cover the provisioning IP.
pub fn validate_managed(cfg: &ProvisioningConfig) -> Result<()> {
    require(cfg, ProvisioningNetwork::Managed, &MANAGED_REQUIRED)?;
    let (ip, network) = check_provisioning_network(cfg)?;
    check_dhcp_range(cfg, ip, &network)?;
    check_image_url(cfg)
}

/// Unmanaged: DHCP is external, so `dhcp_range` is ignored.
pub fn validate_unmanaged(cfg: &ProvisioningConfig) -> Result<()> {
    require(cfg, ProvisioningNetwork::Unmanaged, &UNMANAGED_REQUIRED)?;
    check_provisioning_network(cfg)?;
    check_image_url(cfg)
}

/// Disabled: no provisioning network. IP and CIDR are optional but come as
/// a pair, and are still checked for consistency when given.
pub fn validate_disabled(cfg: &ProvisioningConfig) -> Result<()> {
    require(cfg, ProvisioningNetwork::Disabled, &DISABLED_REQUIRED)?;

    match (
        cfg.is_set(Field::ProvisioningIp),
        cfg.is_set(Field::NetworkCidr),
    ) {
        (true, true) => {
            check_provisioning_network(cfg)?;
        }
        (true, false) => {
            return Err(ValidationError::IncompleteNetworkPair {
                present: Field::ProvisioningIp,
                missing: Field::NetworkCidr,
            });
        }
        (false, true) => {
            return Err(ValidationError::IncompleteNetworkPair {
                present: Field::NetworkCidr,
                missing: Field::ProvisioningIp,
            });
        }
        (false, false) => {}
    }

    check_image_url(cfg)
}

// ── Shared checks ───────────────────────────────────────────────────

fn require(cfg: &ProvisioningConfig, mode: ProvisioningNetwork, fields: &[Field]) -> Result<()> {
    match fields.iter().find(|field| !cfg.is_set(**field)) {
        Some(&field) => Err(ValidationError::MissingRequiredField { field, mode }),
        None => Ok(()),
    }
}

/// CIDR parse, IP parse, then containment.
fn check_provisioning_network(cfg: &ProvisioningConfig) -> Result<(Ipv4Addr, Ipv4Network)> {
    let network =
        net::parse_cidr(&cfg.network_cidr).map_err(|_| ValidationError::CannotParseCidr {
            value: cfg.network_cidr.clone(),
        })?;

    let ip = net::parse_ipv4(&cfg.provisioning_ip).map_err(|_| {
        ValidationError::CannotParseProvisioningIp {
            value: cfg.provisioning_ip.clone(),
        }
    })?;

    if !net::contained_in(ip, &network) {
        return Err(ValidationError::IpNotInCidr {
            ip: cfg.provisioning_ip.clone(),
            cidr: cfg.network_cidr.clone(),
        });
    }

    Ok((ip, network))
}

/// Format, address parse, containment in the subnet, then exclusivity
/// with the provisioning IP.
fn check_dhcp_range(cfg: &ProvisioningConfig, ip: Ipv4Addr, network: &Ipv4Network) -> Result<()> {
    let range = DhcpRange::parse(&cfg.dhcp_range).map_err(|err| match err {
        RangeError::Malformed(_) => ValidationError::MalformedDhcpRangeFormat {
            value: cfg.dhcp_range.clone(),
        },
        RangeError::InvalidAddress(address) => ValidationError::CannotParseDhcpRange {
            value: cfg.dhcp_range.clone(),
            address,
        },
    })?;

    if !range.within(network) {
        return Err(ValidationError::DhcpRangeOutsideCidr {
            range: cfg.dhcp_range.clone(),
            cidr: cfg.network_cidr.clone(),
        });
    }

    if range.contains(ip) {
        return Err(ValidationError::ProvisioningIpInsideDhcpRange {
            ip: cfg.provisioning_ip.clone(),
            range: cfg.dhcp_range.clone(),
        });
    }

    Ok(())
}

fn check_image_url(cfg: &ProvisioningConfig) -> Result<()> {
    if cfg.is_set(Field::OsDownloadUrl) {
        validate_image_url(&cfg.os_download_url)?;
    }
    Ok(())
}
