// ── Validation errors ──
//
// One variant per rejection reason. Every variant is terminal: the engine
// stops at the first failing rule and hands this value back. The Display
// text is what operators see on a rejected admission request or a degraded
// operator condition, so it always names the offending field.

use thiserror::Error;

use crate::model::{Field, ProvisioningNetwork};

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Why a provisioning configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    // ── Presence ─────────────────────────────────────────────────────
    #[error("{field} is required in {mode} mode")]
    MissingRequiredField {
        field: Field,
        mode: ProvisioningNetwork,
    },

    #[error("{missing} is required in Disabled mode when {present} is set")]
    IncompleteNetworkPair { present: Field, missing: Field },

    // ── Malformed literals ───────────────────────────────────────────
    #[error("could not parse provisioningNetworkCIDR {value}")]
    CannotParseCidr { value: String },

    #[error("could not parse provisioningIP {value}")]
    CannotParseProvisioningIp { value: String },

    #[error("could not parse provisioningOSDownloadURL {url}: {reason}")]
    CannotParseUrl { url: String, reason: String },

    // ── Topology ─────────────────────────────────────────────────────
    #[error(
        "provisioningIP {ip} is not in the range defined by the provisioningNetworkCIDR {cidr}"
    )]
    IpNotInCidr { ip: String, cidr: String },

    #[error("provisioningDHCPRange {range} is not part of the provisioningNetworkCIDR {cidr}")]
    DhcpRangeOutsideCidr { range: String, cidr: String },

    // ── DHCP range syntax ────────────────────────────────────────────
    #[error("{value} is not a valid provisioningDHCPRange, expected \"begin, end\"")]
    MalformedDhcpRangeFormat { value: String },

    #[error("could not parse provisioningDHCPRange {value}: invalid address {address}")]
    CannotParseDhcpRange { value: String, address: String },

    #[error("provisioningIP {ip} must be outside of the provisioningDHCPRange {range}")]
    ProvisioningIpInsideDhcpRange { ip: String, range: String },

    // ── OS image reference ───────────────────────────────────────────
    #[error("unsupported scheme {scheme:?} in provisioningOSDownloadURL {url}, expected http or https")]
    UnsupportedScheme { scheme: String, url: String },

    #[error("provisioningOSDownloadURL {url} must reference a .qcow2.gz or .qcow2.xz image")]
    UnsupportedImageSuffix { url: String },

    #[error(
        "the sha256 parameter of provisioningOSDownloadURL {url} is missing or is not a 64-character lowercase hex digest"
    )]
    InvalidChecksumParameter { url: String },

    // ── Feature gate ─────────────────────────────────────────────────
    #[error("provisioningNetwork mode {mode} is not enabled on this platform")]
    ModeNotEnabled { mode: ProvisioningNetwork },
}

impl ValidationError {
    /// The field the operator has to change, if the rejection is tied to one.
    ///
    /// `ModeNotEnabled` is a platform restriction rather than a bad value,
    /// but changing `provisioningNetwork` is still the way out of it.
    pub fn field(&self) -> Field {
        match self {
            Self::MissingRequiredField { field, .. } => *field,
            Self::IncompleteNetworkPair { missing, .. } => *missing,
            Self::CannotParseCidr { .. } => Field::NetworkCidr,
            Self::CannotParseProvisioningIp { .. } | Self::IpNotInCidr { .. } => {
                Field::ProvisioningIp
            }
            Self::DhcpRangeOutsideCidr { .. }
            | Self::MalformedDhcpRangeFormat { .. }
            | Self::CannotParseDhcpRange { .. }
            | Self::ProvisioningIpInsideDhcpRange { .. } => Field::DhcpRange,
            Self::CannotParseUrl { .. }
            | Self::UnsupportedScheme { .. }
            | Self::UnsupportedImageSuffix { .. }
            | Self::InvalidChecksumParameter { .. } => Field::OsDownloadUrl,
            Self::ModeNotEnabled { .. } => Field::NetworkMode,
        }
    }

    /// Short machine-readable reason, stable across message rewording.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { .. } => "MissingRequiredField",
            Self::IncompleteNetworkPair { .. } => "IncompleteNetworkPair",
            Self::CannotParseCidr { .. } => "CannotParseCIDR",
            Self::CannotParseProvisioningIp { .. } => "CannotParseProvisioningIP",
            Self::CannotParseUrl { .. } => "CannotParseURL",
            Self::IpNotInCidr { .. } => "IPNotInCIDR",
            Self::DhcpRangeOutsideCidr { .. } => "DHCPRangeOutsideCIDR",
            Self::MalformedDhcpRangeFormat { .. } => "MalformedDHCPRangeFormat",
            Self::CannotParseDhcpRange { .. } => "CannotParseDHCPRange",
            Self::ProvisioningIpInsideDhcpRange { .. } => "ProvisioningIPInsideDHCPRange",
            Self::UnsupportedScheme { .. } => "UnsupportedScheme",
            Self::UnsupportedImageSuffix { .. } => "UnsupportedImageSuffix",
            Self::InvalidChecksumParameter { .. } => "InvalidChecksumParameter",
            Self::ModeNotEnabled { .. } => "ModeNotEnabled",
        }
    }
}
