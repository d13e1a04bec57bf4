// ── Validation dispatcher ──

use crate::error::{Result, ValidationError};
use crate::model::{EnabledFeatures, ProvisioningConfig, ProvisioningNetwork};
use crate::resolve::resolve;
use crate::rules;

/// Validate `cfg` for the mode it resolves to.
///
/// Resolves the mode, rejects it if `features` does not permit it, then
/// runs that mode's rule set. Returns the resolved mode on success and the
/// first failing rule otherwise. Unknown mode strings have already resolved
/// to `Managed`, so they get the strictest rule set.
pub fn validate(cfg: &ProvisioningConfig, features: &EnabledFeatures) -> Result<ProvisioningNetwork> {
    let mode = resolve(cfg);

    if !features.is_enabled(mode) {
        return Err(ValidationError::ModeNotEnabled { mode });
    }

    match mode {
        ProvisioningNetwork::Managed => rules::validate_managed(cfg)?,
        ProvisioningNetwork::Unmanaged => rules::validate_unmanaged(cfg)?,
        ProvisioningNetwork::Disabled => rules::validate_disabled(cfg)?,
    }

    Ok(mode)
}

impl ProvisioningConfig {
    /// Shorthand for [`validate`].
    pub fn validate(&self, features: &EnabledFeatures) -> Result<ProvisioningNetwork> {
        validate(self, features)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::PlatformType;
    use pretty_assertions::assert_eq;

    const IMAGE_URL: &str = "http://172.22.0.1/images/rhcos-44.81.202004250133-0-openstack.x86_64.qcow2.gz?sha256=e98f83a2b9d4043719664a2be75fe8134dc6ca1fdbde807996622f8cc7ecd234";

    fn managed() -> ProvisioningConfig {
        ProvisioningConfig::new()
            .with_interface("eth0")
            .with_ip("172.30.20.3")
            .with_cidr("172.30.20.0/24")
            .with_dhcp_range("172.30.20.11, 172.30.20.101")
            .with_image_url(IMAGE_URL)
            .with_mode(ProvisioningNetwork::Managed)
    }

    #[test]
    fn valid_managed_config_passes() {
        assert_eq!(
            validate(&managed(), &EnabledFeatures::all()),
            Ok(ProvisioningNetwork::Managed)
        );
    }

    #[test]
    fn feature_gate_applies_before_rules() {
        let only_disabled = EnabledFeatures::only([ProvisioningNetwork::Disabled]);
        assert_eq!(
            validate(&managed(), &only_disabled),
            Err(ValidationError::ModeNotEnabled {
                mode: ProvisioningNetwork::Managed,
            })
        );

        // Even a broken config reports the gate first.
        let broken = managed().with_ip("").with_cidr("nonsense");
        assert!(matches!(
            validate(&broken, &only_disabled),
            Err(ValidationError::ModeNotEnabled { .. })
        ));

        assert!(validate(&managed(), &only_disabled.enable(ProvisioningNetwork::Managed)).is_ok());
    }

    #[test]
    fn non_baremetal_platforms_reject_managed() {
        let features = EnabledFeatures::for_platform(PlatformType::OpenStack);
        let err = validate(&managed(), &features).unwrap_err();
        assert!(err.to_string().contains("is not enabled on this platform"));

        let disabled = ProvisioningConfig::new()
            .with_image_url(IMAGE_URL)
            .with_mode(ProvisioningNetwork::Disabled);
        assert_eq!(validate(&disabled, &features), Ok(ProvisioningNetwork::Disabled));
    }

    #[test]
    fn legacy_flag_routes_to_unmanaged_rules() {
        // A DHCP range that Managed would reject is ignored once the legacy
        // flag makes the mode Unmanaged.
        let cfg = managed()
            .with_network_mode("")
            .with_dhcp_external(true)
            .with_dhcp_range("172.30.20.1:172.30.20.9");
        assert_eq!(
            validate(&cfg, &EnabledFeatures::all()),
            Ok(ProvisioningNetwork::Unmanaged)
        );

        let cfg = cfg.with_dhcp_external(false);
        assert!(matches!(
            validate(&cfg, &EnabledFeatures::all()),
            Err(ValidationError::MalformedDhcpRangeFormat { .. })
        ));
    }

    #[test]
    fn unknown_mode_gets_managed_rules() {
        let cfg = managed().with_network_mode("Bridged").with_dhcp_range("");
        assert_eq!(
            validate(&cfg, &EnabledFeatures::all()),
            Err(ValidationError::MissingRequiredField {
                field: crate::model::Field::DhcpRange,
                mode: ProvisioningNetwork::Managed,
            })
        );
    }

    #[test]
    fn repeated_validation_is_stable() {
        let features = EnabledFeatures::all();
        for cfg in [managed(), managed().with_ip("172.30.20.20")] {
            let before = cfg.clone();
            let first = validate(&cfg, &features);
            let second = validate(&cfg, &features);
            assert_eq!(first, second);
            assert_eq!(cfg, before);
        }
    }

    #[test]
    fn method_form_matches_free_function() {
        let features = EnabledFeatures::all();
        let cfg = managed().with_ip("172.30.20.20");
        assert_eq!(cfg.validate(&features), validate(&cfg, &features));
    }
}
