//! Figment providers for the `[provisioning]` table.
//!
//! Every layer reports provisioning fields under their snake_case names so
//! that a higher layer replaces a lower one key for key.

use figment::{
    Metadata, Profile, Provider,
    providers::Env,
    value::{Dict, Map, Value},
};

const PROVISIONING: &str = "provisioning";

/// Custom resource field names and the `ProvisioningConfig` field each sets.
const RESOURCE_KEYS: [(&str, &str); 7] = [
    ("provisioningInterface", "interface_name"),
    ("provisioningIP", "provisioning_ip"),
    ("provisioningNetworkCIDR", "network_cidr"),
    ("provisioningDHCPRange", "dhcp_range"),
    ("provisioningOSDownloadURL", "os_download_url"),
    ("provisioningNetwork", "network_mode"),
    ("provisioningDHCPExternal", "dhcp_external_legacy"),
];

/// The only provisioning field that is not a string.
const FLAG_FIELD: &str = "dhcp_external_legacy";

fn field_key(key: String) -> String {
    RESOURCE_KEYS
        .iter()
        .find(|(resource, _)| *resource == key)
        .map_or(key, |(_, field)| (*field).to_owned())
}

// ── File layer ──────────────────────────────────────────────────────

/// Wraps a file provider, renaming custom resource keys in its
/// `[provisioning]` table to field names.
pub struct FieldNames<P>(pub P);

impl<P: Provider> Provider for FieldNames<P> {
    fn metadata(&self) -> Metadata {
        self.0.metadata()
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        let mut data = self.0.data()?;
        for dict in data.values_mut() {
            if let Some(Value::Dict(_, table)) = dict.get_mut(PROVISIONING) {
                *table = std::mem::take(table)
                    .into_iter()
                    .map(|(key, value)| (field_key(key), value))
                    .collect();
            }
        }
        Ok(data)
    }

    fn profile(&self) -> Option<Profile> {
        self.0.profile()
    }
}

// ── Environment layer ───────────────────────────────────────────────

/// `PROVNET_PROVISIONING_<FIELD>` variables.
///
/// Values stay strings (`PROVNET_PROVISIONING_INTERFACE_NAME=1` is the
/// interface `"1"`); only `dhcp_external_legacy` is read as a bool.
pub struct ProvisioningEnv(Env);

impl ProvisioningEnv {
    pub fn prefixed(prefix: &str) -> Self {
        Self(Env::prefixed(prefix))
    }
}

impl Provider for ProvisioningEnv {
    fn metadata(&self) -> Metadata {
        self.0.metadata()
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        let table: Dict = self
            .0
            .iter()
            .map(|(key, raw)| {
                let key = key.into_string();
                let value = match raw.trim().parse::<bool>() {
                    Ok(flag) if key == FLAG_FIELD => Value::from(flag),
                    _ => Value::from(raw),
                };
                (key, value)
            })
            .collect();

        let mut dict = Dict::new();
        if !table.is_empty() {
            dict.insert(PROVISIONING.to_owned(), Value::from(table));
        }
        Ok(Profile::Default.collect(dict))
    }
}
