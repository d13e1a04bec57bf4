//! `provnet render`

use provnet_core::{ProvisioningSettings, resolve_with_source};

use crate::cli::{FieldArgs, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output::{self, DetailRow};

pub fn handle(args: &FieldArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let inputs = config::resolve_inputs(global, args)?;
    super::log_resolution(&resolve_with_source(&inputs.provisioning));

    let settings = ProvisioningSettings::derive(&inputs.provisioning, &inputs.features)?;
    tracing::debug!(mode = %settings.mode, "derived provisioning settings");

    let rendered = output::render_single(global.output, &settings, detail, plain);
    output::print_output(&rendered, global.quiet);
    Ok(())
}

fn detail(s: &ProvisioningSettings) -> String {
    let image = s.image.as_ref();
    output::render_details(&[
        DetailRow::new("mode", s.mode.to_string()),
        DetailRow::optional("interface", s.interface.as_deref()),
        DetailRow::optional("provisioning ip", s.provisioning_ip_cidr.as_deref()),
        DetailRow::optional("dhcp range", s.dhcp_range.as_deref()),
        DetailRow::optional("image", image.map(|i| i.file_name.as_str())),
        DetailRow::optional("image sha256", image.map(|i| i.checksum.as_str())),
    ])
}

fn plain(s: &ProvisioningSettings) -> String {
    let image = s.image.as_ref();
    [
        ("PROVISIONING_NETWORK", Some(s.mode.to_string())),
        ("PROVISIONING_INTERFACE", s.interface.clone()),
        ("PROVISIONING_IP", s.provisioning_ip_cidr.clone()),
        ("DHCP_RANGE", s.dhcp_range.clone()),
        ("IMAGE_URL", image.map(|i| i.url.clone())),
        ("IMAGE_FILENAME", image.map(|i| i.file_name.clone())),
        ("IMAGE_SHA256", image.map(|i| i.checksum.clone())),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.map(|v| format!("{key}={v}")))
    .collect::<Vec<_>>()
    .join("\n")
}
