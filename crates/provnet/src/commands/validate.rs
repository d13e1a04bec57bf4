//! `provnet validate`

use serde::Serialize;

use provnet_core::{Field, ModeSource, ProvisioningNetwork, resolve_with_source, validate};

use crate::cli::{FieldArgs, GlobalOpts, OutputFormat};
use crate::config;
use crate::error::CliError;
use crate::output::{self, DetailRow};

#[derive(Debug, Serialize)]
struct ValidationReport {
    valid: bool,
    mode: ProvisioningNetwork,
    mode_source: ModeSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub fn handle(args: &FieldArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let inputs = config::resolve_inputs(global, args)?;
    let resolution = resolve_with_source(&inputs.provisioning);
    super::log_resolution(&resolution);

    let outcome = validate(&inputs.provisioning, &inputs.features);
    let mut report = ValidationReport {
        valid: outcome.is_ok(),
        mode: resolution.mode,
        mode_source: resolution.source,
        field: None,
        reason: None,
        message: None,
    };

    match outcome {
        Ok(mode) => {
            tracing::info!(%mode, "provisioning configuration is valid");
            let color = output::should_color(global.color);
            let rendered = output::render_single(
                global.output,
                &report,
                |r| {
                    let status = output::status_line(true, "provisioning configuration is valid", color);
                    let rows = [
                        DetailRow::new("mode", r.mode.to_string()),
                        DetailRow::new("decided by", source_label(&r.mode_source)),
                    ];
                    format!("{status}\n{}", output::render_details(&rows))
                },
                |r| format!("valid {}", r.mode),
            );
            output::print_output(&rendered, global.quiet);
            Ok(())
        }
        Err(err) => {
            tracing::info!(reason = err.reason(), field = %err.field(), "provisioning configuration rejected");
            // Table mode leaves the message to the diagnostic on stderr.
            if global.output != OutputFormat::Table {
                report.field = Some(err.field());
                report.reason = Some(err.reason());
                report.message = Some(err.to_string());
                let rendered = output::render_single(
                    global.output,
                    &report,
                    |_| String::new(),
                    |r| format!("invalid {}", r.message.as_deref().unwrap_or_default()),
                );
                output::print_output(&rendered, global.quiet);
            }
            Err(err.into())
        }
    }
}

pub fn source_label(source: &ModeSource) -> String {
    match source {
        ModeSource::Explicit => "provisioningNetwork".into(),
        ModeSource::Unrecognized(value) => format!("unrecognized provisioningNetwork {value:?}"),
        ModeSource::LegacyDhcpExternal => "provisioningDHCPExternal (deprecated)".into(),
        ModeSource::Default => "default".into(),
    }
}
