//! `provnet resolve`

use provnet_core::resolve_with_source;

use crate::cli::{FieldArgs, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output::{self, DetailRow};

pub fn handle(args: &FieldArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let inputs = config::resolve_inputs(global, args)?;
    let resolution = resolve_with_source(&inputs.provisioning);
    super::log_resolution(&resolution);

    let enabled = inputs.features.is_enabled(resolution.mode);
    let rendered = output::render_single(
        global.output,
        &resolution,
        |r| {
            output::render_details(&[
                DetailRow::new("mode", r.mode.to_string()),
                DetailRow::new("decided by", super::validate::source_label(&r.source)),
                DetailRow::new("enabled on platform", if enabled { "yes" } else { "no" }),
            ])
        },
        |r| r.mode.to_string(),
    );
    output::print_output(&rendered, global.quiet);
    Ok(())
}
