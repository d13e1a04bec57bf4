//! Command dispatch: bridges CLI args -> engine calls -> output formatting.

pub mod config_cmd;
pub mod render;
pub mod resolve;
pub mod validate;

use provnet_core::{ModeSource, Resolution};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a provisioning command to its handler.
pub fn dispatch(cmd: &Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Validate(args) => validate::handle(args, global),
        Command::Resolve(args) => resolve::handle(args, global),
        Command::Render(args) => render::handle(args, global),
        Command::Config(args) => config_cmd::handle(args, global),
        // Handled before dispatch
        Command::Completions(_) | Command::Man => unreachable!(),
    }
}

/// Emit the warnings mode resolution leaves to its caller.
pub fn log_resolution(resolution: &Resolution) {
    match resolution.source {
        ModeSource::LegacyDhcpExternal => tracing::warn!(
            mode = %resolution.mode,
            "provisioningDHCPExternal is deprecated, set provisioningNetwork instead"
        ),
        ModeSource::Unrecognized(ref value) => tracing::warn!(
            value = %value,
            mode = %resolution.mode,
            "unrecognized provisioningNetwork value, falling back to Managed rules"
        ),
        ModeSource::Explicit | ModeSource::Default => {
            tracing::debug!(mode = %resolution.mode, source = ?resolution.source, "resolved mode");
        }
    }
}
