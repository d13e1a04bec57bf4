//! Clap derive structures for the `provnet` CLI.
//!
//! Defines the command tree, global flags, and shared argument groups.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// provnet -- validate baremetal provisioning network settings
#[derive(Debug, Parser)]
#[command(
    name = "provnet",
    version,
    about = "Validate baremetal provisioning network settings",
    long_about = "Resolve the effective provisioning network mode (Managed, Unmanaged or\n\
        Disabled) and check interface, IP, CIDR, DHCP range and OS image URL\n\
        against that mode's rules before they reach the cluster.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration file (TOML)
    #[arg(long, short = 'c', env = "PROVNET_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Platform the cluster runs on (BareMetal, AWS, OpenStack, ...)
    #[arg(long, global = true)]
    pub platform: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "PROVNET_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Provisioning network mode as accepted by `--enable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    #[value(name = "Managed", alias = "managed")]
    Managed,
    #[value(name = "Unmanaged", alias = "unmanaged")]
    Unmanaged,
    #[value(name = "Disabled", alias = "disabled")]
    Disabled,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate provisioning settings for their resolved mode
    #[command(alias = "check")]
    Validate(FieldArgs),

    /// Show the effective provisioning network mode and how it was chosen
    Resolve(FieldArgs),

    /// Validate, then print the derived provisioning settings
    Render(FieldArgs),

    /// Inspect the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Print the man page (roff) to stdout
    Man,
}

// ── Provisioning field overrides ─────────────────────────────────────

/// Provisioning inputs. Each flag overrides the config file and
/// environment; `--spec` replaces the file's provisioning table.
#[derive(Debug, Default, Args)]
pub struct FieldArgs {
    /// Custom resource spec (YAML or JSON) to take provisioning fields from
    #[arg(long, value_name = "FILE")]
    pub spec: Option<PathBuf>,

    /// Provisioning network interface (provisioningInterface)
    #[arg(long, value_name = "NAME")]
    pub interface: Option<String>,

    /// Provisioning host IPv4 address (provisioningIP)
    #[arg(long, value_name = "ADDR")]
    pub ip: Option<String>,

    /// Provisioning subnet (provisioningNetworkCIDR)
    #[arg(long, value_name = "CIDR")]
    pub cidr: Option<String>,

    /// DHCP pool as "begin, end" (provisioningDHCPRange)
    #[arg(long, value_name = "RANGE")]
    pub dhcp_range: Option<String>,

    /// OS image URL with a sha256 parameter (provisioningOSDownloadURL)
    #[arg(long, value_name = "URL")]
    pub image_url: Option<String>,

    /// Provisioning network mode (provisioningNetwork); empty means unset
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Deprecated external-DHCP flag (provisioningDHCPExternal)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub dhcp_external: Option<bool>,

    /// Permit only these modes, ignoring the platform default (repeatable)
    #[arg(long = "enable", value_name = "MODE")]
    pub enable: Vec<ModeArg>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (file + environment + flags)
    Show,

    /// Print the configuration file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
