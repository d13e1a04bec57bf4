// ── Domain model ──
//
// Input and policy types shared by the resolver, the rule sets and the
// callers that assemble a configuration from a custom resource or a CLI.

pub mod config;
pub mod features;
pub mod field;
pub mod mode;

pub use config::ProvisioningConfig;
pub use features::{EnabledFeatures, PlatformType};
pub use field::Field;
pub use mode::ProvisioningNetwork;
