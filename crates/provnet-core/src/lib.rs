//! Resolution and validation engine for baremetal provisioning networks.
//!
//! Given the handful of user-supplied provisioning fields (interface, IP,
//! CIDR, DHCP range, OS image URL and network mode) this crate decides which
//! provisioning mode is in effect and whether the configuration is safe to
//! apply for that mode:
//!
//! - **[`resolve`]**: derives the effective [`ProvisioningNetwork`] from the
//!   explicit mode field and the deprecated DHCP-external flag.
//!
//! - **[`validate()`]**: checks the resolved mode against the caller's
//!   [`EnabledFeatures`], then runs the per-mode rule set and returns the
//!   first failure as a [`ValidationError`].
//!
//! - **[`ProvisioningSettings`]**: derived strings (IP with prefix, DHCP
//!   range with prefix, image file name and checksum) for a configuration
//!   that has passed validation.
//!
//! Everything here is a pure computation over borrowed input: no I/O, no
//! logging, no global state. Callers own the `EnabledFeatures` value and
//! pass it on every call.

pub mod error;
pub mod image_url;
pub mod model;
pub mod net;
pub mod resolve;
pub mod rules;
pub mod settings;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::{Result, ValidationError};
pub use model::{EnabledFeatures, Field, PlatformType, ProvisioningConfig, ProvisioningNetwork};
pub use resolve::{ModeSource, Resolution, resolve, resolve_with_source};
pub use settings::{ImageReference, ProvisioningSettings};
pub use validate::validate;
