//! Parametric performance and cost estimation for multi-engine bomber designs.
//!
//! The model lives in the member crates; this facade re-exports them so
//! scenarios and tests reach everything through one name. Construct a
//! [`airframe::Bomber`] from components (usually via `config` and
//! `catalog`) and read its derived figures; `report` formats them.

pub use bomber_core::{atmosphere, constants, units};

pub use bomber_airframe as airframe;
pub use bomber_catalog as catalog;
pub use bomber_config as config;
pub use bomber_powerplant as powerplant;
pub use bomber_report as report;

/// Returns the version of the library, for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
