//! Electrical loads and the per-session device ledger.

/// Insertion-ordered collection of user-entered devices.
pub mod ledger;
pub mod types;

pub use ledger::DeviceLedger;
pub use types::{Device, SYSTEM_VOLTAGE_V};
