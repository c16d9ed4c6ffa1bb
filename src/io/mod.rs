//! File output.

/// CSV export of the device ledger.
pub mod export;
