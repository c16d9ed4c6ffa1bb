//! Energy balance between daily generation and ledger consumption.

pub mod aggregator;
/// Autarky classification tiers.
pub mod status;

pub use aggregator::{EnergyBalance, GenerationInputs, NO_DATA};
pub use status::AutarkyStatus;
