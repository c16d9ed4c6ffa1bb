//! Heating and 12 V energy-balance planner for camper-van conversions.

/// Energy balance aggregation and autarky classification.
pub mod balance;
/// Device presets, insulation classes and sun-hour profiles.
pub mod catalog;
pub mod config;
pub mod devices;
pub mod error;
pub mod formulas;
pub mod io;
/// Per-session state and the recompute entry point.
pub mod session;

#[cfg(feature = "api")]
pub mod api;
#[cfg(feature = "tui")]
pub mod tui;
