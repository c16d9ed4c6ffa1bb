//! Pure thermal and electrical formulas.
//!
//! Every function here is deterministic in its arguments, so results may be
//! cached keyed by the full argument tuple.

/// Electrical consumption and generation formulas (12 V nominal).
pub mod electrical;
/// Cabin geometry and heat-loss formulas.
pub mod thermal;

pub use electrical::{
    alternator_yield_wh, panel_wp_from_roof_area, power_consumption, solar_yield_wh,
};
pub use thermal::{
    HeaterSizing, cabin_surface, cabin_volume, heating_power_kw, u_value,
};
