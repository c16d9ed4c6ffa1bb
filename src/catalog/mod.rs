//! Static lookup tables feeding the formulas and the ledger.

/// Common camper loads with typical duty times.
pub mod device_presets;
/// Insulation materials with thickness and conductivity.
pub mod insulation;
/// Daily sun hours by destination and season.
pub mod sun_hours;

pub use device_presets::{DEVICE_PRESETS, DevicePreset};
pub use insulation::{INSULATION_CLASSES, InsulationClass};
pub use sun_hours::{SUN_HOURS, Season, SunHoursProfile};
