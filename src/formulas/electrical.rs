use crate::devices::{Device, SYSTEM_VOLTAGE_V};

/// Fraction of nameplate solar energy that reaches the battery
/// (controller, wiring, temperature and angle losses).
pub const SOLAR_SYSTEM_EFFICIENCY: f64 = 0.8;

/// Charging efficiency of a DC-DC booster fed from the alternator.
pub const ALTERNATOR_CHARGE_EFFICIENCY: f64 = 0.85;

/// Typical peak power per m² of free roof for camper modules.
pub const ROOF_WP_PER_M2: f64 = 175.0;

/// Total daily consumption of a device list.
///
/// # Returns
///
/// `(total_wh, total_ah)`; an empty list yields `(0.0, 0.0)`.
///
/// # Examples
///
/// ```
/// use van_werkstatt::devices::Device;
/// use van_werkstatt::formulas::power_consumption;
///
/// let (wh, ah) = power_consumption(&[Device::new("Hob", 1500.0, 0.25)]);
/// assert_eq!((wh, ah), (375.0, 31.25));
/// ```
pub fn power_consumption(devices: &[Device]) -> (f64, f64) {
    let total_wh: f64 = devices.iter().map(Device::daily_energy_wh).sum();
    (total_wh, total_wh / SYSTEM_VOLTAGE_V)
}

/// Daily solar harvest in Wh after system losses.
pub fn solar_yield_wh(panel_wp: f64, sun_hours_per_day: f64) -> f64 {
    panel_wp * sun_hours_per_day * SOLAR_SYSTEM_EFFICIENCY
}

/// Daily energy delivered by alternator charging in Wh.
///
/// # Arguments
///
/// * `charge_current_a` - Charge current of the booster (A)
/// * `drive_hours` - Hours of driving per day
pub fn alternator_yield_wh(charge_current_a: f64, drive_hours: f64) -> f64 {
    charge_current_a * SYSTEM_VOLTAGE_V * drive_hours * ALTERNATOR_CHARGE_EFFICIENCY
}

/// Installable solar peak power for a free roof area.
pub fn panel_wp_from_roof_area(roof_area_m2: f64) -> f64 {
    roof_area_m2 * ROOF_WP_PER_M2
}
