//! The `Device` entity.

use serde::{Deserialize, Serialize};

/// Nominal DC system voltage used for every Wh → Ah conversion.
pub const SYSTEM_VOLTAGE_V: f64 = 12.0;

/// One electrical load with a daily duty time.
///
/// Names are labels, not keys: two devices may share a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Display label.
    pub name: String,
    /// Power draw while running (W, > 0 once accepted by the ledger).
    pub power_watts: f64,
    /// Running time per day (h, in (0, 24]).
    pub hours_per_day: f64,
}

impl Device {
    /// Creates a device without validation.
    ///
    /// Use [`crate::devices::DeviceLedger::add`] to get the positivity
    /// checks applied.
    pub fn new(name: impl Into<String>, power_watts: f64, hours_per_day: f64) -> Self {
        Self {
            name: name.into(),
            power_watts,
            hours_per_day,
        }
    }

    /// Energy drawn per day in Wh.
    pub fn daily_energy_wh(&self) -> f64 {
        self.power_watts * self.hours_per_day
    }

    /// Battery charge drawn per day in Ah at [`SYSTEM_VOLTAGE_V`].
    pub fn daily_charge_ah(&self) -> f64 {
        self.daily_energy_wh() / SYSTEM_VOLTAGE_V
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn induction_hob_quarter_hour() {
        let hob = Device::new("Induction hob", 1500.0, 0.25);
        assert_eq!(hob.daily_energy_wh(), 375.0);
        assert_eq!(hob.daily_charge_ah(), 31.25);
    }
}
