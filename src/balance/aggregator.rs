//! Combines solar and alternator generation against ledger consumption.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::status::AutarkyStatus;
use crate::devices::Device;
use crate::formulas::{alternator_yield_wh, power_consumption, solar_yield_wh};

/// Placeholder rendered instead of a percentage when nothing is consumed.
pub const NO_DATA: &str = "–";

/// Generation-side inputs for one balance evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationInputs {
    /// Installed solar peak power (Wp).
    pub solar_wp: f64,
    /// Usable sun hours per day at the destination.
    pub sun_hours: f64,
    /// Alternator (DC-DC) charge current (A).
    pub alternator_current_a: f64,
    /// Driving time per day (h).
    pub drive_hours: f64,
}

/// Daily energy balance, recomputed on every evaluation.
///
/// `autarky_percent` is the display value capped at 100; the tier in
/// `status` is derived from the uncapped `autarky_ratio_percent` so that a
/// large surplus is still reported as such. Both are `None` for an empty
/// ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyBalance {
    pub solar_yield_wh: f64,
    pub alternator_yield_wh: f64,
    pub total_generation_wh: f64,
    pub total_consumption_wh: f64,
    pub total_consumption_ah: f64,
    /// Uncapped `generation / consumption * 100`.
    pub autarky_ratio_percent: Option<f64>,
    /// `min(100, autarky_ratio_percent)`.
    pub autarky_percent: Option<f64>,
    pub status: Option<AutarkyStatus>,
}

impl EnergyBalance {
    /// Evaluates the balance of `devices` against the given generation.
    ///
    /// # Examples
    ///
    /// ```
    /// use van_werkstatt::balance::{EnergyBalance, GenerationInputs};
    ///
    /// let inputs = GenerationInputs {
    ///     solar_wp: 700.0,
    ///     sun_hours: 7.0,
    ///     alternator_current_a: 30.0,
    ///     drive_hours: 0.0,
    /// };
    /// let balance = EnergyBalance::compute(&[], &inputs);
    /// assert!((balance.solar_yield_wh - 3920.0).abs() < 1e-9);
    /// assert!(balance.autarky_percent.is_none());
    /// ```
    pub fn compute(devices: &[Device], inputs: &GenerationInputs) -> Self {
        let (total_wh, total_ah) = power_consumption(devices);
        let solar_wh = solar_yield_wh(inputs.solar_wp, inputs.sun_hours);
        let alt_wh = alternator_yield_wh(inputs.alternator_current_a, inputs.drive_hours);
        let generation_wh = solar_wh + alt_wh;

        let (ratio, capped, status) = if total_wh > 0.0 {
            let ratio = generation_wh / total_wh * 100.0;
            (
                Some(ratio),
                Some(ratio.min(100.0)),
                Some(AutarkyStatus::classify(ratio, generation_wh, total_wh)),
            )
        } else {
            (None, None, None)
        };

        debug!(
            devices = devices.len(),
            generation_wh,
            consumption_wh = total_wh,
            ratio = ?ratio,
            "energy balance computed"
        );

        Self {
            solar_yield_wh: solar_wh,
            alternator_yield_wh: alt_wh,
            total_generation_wh: generation_wh,
            total_consumption_wh: total_wh,
            total_consumption_ah: total_ah,
            autarky_ratio_percent: ratio,
            autarky_percent: capped,
            status,
        }
    }

    /// Autarky as display text: `"87 %"`, or [`NO_DATA`] for an empty ledger.
    pub fn autarky_display(&self) -> String {
        match self.autarky_percent {
            Some(p) => format!("{p:.0} %"),
            None => NO_DATA.to_string(),
        }
    }
}

impl fmt::Display for EnergyBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Energy Balance ---")?;
        writeln!(f, "Solar:                 {:.0} Wh", self.solar_yield_wh)?;
        writeln!(f, "Alternator:            {:.0} Wh", self.alternator_yield_wh)?;
        writeln!(f, "Generation:            {:.0} Wh", self.total_generation_wh)?;
        writeln!(
            f,
            "Consumption:           {:.0} Wh ({:.1} Ah)",
            self.total_consumption_wh, self.total_consumption_ah
        )?;
        writeln!(f, "Autarky:               {}", self.autarky_display())?;
        match &self.status {
            Some(status) => write!(f, "Status:                {status}"),
            None => write!(f, "Status:                no devices recorded"),
        }
    }
}
