use std::fmt;

use serde::Serialize;

use super::inputs::PlannerInputs;
use crate::balance::EnergyBalance;
use crate::error::DomainError;
use crate::formulas::{HeaterSizing, cabin_surface, cabin_volume, heating_power_kw, u_value};

/// Result of the heating calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatingReport {
    pub surface_m2: f64,
    pub volume_m3: f64,
    pub u_value: f64,
    pub delta_t_kelvin: f64,
    /// Raw demand; negative when the outside is warmer.
    pub heating_kw: f64,
    /// Demand clamped at zero for display.
    pub display_kw: f64,
    pub sizing: HeaterSizing,
}

impl HeatingReport {
    /// # Errors
    ///
    /// Propagates [`DomainError`] from the U-value calculation.
    pub fn compute(inputs: &PlannerInputs) -> Result<Self, DomainError> {
        let c = &inputs.cabin;
        let u = u_value(inputs.insulation.thickness_mm, inputs.insulation.lambda_w_per_mk)?;
        let surface_m2 = cabin_surface(c.length_m, c.width_m, c.height_m);
        let delta_t_kelvin = inputs.delta_t_kelvin();
        let heating_kw = heating_power_kw(surface_m2, u, delta_t_kelvin);

        Ok(Self {
            surface_m2,
            volume_m3: cabin_volume(c.length_m, c.width_m, c.height_m),
            u_value: u,
            delta_t_kelvin,
            heating_kw,
            display_kw: heating_kw.max(0.0),
            sizing: HeaterSizing::classify(heating_kw),
        })
    }
}

impl fmt::Display for HeatingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Heating ---")?;
        writeln!(f, "Volume:                {:.2} m³", self.volume_m3)?;
        writeln!(f, "Surface:               {:.2} m²", self.surface_m2)?;
        writeln!(f, "U-value:               {:.3} W/m²K", self.u_value)?;
        writeln!(f, "Delta-T:               {:.1} K", self.delta_t_kelvin)?;
        writeln!(f, "Heating power:         {:.3} kW", self.display_kw)?;
        write!(f, "Heater:                {}", self.sizing)
    }
}

/// Output of one recompute pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub heating: HeatingReport,
    pub balance: EnergyBalance,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heating)?;
        writeln!(f)?;
        write!(f, "{}", self.balance)
    }
}
