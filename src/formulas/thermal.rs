use std::fmt;

use serde::Serialize;

use crate::error::DomainError;

/// Empirical factor applied to the floor/roof footprint to account for
/// structural overhead (ribs, wheel arches, roof curvature).
pub const FLOOR_ROOF_OVERHEAD_FACTOR: f64 = 1.2;

/// Thermal transmittance of an insulation layer.
///
/// # Arguments
///
/// * `thickness_mm` - Layer thickness in millimetres (must be > 0)
/// * `lambda_value` - Thermal conductivity in W/(m·K)
///
/// # Returns
///
/// U-value in W/(m²·K), computed as `lambda / (thickness_mm / 1000)`.
///
/// # Errors
///
/// Returns [`DomainError::NonPositiveThickness`] for a zero or negative
/// thickness and [`DomainError::NonFinite`] for NaN/infinite inputs.
///
/// # Examples
///
/// ```
/// use van_werkstatt::formulas::u_value;
///
/// let u = u_value(19.0, 0.035).unwrap();
/// assert!((u - 1.842).abs() < 1e-3);
/// ```
pub fn u_value(thickness_mm: f64, lambda_value: f64) -> Result<f64, DomainError> {
    if !thickness_mm.is_finite() {
        return Err(DomainError::NonFinite {
            what: "thickness_mm",
            value: thickness_mm,
        });
    }
    if !lambda_value.is_finite() {
        return Err(DomainError::NonFinite {
            what: "lambda_value",
            value: lambda_value,
        });
    }
    if thickness_mm <= 0.0 {
        return Err(DomainError::NonPositiveThickness { thickness_mm });
    }
    Ok(lambda_value / (thickness_mm / 1000.0))
}

/// Steady-state heating power needed to hold the temperature difference.
///
/// A negative `delta_t_kelvin` (warmer outside than inside) yields a
/// negative result. No clamping happens here; see [`HeaterSizing`] for the
/// display-side interpretation.
pub fn heating_power_kw(surface_m2: f64, u_value: f64, delta_t_kelvin: f64) -> f64 {
    (surface_m2 * u_value * delta_t_kelvin) / 1000.0
}

/// Interior volume of the cabin box in m³.
pub fn cabin_volume(length_m: f64, width_m: f64, height_m: f64) -> f64 {
    length_m * width_m * height_m
}

/// Heat-exchanging envelope area in m².
///
/// Side walls and end walls are taken at face value; floor and roof share a
/// single footprint scaled by [`FLOOR_ROOF_OVERHEAD_FACTOR`].
pub fn cabin_surface(length_m: f64, width_m: f64, height_m: f64) -> f64 {
    2.0 * length_m * height_m
        + 2.0 * width_m * height_m
        + length_m * width_m * FLOOR_ROOF_OVERHEAD_FACTOR
}

/// Heater size recommendation for a computed heating demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaterSizing {
    /// Demand is zero or negative.
    NoHeatingNeeded,
    /// A 2 kW air heater covers the demand.
    TwoKwSufficient,
    /// A 4 kW air heater is required.
    FourKwRecommended,
    /// More than 4 kW: improve insulation or combine heaters.
    AboveFourKw,
}

impl HeaterSizing {
    /// Classifies a (possibly negative) heating demand in kW.
    pub fn classify(heating_kw: f64) -> Self {
        if heating_kw <= 0.0 {
            Self::NoHeatingNeeded
        } else if heating_kw <= 2.0 {
            Self::TwoKwSufficient
        } else if heating_kw <= 4.0 {
            Self::FourKwRecommended
        } else {
            Self::AboveFourKw
        }
    }

    /// Short label for rendering surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Self::NoHeatingNeeded => "no heating needed",
            Self::TwoKwSufficient => "2 kW sufficient",
            Self::FourKwRecommended => "4 kW recommended",
            Self::AboveFourKw => "more than 4 kW needed, improve insulation",
        }
    }
}

impl fmt::Display for HeaterSizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u_value_for_19mm_elastomer() {
        let u = u_value(19.0, 0.035).expect("positive thickness");
        assert!((u - 1.842_105).abs() < 1e-5);
    }

    #[test]
    fn u_value_rejects_zero_and_negative_thickness() {
        assert_eq!(
            u_value(0.0, 0.035),
            Err(DomainError::NonPositiveThickness { thickness_mm: 0.0 })
        );
        assert!(u_value(-5.0, 0.035).is_err());
    }

    #[test]
    fn u_value_rejects_nan() {
        assert!(matches!(
            u_value(f64::NAN, 0.035),
            Err(DomainError::NonFinite {
                what: "thickness_mm",
                ..
            })
        ));
    }

    #[test]
    fn surface_and_volume_of_reference_cabin() {
        let surface = cabin_surface(4.2, 1.8, 1.8);
        assert!((surface - 30.672).abs() < 1e-9);
        let volume = cabin_volume(4.2, 1.8, 1.8);
        assert!((volume - 13.608).abs() < 1e-9);
    }

    #[test]
    fn reference_cabin_needs_a_2kw_heater() {
        let u = u_value(19.0, 0.035).expect("positive thickness");
        let surface = cabin_surface(4.2, 1.8, 1.8);
        let kw = heating_power_kw(surface, u, 20.0 - -10.0);
        assert!((kw - 1.695).abs() < 1e-3, "got {kw}");
        assert_eq!(HeaterSizing::classify(kw), HeaterSizing::TwoKwSufficient);
        assert_eq!(HeaterSizing::classify(kw).label(), "2 kW sufficient");
    }

    #[test]
    fn negative_delta_is_not_clamped() {
        let kw = heating_power_kw(30.0, 1.0, -5.0);
        assert!((kw + 0.15).abs() < 1e-12);
        assert_eq!(HeaterSizing::classify(kw), HeaterSizing::NoHeatingNeeded);
    }

    #[test]
    fn sizing_boundaries() {
        assert_eq!(HeaterSizing::classify(0.0), HeaterSizing::NoHeatingNeeded);
        assert_eq!(HeaterSizing::classify(2.0), HeaterSizing::TwoKwSufficient);
        assert_eq!(HeaterSizing::classify(2.01), HeaterSizing::FourKwRecommended);
        assert_eq!(HeaterSizing::classify(4.0), HeaterSizing::FourKwRecommended);
        assert_eq!(HeaterSizing::classify(4.5), HeaterSizing::AboveFourKw);
    }
}
