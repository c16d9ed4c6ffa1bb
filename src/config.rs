//! TOML-based planner configuration and preset definitions.

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::balance::GenerationInputs;
use crate::catalog::{DevicePreset, InsulationClass, SunHoursProfile};
use crate::devices::{Device, DeviceLedger};
use crate::formulas::panel_wp_from_roof_area;
use crate::session::{CabinDimensions, InsulationLayer, PlannerInputs, Session};

/// Top-level planner configuration parsed from TOML.
///
/// All sections have defaults matching the `weekender` preset. Load from
/// TOML with [`PlannerConfig::from_toml_file`] or use
/// [`PlannerConfig::weekender`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerConfig {
    /// Interior dimensions.
    #[serde(default)]
    pub cabin: CabinConfig,
    /// Temperatures and insulation choice.
    #[serde(default)]
    pub climate: ClimateConfig,
    /// Roof area and travel destination.
    #[serde(default)]
    pub solar: SolarConfig,
    /// Alternator charging while driving.
    #[serde(default)]
    pub alternator: AlternatorConfig,
    /// Initial ledger contents.
    #[serde(default)]
    pub devices: Vec<DeviceEntry>,
}

/// Interior dimensions in metres.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CabinConfig {
    /// Length (2.0–7.0 m).
    pub length_m: f64,
    /// Width (1.2–2.5 m).
    pub width_m: f64,
    /// Height (1.0–2.5 m).
    pub height_m: f64,
}

impl Default for CabinConfig {
    fn default() -> Self {
        Self {
            length_m: 4.2,
            width_m: 1.8,
            height_m: 1.8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClimateConfig {
    /// Ambient temperature (°C, -30–30).
    pub outside_temp_c: f64,
    /// Desired interior temperature (°C, 5–30).
    pub inside_temp_c: f64,
    /// Insulation catalog key, e.g. `"elastomer_19"`.
    pub insulation: String,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            outside_temp_c: -10.0,
            inside_temp_c: 20.0,
            insulation: "elastomer_19".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolarConfig {
    /// Free roof area for panels (m², 1–12).
    pub roof_area_m2: f64,
    /// Sun-hour profile label, e.g. `"Spain - Summer"`.
    pub destination: String,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            roof_area_m2: 4.0,
            destination: "Germany - Summer".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlternatorConfig {
    /// Charge current (A, 10–70).
    pub charge_current_a: f64,
    /// Driving time per day (h, 0–8).
    pub drive_hours: f64,
}

impl Default for AlternatorConfig {
    fn default() -> Self {
        Self {
            charge_current_a: 30.0,
            drive_hours: 2.0,
        }
    }
}

/// One `[[devices]]` table: either a catalog preset (optionally with
/// overridden fields) or a fully specified custom device.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceEntry {
    pub preset: Option<String>,
    pub name: Option<String>,
    pub power_watts: Option<f64>,
    pub hours_per_day: Option<f64>,
}

impl DeviceEntry {
    /// Shorthand for a preset entry without overrides.
    pub fn preset(key: &str) -> Self {
        Self {
            preset: Some(key.to_string()),
            ..Self::default()
        }
    }

    /// Resolves the entry into a device value (not yet validated).
    pub(crate) fn resolve(&self, field: &str) -> Result<Device, ConfigError> {
        let base = match &self.preset {
            Some(key) => Some(DevicePreset::find(key).ok_or_else(|| ConfigError {
                field: format!("{field}.preset"),
                message: format!("unknown device preset \"{key}\""),
            })?),
            None => None,
        };

        let name = self
            .name
            .clone()
            .or_else(|| base.map(|p| p.name.to_string()))
            .ok_or_else(|| ConfigError::missing(field, "name"))?;
        let power_watts = self
            .power_watts
            .or_else(|| base.map(|p| p.power_watts))
            .ok_or_else(|| ConfigError::missing(field, "power_watts"))?;
        let hours_per_day = self
            .hours_per_day
            .or_else(|| base.map(|p| p.hours_per_day))
            .ok_or_else(|| ConfigError::missing(field, "hours_per_day"))?;

        Ok(Device::new(name, power_watts, hours_per_day))
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"cabin.length_m"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn missing(entry: &str, key: &str) -> Self {
        Self {
            field: format!("{entry}.{key}"),
            message: "required when no preset is given".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Returns the weekender preset: mild climate, a handful of small loads.
    pub fn weekender() -> Self {
        Self {
            cabin: CabinConfig::default(),
            climate: ClimateConfig::default(),
            solar: SolarConfig::default(),
            alternator: AlternatorConfig::default(),
            devices: vec![
                DeviceEntry::preset("compressor_fridge"),
                DeviceEntry::preset("led_lighting"),
                DeviceEntry::preset("water_pump"),
                DeviceEntry::preset("phone"),
            ],
        }
    }

    /// Returns the winter-nomad preset: long van, hard frost, heavy loads.
    pub fn winter_nomad() -> Self {
        Self {
            cabin: CabinConfig {
                length_m: 5.0,
                width_m: 1.8,
                height_m: 1.9,
            },
            climate: ClimateConfig {
                outside_temp_c: -15.0,
                inside_temp_c: 21.0,
                insulation: "elastomer_32".to_string(),
            },
            solar: SolarConfig {
                roof_area_m2: 3.0,
                destination: "Austria - Winter".to_string(),
            },
            alternator: AlternatorConfig {
                charge_current_a: 50.0,
                drive_hours: 1.0,
            },
            devices: vec![
                DeviceEntry::preset("compressor_fridge"),
                DeviceEntry::preset("led_lighting"),
                DeviceEntry {
                    hours_per_day: Some(12.0),
                    ..DeviceEntry::preset("diesel_heater")
                },
                DeviceEntry::preset("laptop"),
                DeviceEntry::preset("induction_hob"),
            ],
        }
    }

    /// Returns the off-grid-south preset: big roof, little driving.
    pub fn off_grid_south() -> Self {
        Self {
            cabin: CabinConfig::default(),
            climate: ClimateConfig {
                outside_temp_c: 8.0,
                inside_temp_c: 20.0,
                insulation: "xps_30".to_string(),
            },
            solar: SolarConfig {
                roof_area_m2: 6.0,
                destination: "Spain - Summer".to_string(),
            },
            alternator: AlternatorConfig {
                charge_current_a: 30.0,
                drive_hours: 0.5,
            },
            devices: vec![
                DeviceEntry::preset("compressor_fridge"),
                DeviceEntry::preset("led_lighting"),
                DeviceEntry::preset("roof_fan"),
                DeviceEntry::preset("laptop"),
                DeviceEntry::preset("satellite_internet"),
                DeviceEntry::preset("coffee_machine"),
            ],
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["weekender", "winter_nomad", "off_grid_south"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "weekender" => Ok(Self::weekender()),
            "winter_nomad" => Ok(Self::winter_nomad()),
            "off_grid_south" => Ok(Self::off_grid_south()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let c = &self.cabin;
        check_range(&mut errors, "cabin.length_m", c.length_m, ranges::CABIN_LENGTH_M);
        check_range(&mut errors, "cabin.width_m", c.width_m, ranges::CABIN_WIDTH_M);
        check_range(&mut errors, "cabin.height_m", c.height_m, ranges::CABIN_HEIGHT_M);

        let cl = &self.climate;
        check_range(
            &mut errors,
            "climate.outside_temp_c",
            cl.outside_temp_c,
            ranges::OUTSIDE_TEMP_C,
        );
        check_range(
            &mut errors,
            "climate.inside_temp_c",
            cl.inside_temp_c,
            ranges::INSIDE_TEMP_C,
        );
        if InsulationClass::find(&cl.insulation).is_none() {
            errors.push(ConfigError {
                field: "climate.insulation".into(),
                message: format!("unknown insulation \"{}\"", cl.insulation),
            });
        }

        let s = &self.solar;
        check_range(&mut errors, "solar.roof_area_m2", s.roof_area_m2, ranges::ROOF_AREA_M2);
        if SunHoursProfile::find_by_label(&s.destination).is_none() {
            errors.push(ConfigError {
                field: "solar.destination".into(),
                message: format!(
                    "unknown destination \"{}\", expected \"<region> - <season>\"",
                    s.destination
                ),
            });
        }

        let a = &self.alternator;
        check_range(
            &mut errors,
            "alternator.charge_current_a",
            a.charge_current_a,
            ranges::CHARGE_CURRENT_A,
        );
        check_range(
            &mut errors,
            "alternator.drive_hours",
            a.drive_hours,
            ranges::DRIVE_HOURS,
        );

        let mut scratch = DeviceLedger::new();
        for (i, entry) in self.devices.iter().enumerate() {
            let field = format!("devices[{i}]");
            match entry.resolve(&field) {
                Ok(device) => {
                    if let Err(e) = scratch.push(device) {
                        errors.push(ConfigError {
                            field,
                            message: e.to_string(),
                        });
                    }
                }
                Err(e) => errors.push(e),
            }
        }

        errors
    }

    /// Resolves catalog keys into the numeric inputs of a session.
    ///
    /// # Errors
    ///
    /// Returns every validation error if the configuration is invalid.
    pub fn planner_inputs(&self) -> Result<PlannerInputs, Vec<ConfigError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        // Both lookups succeeded inside `validate`.
        let (Some(insulation), Some(sun)) = (
            InsulationClass::find(&self.climate.insulation),
            SunHoursProfile::find_by_label(&self.solar.destination),
        ) else {
            return Err(Vec::new());
        };

        Ok(PlannerInputs {
            cabin: CabinDimensions {
                length_m: self.cabin.length_m,
                width_m: self.cabin.width_m,
                height_m: self.cabin.height_m,
            },
            insulation: InsulationLayer {
                thickness_mm: insulation.thickness_mm,
                lambda_w_per_mk: insulation.lambda_w_per_mk,
            },
            outside_temp_c: self.climate.outside_temp_c,
            inside_temp_c: self.climate.inside_temp_c,
            generation: GenerationInputs {
                solar_wp: panel_wp_from_roof_area(self.solar.roof_area_m2),
                sun_hours: sun.sun_hours_per_day,
                alternator_current_a: self.alternator.charge_current_a,
                drive_hours: self.alternator.drive_hours,
            },
        })
    }

    /// Builds a fresh session with the configured devices in the ledger.
    ///
    /// # Errors
    ///
    /// Returns every validation error if the configuration is invalid.
    pub fn into_session(&self) -> Result<Session, Vec<ConfigError>> {
        let inputs = self.planner_inputs()?;
        let mut ledger = DeviceLedger::new();
        let mut errors = Vec::new();
        for (i, entry) in self.devices.iter().enumerate() {
            let field = format!("devices[{i}]");
            let pushed = entry.resolve(&field).and_then(|d| {
                ledger.push(d).map(|_| ()).map_err(|e| ConfigError {
                    field: field.clone(),
                    message: e.to_string(),
                })
            });
            if let Err(e) = pushed {
                errors.push(e);
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Session::with_ledger(inputs, ledger))
    }
}

/// Accepted input ranges, shared by TOML validation, [`validate_inputs`]
/// and the interactive editors.
pub mod ranges {
    use std::ops::RangeInclusive;

    use crate::formulas::electrical::ROOF_WP_PER_M2;

    pub const CABIN_LENGTH_M: RangeInclusive<f64> = 2.0..=7.0;
    pub const CABIN_WIDTH_M: RangeInclusive<f64> = 1.2..=2.5;
    pub const CABIN_HEIGHT_M: RangeInclusive<f64> = 1.0..=2.5;
    pub const OUTSIDE_TEMP_C: RangeInclusive<f64> = -30.0..=30.0;
    pub const INSIDE_TEMP_C: RangeInclusive<f64> = 5.0..=30.0;
    pub const ROOF_AREA_M2: RangeInclusive<f64> = 1.0..=12.0;
    /// Panel power reachable from [`ROOF_AREA_M2`].
    pub const SOLAR_WP: RangeInclusive<f64> = ROOF_WP_PER_M2..=12.0 * ROOF_WP_PER_M2;
    pub const SUN_HOURS: RangeInclusive<f64> = 0.0..=24.0;
    pub const CHARGE_CURRENT_A: RangeInclusive<f64> = 10.0..=70.0;
    pub const DRIVE_HOURS: RangeInclusive<f64> = 0.0..=8.0;
}

/// Range-checks already resolved inputs, e.g. a replacement sent over the
/// API. Field paths follow the serialized layout of [`PlannerInputs`].
///
/// Insulation thickness is left to the U-value calculation, which reports
/// non-positive values as a [`DomainError`](crate::error::DomainError).
pub fn validate_inputs(inputs: &PlannerInputs) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    let c = &inputs.cabin;
    check_range(&mut errors, "cabin.length_m", c.length_m, ranges::CABIN_LENGTH_M);
    check_range(&mut errors, "cabin.width_m", c.width_m, ranges::CABIN_WIDTH_M);
    check_range(&mut errors, "cabin.height_m", c.height_m, ranges::CABIN_HEIGHT_M);
    check_range(
        &mut errors,
        "outside_temp_c",
        inputs.outside_temp_c,
        ranges::OUTSIDE_TEMP_C,
    );
    check_range(
        &mut errors,
        "inside_temp_c",
        inputs.inside_temp_c,
        ranges::INSIDE_TEMP_C,
    );

    let lambda = inputs.insulation.lambda_w_per_mk;
    if !(lambda.is_finite() && lambda > 0.0) {
        errors.push(ConfigError {
            field: "insulation.lambda_w_per_mk".into(),
            message: format!("must be > 0, got {lambda}"),
        });
    }

    let g = &inputs.generation;
    check_range(&mut errors, "generation.solar_wp", g.solar_wp, ranges::SOLAR_WP);
    check_range(&mut errors, "generation.sun_hours", g.sun_hours, ranges::SUN_HOURS);
    check_range(
        &mut errors,
        "generation.alternator_current_a",
        g.alternator_current_a,
        ranges::CHARGE_CURRENT_A,
    );
    check_range(
        &mut errors,
        "generation.drive_hours",
        g.drive_hours,
        ranges::DRIVE_HOURS,
    );
    errors
}

fn check_range(
    errors: &mut Vec<ConfigError>,
    field: &str,
    value: f64,
    range: RangeInclusive<f64>,
) {
    if !range.contains(&value) {
        errors.push(ConfigError {
            field: field.to_string(),
            message: format!("must be in [{}, {}], got {value}", range.start(), range.end()),
        });
    }
}
