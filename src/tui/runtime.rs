//! TUI application state: one planner session plus editing cursors.

use std::ops::RangeInclusive;

use crate::catalog::{DEVICE_PRESETS, INSULATION_CLASSES, SUN_HOURS};
use crate::config::{PlannerConfig, ranges};
use crate::error::DomainError;
use crate::formulas::panel_wp_from_roof_area;
use crate::session::{Evaluation, InsulationLayer, PlannerInputs, Session};

/// Editable input rows, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    Width,
    Height,
    OutsideTemp,
    InsideTemp,
    Insulation,
    RoofArea,
    Destination,
    AlternatorCurrent,
    DriveHours,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Length,
        Field::Width,
        Field::Height,
        Field::OutsideTemp,
        Field::InsideTemp,
        Field::Insulation,
        Field::RoofArea,
        Field::Destination,
        Field::AlternatorCurrent,
        Field::DriveHours,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Length => "Cabin length",
            Field::Width => "Cabin width",
            Field::Height => "Cabin height",
            Field::OutsideTemp => "Outside",
            Field::InsideTemp => "Inside",
            Field::Insulation => "Insulation",
            Field::RoofArea => "Free roof area",
            Field::Destination => "Destination",
            Field::AlternatorCurrent => "Alternator current",
            Field::DriveHours => "Driving per day",
        }
    }

    /// Step and accepted range for numeric rows.
    fn range(self) -> Option<(f64, RangeInclusive<f64>)> {
        match self {
            Field::Length => Some((0.1, ranges::CABIN_LENGTH_M)),
            Field::Width => Some((0.1, ranges::CABIN_WIDTH_M)),
            Field::Height => Some((0.1, ranges::CABIN_HEIGHT_M)),
            Field::OutsideTemp => Some((1.0, ranges::OUTSIDE_TEMP_C)),
            Field::InsideTemp => Some((1.0, ranges::INSIDE_TEMP_C)),
            Field::RoofArea => Some((0.5, ranges::ROOF_AREA_M2)),
            Field::AlternatorCurrent => Some((5.0, ranges::CHARGE_CURRENT_A)),
            Field::DriveHours => Some((0.5, ranges::DRIVE_HOURS)),
            Field::Insulation | Field::Destination => None,
        }
    }
}

/// TUI application state.
pub struct App {
    session: Session,
    /// Last recompute result; refreshed after every mutation.
    evaluation: Result<Evaluation, DomainError>,
    /// Free roof area backing `generation.solar_wp`.
    pub roof_area_m2: f64,
    /// Index into `INSULATION_CLASSES`.
    pub insulation_idx: usize,
    /// Index into `SUN_HOURS`.
    pub destination_idx: usize,
    /// Index into `Field::ALL`.
    pub field_idx: usize,
    /// Index into `DEVICE_PRESETS` offered by the add key.
    pub preset_cursor: usize,
    /// Selected ledger row.
    pub device_idx: usize,
    /// Last add rejection, shown in the footer.
    pub warning: Option<String>,
    /// Whether the user has requested quit.
    pub quit: bool,
    /// Name of the active planner preset.
    pub preset_name: String,
}

impl App {
    /// Creates a new app from a preset name, falling back to `weekender`.
    pub fn new(preset: &str) -> Self {
        let (name, config) = match PlannerConfig::from_preset(preset) {
            Ok(cfg) => (preset, cfg),
            Err(_) => ("weekender", PlannerConfig::weekender()),
        };
        let session = config.into_session().unwrap_or_else(|_| {
            Session::new(PlannerConfig::weekender().planner_inputs().unwrap_or(FALLBACK_INPUTS))
        });

        let insulation_idx = INSULATION_CLASSES
            .iter()
            .position(|c| c.key == config.climate.insulation)
            .unwrap_or(0);
        let destination_idx = SUN_HOURS
            .iter()
            .position(|p| p.label() == config.solar.destination)
            .unwrap_or(0);

        let evaluation = session.recompute();
        Self {
            session,
            evaluation,
            roof_area_m2: config.solar.roof_area_m2,
            insulation_idx,
            destination_idx,
            field_idx: 0,
            preset_cursor: 0,
            device_idx: 0,
            warning: None,
            quit: false,
            preset_name: name.to_string(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn evaluation(&self) -> Result<&Evaluation, &DomainError> {
        self.evaluation.as_ref()
    }

    pub fn selected_field(&self) -> Field {
        Field::ALL[self.field_idx]
    }

    pub fn next_field(&mut self) {
        self.field_idx = (self.field_idx + 1) % Field::ALL.len();
    }

    pub fn prev_field(&mut self) {
        self.field_idx = (self.field_idx + Field::ALL.len() - 1) % Field::ALL.len();
    }

    /// Steps the selected input up (`direction > 0`) or down and recomputes.
    pub fn adjust(&mut self, direction: i8) {
        let field = self.selected_field();
        let sign = f64::from(direction.signum());

        match field.range() {
            Some((step, range)) => {
                let value = self.field_value(field);
                let stepped = ((value + sign * step) / step).round() * step;
                self.set_field_value(field, stepped.clamp(*range.start(), *range.end()));
            }
            None => {
                let (idx, len) = match field {
                    Field::Insulation => (&mut self.insulation_idx, INSULATION_CLASSES.len()),
                    _ => (&mut self.destination_idx, SUN_HOURS.len()),
                };
                *idx = if direction > 0 {
                    (*idx + 1) % len
                } else {
                    (*idx + len - 1) % len
                };
                self.sync_catalog_inputs();
            }
        }
        self.recompute();
    }

    /// Current numeric value of a row (catalog rows report their index).
    pub fn field_value(&self, field: Field) -> f64 {
        let i = self.session.inputs();
        match field {
            Field::Length => i.cabin.length_m,
            Field::Width => i.cabin.width_m,
            Field::Height => i.cabin.height_m,
            Field::OutsideTemp => i.outside_temp_c,
            Field::InsideTemp => i.inside_temp_c,
            Field::RoofArea => self.roof_area_m2,
            Field::AlternatorCurrent => i.generation.alternator_current_a,
            Field::DriveHours => i.generation.drive_hours,
            Field::Insulation => self.insulation_idx as f64,
            Field::Destination => self.destination_idx as f64,
        }
    }

    /// Human-readable value of a row.
    pub fn field_display(&self, field: Field) -> String {
        match field {
            Field::Length | Field::Width | Field::Height => {
                format!("{:.1} m", self.field_value(field))
            }
            Field::OutsideTemp | Field::InsideTemp => {
                format!("{:.0} °C", self.field_value(field))
            }
            Field::RoofArea => format!(
                "{:.1} m² ({:.0} Wp)",
                self.roof_area_m2,
                self.session.inputs().generation.solar_wp
            ),
            Field::AlternatorCurrent => format!("{:.0} A", self.field_value(field)),
            Field::DriveHours => format!("{:.1} h", self.field_value(field)),
            Field::Insulation => INSULATION_CLASSES[self.insulation_idx].name.to_string(),
            Field::Destination => {
                let p = &SUN_HOURS[self.destination_idx];
                format!("{p} ({:.1} h sun)", p.sun_hours_per_day)
            }
        }
    }

    fn set_field_value(&mut self, field: Field, value: f64) {
        let i = self.session.inputs_mut();
        match field {
            Field::Length => i.cabin.length_m = value,
            Field::Width => i.cabin.width_m = value,
            Field::Height => i.cabin.height_m = value,
            Field::OutsideTemp => i.outside_temp_c = value,
            Field::InsideTemp => i.inside_temp_c = value,
            Field::AlternatorCurrent => i.generation.alternator_current_a = value,
            Field::DriveHours => i.generation.drive_hours = value,
            Field::RoofArea => {
                self.roof_area_m2 = value;
                i.generation.solar_wp = panel_wp_from_roof_area(value);
            }
            Field::Insulation | Field::Destination => {}
        }
    }

    fn sync_catalog_inputs(&mut self) {
        let class = &INSULATION_CLASSES[self.insulation_idx];
        let sun = &SUN_HOURS[self.destination_idx];
        let i = self.session.inputs_mut();
        i.insulation = InsulationLayer {
            thickness_mm: class.thickness_mm,
            lambda_w_per_mk: class.lambda_w_per_mk,
        };
        i.generation.sun_hours = sun.sun_hours_per_day;
    }

    /// Cycles the device preset offered by [`add_preset`](Self::add_preset).
    pub fn next_preset(&mut self) {
        self.preset_cursor = (self.preset_cursor + 1) % DEVICE_PRESETS.len();
    }

    /// Adds the preset under the cursor to the ledger.
    pub fn add_preset(&mut self) {
        let device = DEVICE_PRESETS[self.preset_cursor].to_device();
        self.warning = self
            .session
            .ledger_mut()
            .push(device)
            .err()
            .map(|e| e.to_string());
        self.device_idx = self.session.ledger().len().saturating_sub(1);
        self.recompute();
    }

    pub fn select_next_device(&mut self) {
        let len = self.session.ledger().len();
        if len > 0 {
            self.device_idx = (self.device_idx + 1).min(len - 1);
        }
    }

    pub fn select_prev_device(&mut self) {
        self.device_idx = self.device_idx.saturating_sub(1);
    }

    /// Removes the selected ledger row.
    pub fn remove_selected(&mut self) {
        if self.session.ledger_mut().remove(self.device_idx).is_some() {
            let len = self.session.ledger().len();
            self.device_idx = self.device_idx.min(len.saturating_sub(1));
            self.recompute();
        }
    }

    /// Empties the ledger.
    pub fn clear_devices(&mut self) {
        self.session.ledger_mut().clear();
        self.device_idx = 0;
        self.recompute();
    }

    /// Replaces the session with a fresh one built from another preset.
    pub fn switch_preset(&mut self, name: &str) {
        if PlannerConfig::from_preset(name).is_ok() {
            *self = Self::new(name);
        }
    }

    fn recompute(&mut self) {
        self.evaluation = self.session.recompute();
    }
}

/// Used only if the built-in weekender preset ever fails validation.
const FALLBACK_INPUTS: PlannerInputs = PlannerInputs {
    cabin: crate::session::CabinDimensions {
        length_m: 4.2,
        width_m: 1.8,
        height_m: 1.8,
    },
    insulation: InsulationLayer {
        thickness_mm: 19.0,
        lambda_w_per_mk: 0.035,
    },
    outside_temp_c: -10.0,
    inside_temp_c: 20.0,
    generation: crate::balance::GenerationInputs {
        solar_wp: 700.0,
        sun_hours: 6.0,
        alternator_current_a: 30.0,
        drive_hours: 2.0,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_starts_with_preset_ledger() {
        let app = App::new("weekender");
        assert_eq!(app.session().ledger().len(), 4);
        assert!(app.evaluation().is_ok());
        assert_eq!(app.preset_name, "weekender");
    }

    #[test]
    fn unknown_preset_falls_back() {
        let app = App::new("nope");
        assert_eq!(app.preset_name, "weekender");
    }

    #[test]
    fn adjust_clamps_to_range() {
        let mut app = App::new("weekender");
        assert_eq!(app.selected_field(), Field::Length);
        for _ in 0..100 {
            app.adjust(1);
        }
        assert!((app.field_value(Field::Length) - 7.0).abs() < 1e-9);
        for _ in 0..100 {
            app.adjust(-1);
        }
        assert!((app.field_value(Field::Length) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn roof_area_drives_solar_wp() {
        let mut app = App::new("weekender");
        while app.selected_field() != Field::RoofArea {
            app.next_field();
        }
        app.adjust(1);
        assert_eq!(app.roof_area_m2, 4.5);
        assert_eq!(app.session().inputs().generation.solar_wp, 787.5);
    }

    #[test]
    fn cycling_destination_updates_sun_hours() {
        let mut app = App::new("weekender");
        while app.selected_field() != Field::Destination {
            app.prev_field();
        }
        let before = app.destination_idx;
        app.adjust(1);
        assert_eq!(app.destination_idx, (before + 1) % SUN_HOURS.len());
        assert_eq!(
            app.session().inputs().generation.sun_hours,
            SUN_HOURS[app.destination_idx].sun_hours_per_day
        );
    }

    #[test]
    fn add_remove_and_clear_recompute() {
        let mut app = App::new("weekender");
        let before = app.evaluation().unwrap().balance.total_consumption_wh;

        app.add_preset();
        assert_eq!(app.session().ledger().len(), 5);
        let after_add = app.evaluation().unwrap().balance.total_consumption_wh;
        assert!(after_add > before);

        app.remove_selected();
        assert_eq!(app.session().ledger().len(), 4);

        app.clear_devices();
        assert!(app.session().ledger().is_empty());
        assert!(app.evaluation().unwrap().balance.autarky_percent.is_none());
    }

    #[test]
    fn switch_preset_resets_state() {
        let mut app = App::new("weekender");
        app.clear_devices();
        app.switch_preset("off_grid_south");
        assert_eq!(app.preset_name, "off_grid_south");
        assert_eq!(app.session().ledger().len(), 6);
    }
}
