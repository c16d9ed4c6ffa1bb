//! Per-session planner state and the explicit recompute entry point.
//!
//! A [`Session`] owns its inputs and its [`DeviceLedger`]. Hosts call
//! [`Session::recompute`] after every mutation; nothing is recomputed
//! implicitly. A [`SessionStore`] keeps one session per key and never hands
//! out a ledger belonging to another key.

mod evaluation;
mod inputs;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::balance::EnergyBalance;
use crate::devices::{Device, DeviceLedger};
use crate::error::{DomainError, ValidationError};

pub use evaluation::{Evaluation, HeatingReport};
pub use inputs::{CabinDimensions, InsulationLayer, PlannerInputs};

/// Opaque session key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of one planning session.
#[derive(Debug, Clone)]
pub struct Session {
    inputs: PlannerInputs,
    ledger: DeviceLedger,
}

impl Session {
    /// Starts a session with an empty ledger.
    pub fn new(inputs: PlannerInputs) -> Self {
        Self {
            inputs,
            ledger: DeviceLedger::new(),
        }
    }

    /// Starts a session with a pre-filled ledger.
    pub fn with_ledger(inputs: PlannerInputs, ledger: DeviceLedger) -> Self {
        Self { inputs, ledger }
    }

    pub fn inputs(&self) -> &PlannerInputs {
        &self.inputs
    }

    pub fn set_inputs(&mut self, inputs: PlannerInputs) {
        self.inputs = inputs;
    }

    pub fn inputs_mut(&mut self) -> &mut PlannerInputs {
        &mut self.inputs
    }

    pub fn ledger(&self) -> &DeviceLedger {
        &self.ledger
    }

    /// Shorthand for `ledger_mut().add(..)`.
    ///
    /// # Errors
    ///
    /// See [`DeviceLedger::add`].
    pub fn add_device(
        &mut self,
        name: impl Into<String>,
        power_watts: f64,
        hours_per_day: f64,
    ) -> Result<&Device, ValidationError> {
        self.ledger.add(name, power_watts, hours_per_day)
    }

    pub fn ledger_mut(&mut self) -> &mut DeviceLedger {
        &mut self.ledger
    }

    /// Runs the formulas and the aggregator over the current state.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the insulation layer is degenerate.
    pub fn recompute(&self) -> Result<Evaluation, DomainError> {
        let heating = HeatingReport::compute(&self.inputs)?;
        let balance = EnergyBalance::compute(self.ledger.list(), &self.inputs.generation);
        debug!(
            heating_kw = heating.heating_kw,
            devices = self.ledger.len(),
            "recomputed"
        );
        Ok(Evaluation { heating, balance })
    }
}

/// Sessions keyed by [`SessionId`].
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionId, Session>,
    next_id: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new session and returns its key.
    pub fn create(&mut self, session: Session) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.sessions.insert(id, session);
        info!(%id, "session started");
        id
    }

    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.sessions.get_mut(&id)
    }

    /// Ends a session, discarding its ledger.
    pub fn end(&mut self, id: SessionId) -> Option<Session> {
        let ended = self.sessions.remove(&id);
        if ended.is_some() {
            info!(%id, "session ended");
        }
        ended
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::GenerationInputs;

    fn reference_inputs() -> PlannerInputs {
        PlannerInputs {
            cabin: CabinDimensions {
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
            generation: GenerationInputs {
                solar_wp: 700.0,
                sun_hours: 7.0,
                alternator_current_a: 30.0,
                drive_hours: 2.0,
            },
        }
    }

    #[test]
    fn recompute_reflects_ledger_mutations() {
        let mut session = Session::new(reference_inputs());
        let empty = session.recompute().expect("valid inputs");
        assert!(empty.balance.autarky_percent.is_none());

        session.add_device("Hob", 1500.0, 0.25).expect("valid");
        let one = session.recompute().expect("valid inputs");
        assert_eq!(one.balance.total_consumption_wh, 375.0);
        assert_eq!(one.balance.total_consumption_ah, 31.25);

        session.ledger_mut().clear();
        let cleared = session.recompute().expect("valid inputs");
        assert_eq!(cleared.balance.total_consumption_wh, 0.0);
    }

    #[test]
    fn recompute_heating_for_reference_cabin() {
        let session = Session::new(reference_inputs());
        let eval = session.recompute().expect("valid inputs");
        assert!((eval.heating.heating_kw - 1.695).abs() < 1e-3);
        assert_eq!(eval.heating.sizing.label(), "2 kW sufficient");
    }

    #[test]
    fn warm_day_displays_zero_heating() {
        let mut inputs = reference_inputs();
        inputs.outside_temp_c = 28.0;
        let eval = Session::new(inputs).recompute().expect("valid inputs");
        assert!(eval.heating.heating_kw < 0.0);
        assert_eq!(eval.heating.display_kw, 0.0);
    }

    #[test]
    fn degenerate_insulation_is_reported_not_raised() {
        let mut inputs = reference_inputs();
        inputs.insulation.thickness_mm = 0.0;
        let session = Session::new(inputs);
        assert!(matches!(
            session.recompute(),
            Err(DomainError::NonPositiveThickness { .. })
        ));
    }

    #[test]
    fn store_keeps_ledgers_apart() {
        let mut store = SessionStore::new();
        let a = store.create(Session::new(reference_inputs()));
        let b = store.create(Session::new(reference_inputs()));
        assert_ne!(a, b);

        store
            .get_mut(a)
            .expect("exists")
            .add_device("Fridge", 45.0, 8.0)
            .expect("valid");

        assert_eq!(store.get(a).map(|s| s.ledger().len()), Some(1));
        assert_eq!(store.get(b).map(|s| s.ledger().len()), Some(0));
    }

    #[test]
    fn ended_session_is_gone() {
        let mut store = SessionStore::new();
        let id = store.create(Session::new(reference_inputs()));
        assert!(store.end(id).is_some());
        assert!(store.get(id).is_none());
        assert!(store.end(id).is_none());
        assert!(store.is_empty());
    }
}
