//! Shared test fixtures for integration tests.
#![allow(dead_code)]

use van_werkstatt::balance::GenerationInputs;
use van_werkstatt::devices::DeviceLedger;
use van_werkstatt::session::{CabinDimensions, InsulationLayer, PlannerInputs, Session};

/// Reference van: 4.2 × 1.8 × 1.8 m, 19 mm elastomer, -10 °C outside,
/// 20 °C inside, 700 Wp under 6 sun hours, 30 A alternator for 2 h.
pub fn reference_inputs() -> PlannerInputs {
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
            sun_hours: 6.0,
            alternator_current_a: 30.0,
            drive_hours: 2.0,
        },
    }
}

/// Fridge, lights and a hob: 360 + 40 + 375 = 775 Wh/day.
pub fn reference_ledger() -> DeviceLedger {
    let mut ledger = DeviceLedger::new();
    ledger.add("Fridge", 45.0, 8.0).unwrap();
    ledger.add("Lights", 10.0, 4.0).unwrap();
    ledger.add("Induction hob", 1500.0, 0.25).unwrap();
    ledger
}

/// Session over [`reference_inputs`] and [`reference_ledger`].
pub fn reference_session() -> Session {
    Session::with_ledger(reference_inputs(), reference_ledger())
}

/// Asserts `actual` is within `tol` of `expected`.
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}
