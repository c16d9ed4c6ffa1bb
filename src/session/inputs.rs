use serde::{Deserialize, Serialize};

use crate::balance::GenerationInputs;

/// Interior box dimensions of the van in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CabinDimensions {
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
}

/// Insulation layer as used by the heat-loss calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsulationLayer {
    pub thickness_mm: f64,
    pub lambda_w_per_mk: f64,
}

/// Every non-ledger value a recompute pass needs, already resolved from
/// catalog keys into numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerInputs {
    pub cabin: CabinDimensions,
    pub insulation: InsulationLayer,
    pub outside_temp_c: f64,
    pub inside_temp_c: f64,
    pub generation: GenerationInputs,
}

impl PlannerInputs {
    /// Interior minus exterior temperature in K.
    pub fn delta_t_kelvin(&self) -> f64 {
        self.inside_temp_c - self.outside_temp_c
    }
}
