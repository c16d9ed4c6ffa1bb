use serde::Serialize;

use crate::error::DomainError;
use crate::formulas::u_value;

/// An insulation material at a given thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InsulationClass {
    pub key: &'static str,
    pub name: &'static str,
    pub thickness_mm: f64,
    /// Thermal conductivity λ in W/(m·K).
    pub lambda_w_per_mk: f64,
}

impl InsulationClass {
    pub fn find(key: &str) -> Option<&'static InsulationClass> {
        INSULATION_CLASSES.iter().find(|c| c.key == key)
    }

    /// U-value of this layer in W/(m²·K).
    ///
    /// # Errors
    ///
    /// Never fails for catalog entries; propagates [`DomainError`] for
    /// hand-built classes with degenerate thickness.
    pub fn u_value(&self) -> Result<f64, DomainError> {
        u_value(self.thickness_mm, self.lambda_w_per_mk)
    }
}

pub const INSULATION_CLASSES: &[InsulationClass] = &[
    InsulationClass {
        key: "elastomer_10",
        name: "Elastomer foam 10 mm",
        thickness_mm: 10.0,
        lambda_w_per_mk: 0.035,
    },
    InsulationClass {
        key: "elastomer_19",
        name: "Elastomer foam 19 mm",
        thickness_mm: 19.0,
        lambda_w_per_mk: 0.035,
    },
    InsulationClass {
        key: "elastomer_32",
        name: "Elastomer foam 32 mm",
        thickness_mm: 32.0,
        lambda_w_per_mk: 0.035,
    },
    InsulationClass {
        key: "xps_30",
        name: "XPS board 30 mm",
        thickness_mm: 30.0,
        lambda_w_per_mk: 0.034,
    },
    InsulationClass {
        key: "pir_40",
        name: "PIR board 40 mm",
        thickness_mm: 40.0,
        lambda_w_per_mk: 0.023,
    },
    InsulationClass {
        key: "sheep_wool_50",
        name: "Sheep wool 50 mm",
        thickness_mm: 50.0,
        lambda_w_per_mk: 0.040,
    },
    InsulationClass {
        key: "cork_20",
        name: "Cork 20 mm",
        thickness_mm: 20.0,
        lambda_w_per_mk: 0.042,
    },
];
