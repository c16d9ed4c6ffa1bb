use std::fmt;

use serde::Serialize;

/// Ratio above which the van is fully self-sufficient (percent).
pub const FULLY_SELF_SUFFICIENT_ABOVE: f64 = 120.0;
/// Ratio above which coverage is excellent (percent).
pub const EXCELLENT_ABOVE: f64 = 90.0;
/// Ratio above which coverage is good (percent).
pub const GOOD_ABOVE: f64 = 70.0;

/// Classification of a day's energy balance.
///
/// Tiers are evaluated on the uncapped generation/consumption ratio, first
/// match wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum AutarkyStatus {
    /// Ratio > 120 %.
    FullySelfSufficient { surplus_wh: f64 },
    /// 90 % < ratio <= 120 %.
    Excellent { coverage_percent: f64 },
    /// 70 % < ratio <= 90 %.
    Good,
    /// Ratio <= 70 %.
    Insufficient { deficit_wh: f64 },
}

impl AutarkyStatus {
    /// Classifies a balance.
    ///
    /// # Arguments
    ///
    /// * `ratio_percent` - Uncapped `generation / consumption * 100`
    /// * `generation_wh` - Daily generation
    /// * `consumption_wh` - Daily consumption (> 0)
    pub fn classify(ratio_percent: f64, generation_wh: f64, consumption_wh: f64) -> Self {
        if ratio_percent > FULLY_SELF_SUFFICIENT_ABOVE {
            Self::FullySelfSufficient {
                surplus_wh: generation_wh - consumption_wh,
            }
        } else if ratio_percent > EXCELLENT_ABOVE {
            Self::Excellent {
                coverage_percent: ratio_percent.min(100.0),
            }
        } else if ratio_percent > GOOD_ABOVE {
            Self::Good
        } else {
            Self::Insufficient {
                deficit_wh: consumption_wh - generation_wh,
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullySelfSufficient { .. } => "fully self-sufficient",
            Self::Excellent { .. } => "excellent",
            Self::Good => "good, backup generator recommended for low-sun days",
            Self::Insufficient { .. } => "insufficient",
        }
    }
}

impl fmt::Display for AutarkyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullySelfSufficient { surplus_wh } => {
                write!(f, "{} (surplus +{surplus_wh:.0} Wh)", self.label())
            }
            Self::Excellent { coverage_percent } => {
                write!(f, "{} (reserve {coverage_percent:.0} %)", self.label())
            }
            Self::Good => f.write_str(self.label()),
            Self::Insufficient { deficit_wh } => {
                write!(f, "{} (deficit {deficit_wh:.0} Wh)", self.label())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_at_their_boundaries() {
        assert!(matches!(
            AutarkyStatus::classify(120.1, 1201.0, 1000.0),
            AutarkyStatus::FullySelfSufficient { .. }
        ));
        assert!(matches!(
            AutarkyStatus::classify(120.0, 1200.0, 1000.0),
            AutarkyStatus::Excellent { .. }
        ));
        assert!(matches!(
            AutarkyStatus::classify(90.0, 900.0, 1000.0),
            AutarkyStatus::Good
        ));
        assert!(matches!(
            AutarkyStatus::classify(70.0, 700.0, 1000.0),
            AutarkyStatus::Insufficient { .. }
        ));
    }

    #[test]
    fn surplus_and_deficit_amounts() {
        assert_eq!(
            AutarkyStatus::classify(150.0, 1500.0, 1000.0),
            AutarkyStatus::FullySelfSufficient { surplus_wh: 500.0 }
        );
        assert_eq!(
            AutarkyStatus::classify(40.0, 400.0, 1000.0),
            AutarkyStatus::Insufficient { deficit_wh: 600.0 }
        );
    }

    #[test]
    fn excellent_reports_capped_coverage() {
        assert_eq!(
            AutarkyStatus::classify(110.0, 1100.0, 1000.0),
            AutarkyStatus::Excellent {
                coverage_percent: 100.0
            }
        );
        assert_eq!(
            AutarkyStatus::classify(95.0, 950.0, 1000.0),
            AutarkyStatus::Excellent {
                coverage_percent: 95.0
            }
        );
    }

    #[test]
    fn display_includes_amounts() {
        let s = AutarkyStatus::Insufficient { deficit_wh: 250.4 };
        assert_eq!(s.to_string(), "insufficient (deficit 250 Wh)");
    }
}
