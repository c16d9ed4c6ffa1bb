use std::fmt;

use serde::Serialize;

/// Travel season of a sun-hour profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    YearRound,
}

impl Season {
    pub fn label(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
            Self::YearRound => "Year-round",
        }
    }
}

/// Average usable sun hours per day for a destination in a season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunHoursProfile {
    pub region: &'static str,
    pub season: Season,
    pub sun_hours_per_day: f64,
}

impl SunHoursProfile {
    /// Looks a profile up by region and season (region match is ASCII
    /// case-insensitive).
    pub fn find(region: &str, season: Season) -> Option<&'static SunHoursProfile> {
        SUN_HOURS
            .iter()
            .find(|p| p.season == season && p.region.eq_ignore_ascii_case(region))
    }

    /// Looks a profile up by its display label, e.g. `"Spain - Summer"`.
    pub fn find_by_label(label: &str) -> Option<&'static SunHoursProfile> {
        let (region, season) = label.split_once(" - ")?;
        SUN_HOURS.iter().find(|p| {
            p.region.eq_ignore_ascii_case(region.trim())
                && p.season.label().eq_ignore_ascii_case(season.trim())
        })
    }

    /// Display label, `"<region> - <season>"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SunHoursProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.region, self.season.label())
    }
}

pub const SUN_HOURS: &[SunHoursProfile] = &[
    SunHoursProfile {
        region: "Germany",
        season: Season::Summer,
        sun_hours_per_day: 6.0,
    },
    SunHoursProfile {
        region: "Germany",
        season: Season::Spring,
        sun_hours_per_day: 4.5,
    },
    SunHoursProfile {
        region: "Germany",
        season: Season::Autumn,
        sun_hours_per_day: 3.5,
    },
    SunHoursProfile {
        region: "Germany",
        season: Season::Winter,
        sun_hours_per_day: 1.8,
    },
    SunHoursProfile {
        region: "Spain",
        season: Season::Summer,
        sun_hours_per_day: 9.0,
    },
    SunHoursProfile {
        region: "Spain",
        season: Season::Spring,
        sun_hours_per_day: 7.5,
    },
    SunHoursProfile {
        region: "Spain",
        season: Season::Autumn,
        sun_hours_per_day: 6.5,
    },
    SunHoursProfile {
        region: "Spain",
        season: Season::Winter,
        sun_hours_per_day: 5.5,
    },
    SunHoursProfile {
        region: "Portugal",
        season: Season::Summer,
        sun_hours_per_day: 8.5,
    },
    SunHoursProfile {
        region: "Portugal",
        season: Season::Spring,
        sun_hours_per_day: 7.0,
    },
    SunHoursProfile {
        region: "Portugal",
        season: Season::Autumn,
        sun_hours_per_day: 6.0,
    },
    SunHoursProfile {
        region: "Portugal",
        season: Season::Winter,
        sun_hours_per_day: 5.0,
    },
    SunHoursProfile {
        region: "Italy",
        season: Season::Summer,
        sun_hours_per_day: 8.5,
    },
    SunHoursProfile {
        region: "Italy",
        season: Season::Spring,
        sun_hours_per_day: 6.5,
    },
    SunHoursProfile {
        region: "Italy",
        season: Season::Autumn,
        sun_hours_per_day: 5.5,
    },
    SunHoursProfile {
        region: "Italy",
        season: Season::Winter,
        sun_hours_per_day: 4.0,
    },
    SunHoursProfile {
        region: "Greece",
        season: Season::Summer,
        sun_hours_per_day: 10.0,
    },
    SunHoursProfile {
        region: "Greece",
        season: Season::Spring,
        sun_hours_per_day: 8.0,
    },
    SunHoursProfile {
        region: "Greece",
        season: Season::Autumn,
        sun_hours_per_day: 7.0,
    },
    SunHoursProfile {
        region: "Greece",
        season: Season::Winter,
        sun_hours_per_day: 5.0,
    },
    SunHoursProfile {
        region: "France",
        season: Season::Summer,
        sun_hours_per_day: 8.0,
    },
    SunHoursProfile {
        region: "France",
        season: Season::Spring,
        sun_hours_per_day: 6.0,
    },
    SunHoursProfile {
        region: "France",
        season: Season::Autumn,
        sun_hours_per_day: 5.0,
    },
    SunHoursProfile {
        region: "France",
        season: Season::Winter,
        sun_hours_per_day: 3.0,
    },
    SunHoursProfile {
        region: "Netherlands",
        season: Season::Summer,
        sun_hours_per_day: 6.5,
    },
    SunHoursProfile {
        region: "Netherlands",
        season: Season::Spring,
        sun_hours_per_day: 4.5,
    },
    SunHoursProfile {
        region: "Netherlands",
        season: Season::Autumn,
        sun_hours_per_day: 3.0,
    },
    SunHoursProfile {
        region: "Netherlands",
        season: Season::Winter,
        sun_hours_per_day: 1.5,
    },
    SunHoursProfile {
        region: "Austria",
        season: Season::Summer,
        sun_hours_per_day: 7.0,
    },
    SunHoursProfile {
        region: "Austria",
        season: Season::Spring,
        sun_hours_per_day: 5.0,
    },
    SunHoursProfile {
        region: "Austria",
        season: Season::Autumn,
        sun_hours_per_day: 4.0,
    },
    SunHoursProfile {
        region: "Austria",
        season: Season::Winter,
        sun_hours_per_day: 2.5,
    },
    SunHoursProfile {
        region: "Switzerland",
        season: Season::Summer,
        sun_hours_per_day: 7.0,
    },
    SunHoursProfile {
        region: "Switzerland",
        season: Season::Spring,
        sun_hours_per_day: 5.0,
    },
    SunHoursProfile {
        region: "Switzerland",
        season: Season::Autumn,
        sun_hours_per_day: 4.0,
    },
    SunHoursProfile {
        region: "Switzerland",
        season: Season::Winter,
        sun_hours_per_day: 2.0,
    },
    SunHoursProfile {
        region: "Canary Islands",
        season: Season::YearRound,
        sun_hours_per_day: 6.2,
    },
    SunHoursProfile {
        region: "Mallorca",
        season: Season::Summer,
        sun_hours_per_day: 9.5,
    },
    SunHoursProfile {
        region: "Malta",
        season: Season::Summer,
        sun_hours_per_day: 10.5,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_every_destination() {
        assert_eq!(SUN_HOURS.len(), 39);
        assert!(SUN_HOURS.iter().all(|p| p.sun_hours_per_day >= 0.0));
    }

    #[test]
    fn lookup_by_region_and_season() {
        let p = SunHoursProfile::find("spain", Season::Winter).expect("listed");
        assert_eq!(p.sun_hours_per_day, 5.5);
        assert!(SunHoursProfile::find("Malta", Season::Winter).is_none());
    }

    #[test]
    fn label_round_trips_through_lookup() {
        for p in SUN_HOURS {
            let found = SunHoursProfile::find_by_label(&p.label());
            assert_eq!(found, Some(p));
        }
    }

    #[test]
    fn every_profile_keeps_its_published_value() {
        use Season::*;
        let expected = [
            ("Germany", [6.0, 4.5, 3.5, 1.8]),
            ("Spain", [9.0, 7.5, 6.5, 5.5]),
            ("Portugal", [8.5, 7.0, 6.0, 5.0]),
            ("Italy", [8.5, 6.5, 5.5, 4.0]),
            ("Greece", [10.0, 8.0, 7.0, 5.0]),
            ("France", [8.0, 6.0, 5.0, 3.0]),
            ("Netherlands", [6.5, 4.5, 3.0, 1.5]),
            ("Austria", [7.0, 5.0, 4.0, 2.5]),
            ("Switzerland", [7.0, 5.0, 4.0, 2.0]),
        ];
        let mut checked = 0;
        for (region, hours) in expected {
            for (season, h) in [Summer, Spring, Autumn, Winter].into_iter().zip(hours) {
                let p = SunHoursProfile::find(region, season).expect("listed");
                assert_eq!(p.sun_hours_per_day, h, "{p}");
                checked += 1;
            }
        }
        for (region, season, h) in [
            ("Canary Islands", YearRound, 6.2),
            ("Mallorca", Summer, 9.5),
            ("Malta", Summer, 10.5),
        ] {
            let p = SunHoursProfile::find(region, season).expect("listed");
            assert_eq!(p.sun_hours_per_day, h, "{p}");
            checked += 1;
        }
        assert_eq!(checked, SUN_HOURS.len());
    }

    #[test]
    fn canaries_are_year_round() {
        let p = SunHoursProfile::find_by_label("Canary Islands - Year-round").expect("listed");
        assert_eq!(p.sun_hours_per_day, 6.2);
    }
}
