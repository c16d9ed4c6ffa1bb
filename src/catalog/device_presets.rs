use serde::Serialize;

use crate::devices::Device;

/// A ready-made ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DevicePreset {
    /// Lookup key (snake_case, stable).
    pub key: &'static str,
    /// Label copied into the ledger.
    pub name: &'static str,
    pub power_watts: f64,
    pub hours_per_day: f64,
}

impl DevicePreset {
    /// Looks a preset up by key.
    pub fn find(key: &str) -> Option<&'static DevicePreset> {
        DEVICE_PRESETS.iter().find(|p| p.key == key)
    }

    /// Materializes the preset as a device value.
    pub fn to_device(&self) -> Device {
        Device::new(self.name, self.power_watts, self.hours_per_day)
    }
}

pub const DEVICE_PRESETS: &[DevicePreset] = &[
    DevicePreset {
        key: "compressor_fridge",
        name: "Compressor fridge",
        power_watts: 45.0,
        hours_per_day: 8.0,
    },
    DevicePreset {
        key: "led_lighting",
        name: "LED lighting",
        power_watts: 10.0,
        hours_per_day: 4.0,
    },
    DevicePreset {
        key: "water_pump",
        name: "Water pump",
        power_watts: 60.0,
        hours_per_day: 0.25,
    },
    DevicePreset {
        key: "roof_fan",
        name: "Roof fan",
        power_watts: 25.0,
        hours_per_day: 4.0,
    },
    DevicePreset {
        key: "diesel_heater",
        name: "Diesel heater (fan and glow plug)",
        power_watts: 30.0,
        hours_per_day: 6.0,
    },
    DevicePreset {
        key: "laptop",
        name: "Laptop",
        power_watts: 65.0,
        hours_per_day: 3.0,
    },
    DevicePreset {
        key: "phone",
        name: "Phone charging",
        power_watts: 15.0,
        hours_per_day: 2.0,
    },
    DevicePreset {
        key: "satellite_internet",
        name: "Satellite internet",
        power_watts: 50.0,
        hours_per_day: 4.0,
    },
    DevicePreset {
        key: "induction_hob",
        name: "Induction hob",
        power_watts: 1500.0,
        hours_per_day: 0.25,
    },
    DevicePreset {
        key: "coffee_machine",
        name: "Coffee machine",
        power_watts: 1200.0,
        hours_per_day: 0.1,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::DeviceLedger;

    #[test]
    fn keys_are_unique() {
        for (i, a) in DEVICE_PRESETS.iter().enumerate() {
            for b in &DEVICE_PRESETS[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn every_preset_passes_ledger_validation() {
        let mut ledger = DeviceLedger::new();
        for preset in DEVICE_PRESETS {
            assert!(ledger.push(preset.to_device()).is_ok(), "{}", preset.key);
        }
        assert_eq!(ledger.len(), DEVICE_PRESETS.len());
    }

    #[test]
    fn find_by_key() {
        let hob = DevicePreset::find("induction_hob").expect("known key");
        assert_eq!(hob.to_device().daily_energy_wh(), 375.0);
        assert!(DevicePreset::find("toaster").is_none());
    }
}
