use serde::Serialize;
use tracing::{debug, warn};

use super::types::Device;
use crate::error::ValidationError;

/// Ordered list of devices belonging to one planning session.
///
/// Entries are kept in insertion order and are never edited in place; an
/// edit is a [`remove`](Self::remove) followed by an [`add`](Self::add).
///
/// # Examples
///
/// ```
/// use van_werkstatt::devices::DeviceLedger;
///
/// let mut ledger = DeviceLedger::new();
/// ledger.add("Fridge", 45.0, 8.0).unwrap();
/// assert!(ledger.add("Broken", 0.0, 8.0).is_err());
/// assert_eq!(ledger.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DeviceLedger {
    devices: Vec<Device>,
}

impl DeviceLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a device.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if either value is non-finite, not
    /// strictly positive, or if `hours_per_day` exceeds 24. The ledger is
    /// unchanged in that case.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        power_watts: f64,
        hours_per_day: f64,
    ) -> Result<&Device, ValidationError> {
        let name = name.into();
        if let Err(e) = validate_entry(power_watts, hours_per_day) {
            warn!(%name, power_watts, hours_per_day, error = %e, "rejected device");
            return Err(e);
        }

        debug!(%name, power_watts, hours_per_day, "device added");
        self.devices
            .push(Device::new(name, power_watts, hours_per_day));
        let last = self.devices.len() - 1;
        Ok(&self.devices[last])
    }

    /// Validates and appends an existing device value.
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn push(&mut self, device: Device) -> Result<&Device, ValidationError> {
        self.add(device.name, device.power_watts, device.hours_per_day)
    }

    /// Removes the entry at `index`, returning it if it existed.
    pub fn remove(&mut self, index: usize) -> Option<Device> {
        if index >= self.devices.len() {
            return None;
        }
        let removed = self.devices.remove(index);
        debug!(index, name = %removed.name, "device removed");
        Some(removed)
    }

    /// Drops every entry. Irreversible.
    pub fn clear(&mut self) {
        debug!(count = self.devices.len(), "ledger cleared");
        self.devices.clear();
    }

    /// Read-only view of the entries in insertion order.
    pub fn list(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

fn validate_entry(power_watts: f64, hours_per_day: f64) -> Result<(), ValidationError> {
    if !power_watts.is_finite() {
        return Err(ValidationError::NonFinite {
            what: "power_watts",
        });
    }
    if !hours_per_day.is_finite() {
        return Err(ValidationError::NonFinite {
            what: "hours_per_day",
        });
    }
    if power_watts <= 0.0 {
        return Err(ValidationError::NonPositivePower { power_watts });
    }
    if hours_per_day <= 0.0 {
        return Err(ValidationError::NonPositiveHours { hours_per_day });
    }
    if hours_per_day > 24.0 {
        return Err(ValidationError::HoursExceedDay { hours_per_day });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_preserves_insertion_order_and_values() {
        let mut ledger = DeviceLedger::new();
        ledger.add("Fridge", 45.0, 8.0).expect("valid");
        ledger.add("Lights", 10.0, 4.0).expect("valid");
        ledger.add("Fridge", 45.0, 8.0).expect("duplicate names allowed");

        let names: Vec<&str> = ledger.list().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Fridge", "Lights", "Fridge"]);
        assert_eq!(ledger.list()[1].power_watts, 10.0);
        assert_eq!(ledger.list()[1].hours_per_day, 4.0);
    }

    #[test]
    fn zero_power_is_rejected_without_side_effects() {
        let mut ledger = DeviceLedger::new();
        let err = ledger.add("Nothing", 0.0, 3.0).unwrap_err();
        assert_eq!(err, ValidationError::NonPositivePower { power_watts: 0.0 });
        assert!(ledger.is_empty());
    }

    #[test]
    fn zero_hours_is_rejected_without_side_effects() {
        let mut ledger = DeviceLedger::new();
        let err = ledger.add("Idle", 50.0, 0.0).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveHours { hours_per_day: 0.0 });
        assert!(ledger.is_empty());
    }

    #[test]
    fn more_than_a_day_is_rejected() {
        let mut ledger = DeviceLedger::new();
        assert!(matches!(
            ledger.add("Forever", 5.0, 25.0),
            Err(ValidationError::HoursExceedDay { .. })
        ));
        assert!(ledger.add("Always on", 5.0, 24.0).is_ok());
    }

    #[test]
    fn nan_is_rejected() {
        let mut ledger = DeviceLedger::new();
        assert!(matches!(
            ledger.add("Ghost", f64::NAN, 1.0),
            Err(ValidationError::NonFinite { what: "power_watts" })
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn clear_twice_leaves_ledger_empty() {
        let mut ledger = DeviceLedger::new();
        ledger.add("Pump", 60.0, 0.25).expect("valid");
        ledger.clear();
        assert!(ledger.list().is_empty());
        ledger.clear();
        assert!(ledger.list().is_empty());
    }

    #[test]
    fn remove_by_index() {
        let mut ledger = DeviceLedger::new();
        ledger.add("A", 1.0, 1.0).expect("valid");
        ledger.add("B", 2.0, 1.0).expect("valid");
        ledger.add("C", 3.0, 1.0).expect("valid");

        let removed = ledger.remove(1).expect("index in range");
        assert_eq!(removed.name, "B");
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.list()[1].name, "C");
        assert!(ledger.remove(5).is_none());
    }

    #[test]
    fn push_validates_like_add() {
        let mut ledger = DeviceLedger::new();
        assert!(ledger.push(Device::new("Bad", -1.0, 1.0)).is_err());
        assert!(ledger.push(Device::new("Good", 1.0, 1.0)).is_ok());
        assert_eq!(ledger.len(), 1);
    }
}
