use std::collections::HashMap;

/// Per-pin brightness cache: remembers the last percentage set on each pin.
///
/// Owned by the device driving the pins (not process-wide), so several independent
/// instances can coexist. Entries are created on first set, updated in place
/// afterwards, and never removed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct BrightnessStore {
    levels: HashMap<u8, u8>,
}

impl BrightnessStore {
    /// Records the brightness for `pin`, clamped to 0-100, and returns the stored value.
    pub fn set(&mut self, pin: u8, value: i32) -> u8 {
        let value = value.clamp(0, 100) as u8;
        self.levels.insert(pin, value);
        value
    }

    /// Returns the last recorded percentage for `pin`, or 0 if never set.
    pub fn get(&self, pin: u8) -> u8 {
        self.levels.get(&pin).copied().unwrap_or(0)
    }

    /// Returns the number of pins with a recorded brightness.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Indicates whether any pin has a recorded brightness.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
