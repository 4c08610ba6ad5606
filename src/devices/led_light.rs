use std::fmt::{Display, Formatter};

use log::trace;

use crate::devices::BrightnessStore;
use crate::errors::Error;
use crate::hardware::Board;
use crate::io::{BoardIo, PinSelector};
use crate::utils::scale::percent_to_duty;

/// Drives LED lights attached to the output pins of a [`Board`].
///
/// Each operation addresses a pin either directly or through a named board
/// [`Port`](crate::io::Port). The last brightness set on each pin is cached so
/// relative changes can build on it; a pin that was never set reads as 0%.
#[derive(Clone, Debug)]
pub struct LedLight {
    /// The I/O backend used by the board the LEDs are attached to.
    io: Box<dyn BoardIo>,
    /// Per-pin cache of the last brightness percentage set.
    brightness: BrightnessStore,
}

impl LedLight {
    /// Creates an instance of a [`LedLight`] attached to a given board.
    pub fn new(board: &Board) -> Self {
        Self {
            io: board.get_board_io(),
            brightness: BrightnessStore::default(),
        }
    }

    /// Initializes an LED light: enables the pin for output and sets its brightness to 0%.
    ///
    /// # Parameters
    /// * `selector`: the pin the LED is wired to, as a raw id or a named port.
    ///
    /// # Returns
    /// The resolved pin id.
    ///
    /// # Errors
    /// * `UnknownPort`: the board does not expose the given port.
    /// * `UnknownPin`: the pin does not exist on the board.
    pub fn init<T: Into<PinSelector>>(&mut self, selector: T) -> Result<u8, Error> {
        let pin = self.resolve(selector.into())?;
        self.io.enable_output(pin)?;
        self.apply(pin, 0)?;
        trace!("LED initialized on pin {}", pin);
        Ok(pin)
    }

    /// Turns the LED light on (100% brightness).
    pub fn turn_on<T: Into<PinSelector>>(&mut self, selector: T) -> Result<(), Error> {
        let pin = self.resolve(selector.into())?;
        self.io.enable_output(pin)?;
        self.apply(pin, 100)?;
        Ok(())
    }

    /// Turns the LED light off (0% brightness).
    pub fn turn_off<T: Into<PinSelector>>(&mut self, selector: T) -> Result<(), Error> {
        let pin = self.resolve(selector.into())?;
        self.io.enable_output(pin)?;
        self.apply(pin, 0)?;
        Ok(())
    }

    /// Sets the LED brightness to `value` percent of the max. Values above 100 saturate.
    ///
    /// # Returns
    /// The brightness actually stored (after clamping).
    pub fn set_brightness<T: Into<PinSelector>>(
        &mut self,
        selector: T,
        value: u8,
    ) -> Result<u8, Error> {
        let pin = self.resolve(selector.into())?;
        self.apply(pin, value as i32)
    }

    /// Changes the LED brightness by `step` percent (which may be negative),
    /// relative to the last brightness set on the pin. The result is clamped to 0-100.
    ///
    /// # Returns
    /// The brightness actually stored (after clamping).
    pub fn change_brightness<T: Into<PinSelector>>(
        &mut self,
        selector: T,
        step: i32,
    ) -> Result<u8, Error> {
        let pin = self.resolve(selector.into())?;
        let current = self.brightness.get(pin) as i32;
        self.apply(pin, current.saturating_add(step))
    }

    /// Writes a raw digital `level` to the LED pin.
    ///
    /// The equivalent brightness (0% or 100%) is recorded in the cache so
    /// [`Self::brightness()`] stays consistent with the pin after a raw write.
    pub fn write_digital<T: Into<PinSelector>>(
        &mut self,
        selector: T,
        level: bool,
    ) -> Result<(), Error> {
        let pin = self.resolve(selector.into())?;
        self.io.enable_output(pin)?;
        self.io.digital_write(pin, level)?;
        self.brightness.set(pin, if level { 100 } else { 0 });
        Ok(())
    }

    /// Returns the last brightness percentage set on the LED pin, or 0 if never set.
    /// Pure lookup: nothing is written to the pin.
    pub fn brightness<T: Into<PinSelector>>(&self, selector: T) -> Result<u8, Error> {
        let pin = self.resolve(selector.into())?;
        Ok(self.brightness.get(pin))
    }

    // ########################################
    // Internals.

    /// Resolves a selector to the pin id, delegating ports to the board base module.
    fn resolve(&self, selector: PinSelector) -> Result<u8, Error> {
        match selector {
            PinSelector::Pin(pin) => Ok(pin),
            PinSelector::Port(port) => self.io.pin_from_port(port),
        }
    }

    /// Writes the duty value matching the clamped brightness out to `pin`, then records it.
    /// The cache is only updated once the write succeeded, so it never claims a
    /// brightness the pin did not receive.
    fn apply(&mut self, pin: u8, value: i32) -> Result<u8, Error> {
        let percent = value.clamp(0, 100) as u8;
        let duty = percent_to_duty(percent);
        self.io.analog_write(pin, duty)?;
        let stored = self.brightness.set(pin, percent as i32);
        trace!("LED pin {} set to {}% (duty {})", pin, stored, duty);
        Ok(stored)
    }
}

impl Display for LedLight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LedLight ({}) [pins={}]", self.io, self.brightness.len())
    }
}
