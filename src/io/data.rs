use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use crate::errors::HardwareError::UnknownPin;
use crate::errors::*;

/// Represents the internal pin table that a [`BoardIo`](crate::io::BoardIo) handles.
///
/// This struct is hidden behind an `Arc<RwLock<IoState>>` to allow safe shared access
/// through cloned [`BoardIo`](crate::io::BoardIo) handles. It encapsulates the
/// board-side view of each pin this extension may drive.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IoState {
    /// All `PinState` instances, representing the board's pins.
    pub pins: HashMap<u8, PinState>,
}

impl IoState {
    /// Retrieves a reference to a pin by its id.
    ///
    /// # Errors
    /// * `UnknownPin` - An `Error` returned if the pin does not exist on the board.
    pub fn get_pin(&self, pin: u8) -> Result<&PinState, Error> {
        self.pins.get(&pin).ok_or(Error::from(UnknownPin { pin }))
    }

    /// Retrieves a mutable reference to a pin by its id.
    ///
    /// # Errors
    /// * `UnknownPin` - An `Error` returned if the pin does not exist on the board.
    pub fn get_pin_mut(&mut self, pin: u8) -> Result<&mut PinState, Error> {
        self.pins
            .get_mut(&pin)
            .ok_or(Error::from(UnknownPin { pin }))
    }
}

/// Represents the current state of a pin as the board sees it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct PinState {
    /// The pin id, which also corresponds to the index of the [`IoState::pins`] hashmap.
    pub id: u8,
    /// Whether the pin has been configured for output use.
    pub enabled: bool,
    /// Last raw value written to the pin: a 0-1023 duty value, or 0/1 for digital writes.
    pub value: u16,
}

// ########################################

/// Enumerates the named board ports the block UI exposes.
///
/// A port abstracts over the underlying pin; the mapping between the two is owned
/// by the board base module behind [`BoardIo::pin_from_port`](crate::io::BoardIo::pin_from_port).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Port {
    #[default]
    P0,
    P1,
    P2,
    P8,
    P12,
    P13,
    P14,
    P15,
    P16,
}

impl Display for Port {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ########################################

/// Defines a structure to receive either a raw pin id or a named port: 13 or 'P0' for instance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PinSelector {
    Pin(u8),
    Port(Port),
}

impl From<u8> for PinSelector {
    fn from(n: u8) -> Self {
        PinSelector::Pin(n)
    }
}

impl From<Port> for PinSelector {
    fn from(port: Port) -> Self {
        PinSelector::Port(port)
    }
}

impl Display for PinSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PinSelector::Pin(n) => write!(f, "{}", n),
            PinSelector::Port(port) => write!(f, "{}", port),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::io::{PinSelector, Port};
    use crate::mocks::create_test_io_state;

    #[test]
    fn test_get_pin_success() {
        assert_eq!(create_test_io_state().get_pin(13).unwrap().id, 13);
        assert_eq!(create_test_io_state().get_pin_mut(13).unwrap().id, 13);
    }

    #[test]
    fn test_get_pin_error() {
        assert!(create_test_io_state().get_pin(66).is_err());
        assert!(create_test_io_state().get_pin_mut(66).is_err());
    }

    #[test]
    fn test_mutate_pin() {
        let mut state = create_test_io_state();
        assert_eq!(state.get_pin(8).unwrap().value, 0);
        state.get_pin_mut(8).unwrap().value = 255;
        assert_eq!(state.get_pin(8).unwrap().value, 255);
    }

    #[test]
    fn test_selector_from() {
        let selector = PinSelector::from(42u8);
        assert_eq!(selector, PinSelector::Pin(42));
        let selector: PinSelector = 4.into();
        assert_eq!(selector, PinSelector::Pin(4));
        let selector = PinSelector::from(Port::P1);
        assert_eq!(selector, PinSelector::Port(Port::P1));
    }

    #[test]
    fn test_selector_display() {
        let selector = PinSelector::Pin(42);
        assert_eq!(selector.to_string(), "42");
        let selector = PinSelector::Port(Port::P16);
        assert_eq!(selector.to_string(), "P16");
    }

    #[test]
    fn test_port_display() {
        assert_eq!(format!("{}", Port::P0), "P0");
        assert_eq!(format!("{}", Port::default()), "P0");
    }
}
