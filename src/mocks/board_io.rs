use std::fmt::Display;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::errors::Error;
use crate::io::{BoardIo, IoState, Port};
use crate::mocks::create_test_io_state;

/// Mock implementation for [`BoardIo`].
/// Uses [`create_test_io_state`] for the pin table; writes land in that table so
/// tests can assert on what reached the "hardware".
#[derive(Clone, Debug)]
pub struct MockBoardIo {
    pub state: Arc<RwLock<IoState>>,
}

impl Default for MockBoardIo {
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(create_test_io_state())),
        }
    }
}

impl Display for MockBoardIo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [pins={}]",
            self.get_io_name(),
            self.state.read().pins.len()
        )
    }
}

impl BoardIo for MockBoardIo {
    fn get_state(&self) -> &Arc<RwLock<IoState>> {
        &self.state
    }

    fn pin_from_port(&self, port: Port) -> Result<u8, Error> {
        // The mock board wires each port straight to the edge pin of the same number.
        let pin = match port {
            Port::P0 => 0,
            Port::P1 => 1,
            Port::P2 => 2,
            Port::P8 => 8,
            Port::P12 => 12,
            Port::P13 => 13,
            Port::P14 => 14,
            Port::P15 => 15,
            Port::P16 => 16,
        };
        Ok(pin)
    }

    fn enable_output(&mut self, pin: u8) -> Result<(), Error> {
        self.state.write().get_pin_mut(pin)?.enabled = true;
        Ok(())
    }

    fn analog_write(&mut self, pin: u8, duty: u16) -> Result<(), Error> {
        self.state.write().get_pin_mut(pin)?.value = duty;
        Ok(())
    }

    fn digital_write(&mut self, pin: u8, level: bool) -> Result<(), Error> {
        self.state.write().get_pin_mut(pin)?.value = u16::from(level);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_mapping() {
        let io = MockBoardIo::default();
        assert_eq!(io.pin_from_port(Port::P0).unwrap(), 0);
        assert_eq!(io.pin_from_port(Port::P16).unwrap(), 16);
    }

    #[test]
    fn test_enable_is_idempotent() {
        let mut io = MockBoardIo::default();
        io.enable_output(8).unwrap();
        io.enable_output(8).unwrap();
        assert!(io.state.read().get_pin(8).unwrap().enabled);
    }

    #[test]
    fn test_writes_reach_the_pin_table() {
        let mut io = MockBoardIo::default();
        io.analog_write(0, 716).unwrap();
        assert_eq!(io.state.read().get_pin(0).unwrap().value, 716);
        io.digital_write(0, true).unwrap();
        assert_eq!(io.state.read().get_pin(0).unwrap().value, 1);
    }

    #[test]
    fn test_unknown_pin_bails() {
        let mut io = MockBoardIo::default();
        assert!(io.enable_output(66).is_err());
        assert!(io.analog_write(66, 0).is_err());
        assert!(io.digital_write(66, false).is_err());
    }

    #[test]
    fn test_clones_share_the_pin_table() {
        let mut io = MockBoardIo::default();
        let clone = io.clone();
        io.analog_write(13, 512).unwrap();
        assert_eq!(clone.state.read().get_pin(13).unwrap().value, 512);
    }

    #[test]
    fn test_display_impl() {
        let io = MockBoardIo::default();
        assert_eq!(format!("{}", io), "MockBoardIo [pins=9]");
    }
}
