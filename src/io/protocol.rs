//! Defines the seam through which pin operations reach the actual board.

use std::any::type_name;
use std::fmt::{Debug, Display};
use std::sync::Arc;

use dyn_clone::DynClone;
use parking_lot::RwLock;

use crate::errors::*;
use crate::io::{IoState, Port};

// Makes a Box<dyn BoardIo> clone (used for Board cloning).
dyn_clone::clone_trait_object!(BoardIo);

/// Defines the trait all board I/O backends must implement.
///
/// The implementation is owned by the board base module: this crate only consumes it
/// (and provides [`MockBoardIo`](crate::mocks::MockBoardIo) for tests).
pub trait BoardIo: DynClone + Send + Sync + Debug + Display {
    // ########################################
    // Inner data related functions

    fn get_state(&self) -> &Arc<RwLock<IoState>>;

    /// Returns the backend name (used for Display only)
    fn get_io_name(&self) -> &'static str {
        type_name::<Self>().split("::").last().unwrap()
    }

    // ########################################
    // Port resolution

    /// Resolve the named `port` to the pin it is wired to.
    ///
    /// # Errors
    /// * `UnknownPort` - The board does not expose this port.
    fn pin_from_port(&self, port: Port) -> Result<u8, Error>;

    // ########################################
    // Write on pins

    /// Configure the `pin` for output use. Idempotent.
    fn enable_output(&mut self, pin: u8) -> Result<(), Error>;

    /// Write the `duty` cycle value (0-1023) to the PWM `pin`.
    fn analog_write(&mut self, pin: u8, duty: u16) -> Result<(), Error>;

    /// Write the digital `level` to the `pin`.
    fn digital_write(&mut self, pin: u8, level: bool) -> Result<(), Error>;
}
