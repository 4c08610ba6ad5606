//! Exposes the I/O seam between the LED light operations and the board.

pub use crate::io::data::{IoState, PinSelector, PinState, Port};
pub use crate::io::protocol::BoardIo;

mod data;
mod protocol;
