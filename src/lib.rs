//! <h1 align="center">LEDLIGHT - LED light blocks for board output pins</h1>
//!
//! # Features
//!
//! **Ledlight** maps the logical "LED light" operations of a block-programming
//! environment (initialize, turn on/off, set/change brightness, write a raw
//! digital bit) onto a single digital output pin of a microcontroller board.
//! The pin is addressed either directly or through a named board port.
//!
//! - Attach a [`Board`](hardware::Board) through any [`BoardIo`](io::BoardIo)
//!   implementation (the port-to-pin mapping itself belongs to the board base
//!   module, not to this crate)
//! - Drive LEDs with [`LedLight`](devices::LedLight): brightness is kept as a
//!   0-100 percentage per pin and written out as a 0-1023 PWM duty value
//!
//! # Getting Started
//!
//! ```ignore
//! // Requires the `mocks` feature (or any other `BoardIo` implementation).
//! use ledlight::devices::LedLight;
//! use ledlight::errors::Error;
//! use ledlight::hardware::Board;
//! use ledlight::io::Port;
//! use ledlight::mocks::MockBoardIo;
//!
//! fn main() -> Result<(), Error> {
//!     let board = Board::new(MockBoardIo::default());
//!     let mut led = LedLight::new(&board);
//!
//!     led.init(Port::P0)?;
//!     led.set_brightness(Port::P0, 70)?;
//!     assert_eq!(led.brightness(Port::P0)?, 70);
//!     Ok(())
//! }
//! ```
//!
//! # Feature flags
//!
//! - **serde** -- Enables serialize/deserialize capabilities for the data model entities.
//! - **mocks** -- Provides a mocked [`BoardIo`](io::BoardIo) (useful for tests mostly).

#[cfg(test)]
extern crate self as ledlight;

pub mod devices;
pub mod errors;
pub mod hardware;
pub mod io;
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
pub mod utils;
