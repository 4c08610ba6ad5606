//! Defines the board handle devices attach to.

mod board;

pub use board::Board;
