use std::fmt::Display;
use std::ops::{Deref, DerefMut};

use log::trace;
use parking_lot::RwLockReadGuard;

use crate::io::{BoardIo, IoState};

/// Represents a physical board where your [`LedLight`](crate::devices::LedLight) pins live.
/// The board gives access to [`IoState`] through a [`BoardIo`] backend.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct Board {
    /// The inner I/O backend used by this Board.
    #[cfg_attr(feature = "serde", serde(skip))]
    io: Box<dyn BoardIo>,
}

impl Board {
    /// Creates a board using a given I/O backend.
    ///
    /// The backend is provided by the board base module (or by
    /// [`MockBoardIo`](crate::mocks::MockBoardIo) in tests).
    pub fn new<P: BoardIo + 'static>(io: P) -> Self {
        let board = Self { io: Box::new(io) };
        trace!("Board attached: {}", board);
        board
    }

    /// Returns the I/O backend used.
    ///
    /// NOTE: this is private to the crate since board already gives access to backend methods
    /// via Deref. This method is only used internally in device constructors to clone the
    /// backend into the device.
    pub(crate) fn get_board_io(&self) -> Box<dyn BoardIo> {
        self.io.clone()
    }

    /// Easy access to the pin table through the board.
    pub fn get_io(&self) -> RwLockReadGuard<IoState> {
        self.io.get_state().read()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board ({})", self.io)
    }
}

impl Deref for Board {
    type Target = Box<dyn BoardIo>;

    fn deref(&self) -> &Self::Target {
        &self.io
    }
}

impl DerefMut for Board {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.io
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::Port;
    use crate::mocks::MockBoardIo;

    #[test]
    fn test_board_new() {
        let board = Board::new(MockBoardIo::default());
        assert_eq!(
            board.io.get_io_name(),
            "MockBoardIo",
            "Board can be created with a custom I/O backend"
        );
    }

    #[test]
    fn test_board_get_io() {
        let board = Board::new(MockBoardIo::default());
        assert!(board.get_io().get_pin(13).is_ok());
        assert!(board.get_io().get_pin(66).is_err());
    }

    #[test]
    fn test_board_deref() {
        let mut board = Board::new(MockBoardIo::default());
        assert_eq!(board.pin_from_port(Port::P0).unwrap(), 0);
        assert!(board.enable_output(13).is_ok());
        assert!(board.get_io().get_pin(13).unwrap().enabled);
    }

    #[test]
    fn test_board_display() {
        let board = Board::new(MockBoardIo::default());
        let output = format!("{}", board);
        assert_eq!(output, "Board (MockBoardIo [pins=9])");
    }
}
