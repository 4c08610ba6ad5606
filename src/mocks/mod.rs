//! Mocked entities (useful for tests mostly).

use std::collections::HashMap;

pub use crate::mocks::board_io::MockBoardIo;

use crate::io::{IoState, PinState};

mod board_io;

/// Builds the pin table used by [`MockBoardIo`]: the nine edge pins the named
/// board ports are wired to, none enabled yet.
pub fn create_test_io_state() -> IoState {
    let mut pins = HashMap::new();
    for id in [0, 1, 2, 8, 12, 13, 14, 15, 16] {
        pins.insert(
            id,
            PinState {
                id,
                enabled: false,
                value: 0,
            },
        );
    }
    IoState { pins }
}
