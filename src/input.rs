//! Keys as the game sees them, independent of the terminal backend.

/// Abstract key presses the state machine understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Quit,
    Left,
    Right,
    Up,
    Down,
    /// Space bar.
    Confirm,
    /// The `s` key: jump to the high-score table from the intro.
    Alt,
}

/// Whether the main loop should keep running after a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
