//! Coil energization sequences
//!
//! Half-step order for a four-coil motor. Each entry energizes one or two
//! adjacent coils, and consecutive entries differ by exactly one coil.

/// Entries per coil sequence
pub const SEQUENCE_LEN: usize = 8;

/// One full cycle of coil patterns
pub type CoilSequence = [u8; SEQUENCE_LEN];

/// Clockwise coil order
pub const CLOCKWISE: CoilSequence = [0x1, 0x3, 0x2, 0x6, 0x4, 0xc, 0x8, 0x9];

/// Counter-clockwise coil order
pub const COUNTER_CLOCKWISE: CoilSequence = [0x9, 0x8, 0xc, 0x4, 0x6, 0x2, 0x3, 0x1];

/// Motor rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise rotation, increasing position
    Clockwise,
    /// Counter-clockwise rotation, decreasing position
    CounterClockwise,
}

impl Direction {
    /// Direction needed to cover a signed position delta
    ///
    /// Returns `None` when there is nothing to do.
    pub fn from_delta(delta: i32) -> Option<Self> {
        match delta {
            d if d > 0 => Some(Direction::Clockwise),
            d if d < 0 => Some(Direction::CounterClockwise),
            _ => None,
        }
    }

    /// Coil sequence that turns the motor this way
    pub fn sequence(self) -> &'static CoilSequence {
        match self {
            Direction::Clockwise => &CLOCKWISE,
            Direction::CounterClockwise => &COUNTER_CLOCKWISE,
        }
    }
}
