//! GPIO-backed coil port
//!
//! Each wired coil line is a push-pull output. Pattern bits beyond the
//! wired lines are remembered but drive nothing.

use coilstep_hal::CoilPort;
use embassy_rp::gpio::{Level, Output};

/// Coil lines wired on this board
pub const COIL_LINES: usize = 4;

/// Coil port over individual GPIO outputs
pub struct GpioCoils<'d> {
    lines: [Output<'d>; COIL_LINES],
    pattern: u8,
}

impl<'d> GpioCoils<'d> {
    /// Take ownership of the coil outputs and de-energize them
    pub fn new(lines: [Output<'d>; COIL_LINES]) -> Self {
        let mut coils = Self { lines, pattern: 0 };
        coils.release();
        coils
    }
}

impl CoilPort for GpioCoils<'_> {
    fn write(&mut self, pattern: u8) {
        for (bit, line) in self.lines.iter_mut().enumerate() {
            line.set_level(Level::from(pattern & (1 << bit) != 0));
        }
        self.pattern = pattern;
    }

    fn pattern(&self) -> u8 {
        self.pattern
    }
}
