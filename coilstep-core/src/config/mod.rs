//! Motor configuration
//!
//! Compile-time settings for the stepping engine. There is no persisted
//! configuration; boards construct a [`MotorConfig`] at startup.

/// Length of one delay unit in microseconds
pub const DELAY_UNIT_US: u32 = 10;

/// Coil lines wired to the motor (low nibble of the port)
pub const DEFAULT_COIL_MASK: u8 = 0x0F;

/// Stepping engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorConfig {
    /// Microseconds per delay unit; one delay primitive call each
    pub delay_unit_us: u32,
    /// Lines of the coil port the motor is connected to
    pub coil_mask: u8,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            delay_unit_us: DELAY_UNIT_US,
            coil_mask: DEFAULT_COIL_MASK,
        }
    }
}
