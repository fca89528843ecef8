//! Delay and target position shared across execution contexts
//!
//! Writers (the command interpreter) update one field at a time with a
//! single atomic store and never take a lock. The reader (the stepping
//! engine) copies both fields inside a critical section, so the pair it
//! sees is always either entirely before or entirely after any one
//! interrupt.

use coilstep_protocol::Command;
use portable_atomic::{AtomicI16, AtomicU16, Ordering};

/// Target position and inter-pulse delay
///
/// Lives for the whole program; place it in a `static` or `StaticCell`
/// and hand out shared references.
#[derive(Debug, Default)]
pub struct MotionState {
    /// Inter-pulse delay in delay units
    delay: AtomicU16,
    /// Absolute target position in pulses
    position: AtomicI16,
}

/// A consistent copy of [`MotionState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSnapshot {
    /// Inter-pulse delay in delay units
    pub delay: u16,
    /// Absolute target position in pulses
    pub position: i16,
}

impl MotionState {
    /// Zero delay, zero position
    pub const fn new() -> Self {
        Self {
            delay: AtomicU16::new(0),
            position: AtomicI16::new(0),
        }
    }

    /// Set the inter-pulse delay
    pub fn set_delay(&self, delay: u16) {
        self.delay.store(delay, Ordering::Release);
    }

    /// Set the absolute target position
    pub fn set_position(&self, position: i16) {
        self.position.store(position, Ordering::Release);
    }

    /// Apply a parsed command; only the field it names is touched
    pub fn apply(&self, command: Command) {
        match command {
            Command::SetSpeed { delay } => self.set_delay(delay),
            Command::SetPosition { position } => self.set_position(position),
        }
    }

    /// Copy both fields with interrupts masked
    ///
    /// The critical section covers the two loads and nothing else.
    pub fn snapshot(&self) -> MotionSnapshot {
        critical_section::with(|_| MotionSnapshot {
            delay: self.delay.load(Ordering::Acquire),
            position: self.position.load(Ordering::Acquire),
        })
    }
}
