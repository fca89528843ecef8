//! Shared motion state
//!
//! The handoff point between the interrupt-context interpreter and the
//! foreground stepping engine.

pub mod shared;

pub use shared::{MotionSnapshot, MotionState};
