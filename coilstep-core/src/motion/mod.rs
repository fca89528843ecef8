//! Motion generation
//!
//! Coil sequence tables and the foreground stepping engine.

pub mod engine;
pub mod sequence;

pub use engine::{StepPlan, SteppingEngine};
pub use sequence::{CoilSequence, Direction, CLOCKWISE, COUNTER_CLOCKWISE, SEQUENCE_LEN};
