//! Board-agnostic core logic for the stepper firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Coil sequence tables and rotation direction
//! - Shared motion state and its torn-read-free snapshot
//! - Command interpreter (serial bytes → shared state)
//! - Stepping engine (shared state → coil output)
//! - Motor configuration
//!
//! The interpreter runs in interrupt context and the engine runs in the
//! foreground; [`state::MotionState`] is the only thing they share.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod motion;
pub mod state;

pub use command::CommandInterpreter;
pub use config::MotorConfig;
pub use motion::{Direction, StepPlan, SteppingEngine};
pub use state::{MotionSnapshot, MotionState};
