//! Serial command handling
//!
//! Turns received bytes into updates of the shared motion state.

pub mod interpreter;

pub use interpreter::CommandInterpreter;
