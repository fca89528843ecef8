//! Command interpreter
//!
//! Owns the line buffer and writes completed commands into the shared
//! [`MotionState`]. Designed to be driven from the UART receive interrupt:
//! one call per byte, bounded work, no allocation, no locks.

use coilstep_protocol::{Command, LineError, LineParser, ParseError};

use crate::state::MotionState;

/// Byte-driven command interpreter
#[derive(Debug)]
pub struct CommandInterpreter<'a> {
    parser: LineParser,
    state: &'a MotionState,
}

impl<'a> CommandInterpreter<'a> {
    /// Create an interpreter that writes into `state`
    pub const fn new(state: &'a MotionState) -> Self {
        Self {
            parser: LineParser::new(),
            state,
        }
    }

    /// The shared state this interpreter writes to
    pub fn state(&self) -> &'a MotionState {
        self.state
    }

    /// Why the last applied command's argument was degraded, if it was
    pub fn last_parse_error(&self) -> Option<ParseError> {
        self.parser.last_parse_error()
    }

    /// Handle one received byte
    ///
    /// A completed, valid line updates the shared state and is returned.
    /// Lines that carry no command leave the state untouched; the reason
    /// is returned for logging only.
    pub fn on_byte(&mut self, byte: u8) -> Result<Option<Command>, LineError> {
        let outcome = self.parser.feed(byte);
        if let Ok(Some(command)) = outcome {
            self.state.apply(command);
        }
        outcome
    }

    /// Handle a run of received bytes, returning how many commands were applied
    pub fn on_bytes(&mut self, bytes: &[u8]) -> usize {
        bytes
            .iter()
            .filter(|&&byte| matches!(self.on_byte(byte), Ok(Some(_))))
            .count()
    }
}
