//! Line assembly for the serial command protocol.
//!
//! Bytes are accumulated until a newline (`\n`) arrives, then the collected
//! line is classified as a [`Command`]. The buffer holds at most
//! [`LINE_CAPACITY`] bytes.
//!
//! Overflow policy: once a line grows past capacity, the remaining bytes
//! up to the next newline are dropped and the whole line is rejected with
//! [`LineError::Overflow`]. The following line starts clean.

use heapless::Vec;

use crate::command::Command;
use crate::decimal::ParseError;

/// Line terminator
pub const LINE_END: u8 = b'\n';

/// Bytes buffered per line: command letter, sign and five digits
pub const LINE_CAPACITY: usize = 7;

/// Reasons a completed line produced no command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Newline with nothing before it
    Empty,
    /// First byte is not a known command letter
    UnknownCommand(u8),
    /// Line exceeded [`LINE_CAPACITY`] and was discarded
    Overflow,
}

/// Byte-at-a-time line collector
///
/// Never allocates and does a bounded amount of work per byte, so it can
/// be fed straight from a receive interrupt.
#[derive(Debug, Clone)]
pub struct LineParser {
    buffer: Vec<u8, LINE_CAPACITY>,
    overflowed: bool,
    last_parse_error: Option<ParseError>,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser {
    /// Create an empty line parser
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            overflowed: false,
            last_parse_error: None,
        }
    }

    /// Drop any partially received line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
    }

    /// Bytes buffered for the current line
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Check if the current line has already overflowed
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    /// Why the argument of the last completed command was degraded, if it was
    ///
    /// Updated at every newline; `None` after a line that produced no command.
    pub fn last_parse_error(&self) -> Option<ParseError> {
        self.last_parse_error
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(command))` when a newline completes a valid command,
    /// `Ok(None)` while the line is still being collected, or `Err` when a
    /// completed line carries no command. The buffer is emptied after every
    /// newline either way.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Command>, LineError> {
        if byte != LINE_END {
            if !self.overflowed && self.buffer.push(byte).is_err() {
                self.overflowed = true;
            }
            return Ok(None);
        }

        let result = if self.overflowed {
            Err(LineError::Overflow)
        } else {
            Command::from_line_detailed(&self.buffer)
        };

        self.reset();
        match result {
            Ok((command, degraded)) => {
                self.last_parse_error = degraded;
                Ok(Some(command))
            }
            Err(e) => {
                self.last_parse_error = None;
                Err(e)
            }
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first completed line's outcome. Bytes after that line
    /// are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Command>, LineError> {
        for &byte in bytes {
            if byte == LINE_END {
                return self.feed(byte);
            }
            self.feed(byte)?;
        }
        Ok(None)
    }
}
