//! Command classification
//!
//! A completed line is classified by its first byte; the rest of the line
//! is the decimal argument.

use crate::decimal::{parse_decimal, ParseError};
use crate::line::LineError;

/// Command letter: set inter-pulse delay
pub const CMD_SPEED: u8 = b's';
/// Command letter: set absolute target position
pub const CMD_POSITION: u8 = b'p';

/// A parsed motion command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Hold each coil step for `delay` × 10 µs
    SetSpeed { delay: u16 },
    /// Move to the absolute position `position`, in pulses
    SetPosition { position: i16 },
}

impl Command {
    /// Classify a completed line (without its newline)
    ///
    /// A speed argument that parses to `i16::MIN` or `i16::MAX` is the
    /// parser's failure sentinel and becomes a delay of 0. Position
    /// arguments are taken as parsed, sentinels included.
    pub fn from_line(line: &[u8]) -> Result<Self, LineError> {
        Self::from_line_detailed(line).map(|(command, _)| command)
    }

    /// Classify a completed line and report why its argument was degraded
    ///
    /// The second element is `Some` whenever the command carries a value
    /// other than the one written on the line. A speed that lands exactly
    /// on a sentinel reports the overflow that would have produced it,
    /// since the two are indistinguishable once parsed.
    pub fn from_line_detailed(line: &[u8]) -> Result<(Self, Option<ParseError>), LineError> {
        let (&letter, argument) = line.split_first().ok_or(LineError::Empty)?;
        let parsed = parse_decimal(argument);
        let value = parsed.unwrap_or_else(ParseError::sentinel);

        match letter {
            CMD_SPEED => Ok((
                Command::SetSpeed {
                    delay: delay_from_value(value),
                },
                parsed.err().or_else(|| sentinel_reason(value)),
            )),
            CMD_POSITION => Ok((Command::SetPosition { position: value }, parsed.err())),
            other => Err(LineError::UnknownCommand(other)),
        }
    }
}

fn sentinel_reason(value: i16) -> Option<ParseError> {
    match value {
        i16::MAX => Some(ParseError::PositiveOverflow),
        i16::MIN => Some(ParseError::NegativeOverflow),
        _ => None,
    }
}

/// Map a parsed speed argument onto a delay, rejecting parser sentinels
fn delay_from_value(value: i16) -> u16 {
    if value == i16::MIN || value == i16::MAX {
        0
    } else {
        value as u16
    }
}
