//! Serial Command Protocol
//!
//! This crate defines the text protocol a host uses to command the stepper
//! controller over UART. Every command is a single newline-terminated line:
//!
//! ```text
//! ┌────────┬──────────────────┬────┐
//! │ LETTER │ DECIMAL ARGUMENT │ LF │
//! │ 1B     │ 1–6B             │ 1B │
//! └────────┴──────────────────┴────┘
//! ```
//!
//! - `s<N>\n` sets the inter-pulse delay, in 10 µs units
//! - `p<N>\n` sets the absolute target position, in pulses
//!
//! Lines starting with any other letter are ignored. Nothing is ever sent
//! back to the host.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod decimal;
pub mod line;

pub use command::{Command, CMD_POSITION, CMD_SPEED};
pub use decimal::{parse_decimal, ParseError};
pub use line::{LineError, LineParser, LINE_CAPACITY, LINE_END};
