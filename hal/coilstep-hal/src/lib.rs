//! coilstep Hardware Abstraction Layer
//!
//! This crate defines the contracts between the board-agnostic motor logic
//! and the chip-specific code that owns the actual peripherals.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  coilstep-core (engine, interpreter)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  coilstep-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  coilstep-firmware (RP2040 GPIO, UART)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`coil::CoilPort`] - 8-line coil driver output
//! - [`uart::UartConfig`] - Serial framing for the command link

#![no_std]
#![deny(unsafe_code)]

pub mod coil;
pub mod uart;

// Re-export key types at crate root for convenience
pub use coil::CoilPort;
pub use uart::{DataBits, Parity, StopBits, UartConfig};
