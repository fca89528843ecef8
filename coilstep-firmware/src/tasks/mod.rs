//! Embassy async tasks
//!
//! Only the serial receiver runs as a task; the stepping engine owns
//! thread mode directly.

pub mod serial_rx;

pub use serial_rx::serial_rx_task;
