//! Board wiring
//!
//! Pin assignments for a Raspberry Pi Pico driving a ULN2003-style coil
//! driver board:
//!
//! | Signal  | GPIO |
//! |---------|------|
//! | UART TX | 0    |
//! | UART RX | 1    |
//! | Coil A  | 2    |
//! | Coil B  | 3    |
//! | Coil C  | 4    |
//! | Coil D  | 5    |

use coilstep_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use embassy_rp::uart;

/// UART transmit ring buffer size (unused by the protocol, required by the driver)
pub const TX_BUF_SIZE: usize = 16;

/// UART receive ring buffer size
pub const RX_BUF_SIZE: usize = 64;

/// Map link framing onto the RP2040 UART driver configuration
///
/// The RP2040 UART tops out at 8 data bits; nine-bit framing is clamped.
pub fn rp_uart_config(link: &UartConfig) -> uart::Config {
    let mut config = uart::Config::default();
    config.baudrate = link.baudrate;
    config.data_bits = match link.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight | DataBits::Nine => uart::DataBits::DataBits8,
    };
    config.parity = match link.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    config.stop_bits = match link.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    config
}
