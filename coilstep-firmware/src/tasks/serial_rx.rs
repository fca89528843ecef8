//! Serial command receive task
//!
//! Runs on the interrupt-priority executor, so it preempts the stepping
//! engine whenever bytes arrive and runs to completion before thread mode
//! resumes.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use coilstep_core::{CommandInterpreter, MotionState};
use coilstep_protocol::{Command, LineError, ParseError};

/// Bytes pulled from the UART ring buffer per read
const READ_CHUNK: usize = 16;

/// Serial RX task - feeds received bytes to the command interpreter
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx, state: &'static MotionState) {
    info!("Serial RX task started");

    let mut interpreter = CommandInterpreter::new(state);
    let mut buf = [0u8; READ_CHUNK];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) => {
                trace!("RX: {} bytes", n);
                for &byte in &buf[..n] {
                    handle_byte(&mut interpreter, byte);
                }
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

fn handle_byte(interpreter: &mut CommandInterpreter<'_>, byte: u8) {
    match interpreter.on_byte(byte) {
        Ok(Some(Command::SetSpeed { delay })) => match interpreter.last_parse_error() {
            Some(reason) => warn!("Speed argument rejected ({:?}), delay forced to 0", reason),
            None => debug!("Speed: delay {} units", delay),
        },
        Ok(Some(Command::SetPosition { position })) => match interpreter.last_parse_error() {
            Some(ParseError::NoDigits) => {
                warn!("Position argument has no digits, target now {}", position);
            }
            Some(reason) => warn!("Position saturated ({:?}), target now {}", reason, position),
            None => debug!("Target position: {}", position),
        },
        Ok(None) => {}
        Err(LineError::Empty) => {
            trace!("Empty line");
        }
        Err(e) => {
            warn!("Discarded line: {:?}", e);
        }
    }
}
