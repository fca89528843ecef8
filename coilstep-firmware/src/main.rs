//! coilstep - Serial-commanded stepper firmware
//!
//! Main firmware binary for RP2040-based boards. Two execution contexts:
//!
//! - An interrupt executor (SWI_IRQ_1) running the serial receiver, which
//!   parses `s<N>` / `p<N>` lines into the shared motion state
//! - Thread mode running the stepping engine, which never yields except
//!   inside its fixed-length delay waits

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::InterruptExecutor;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use coilstep_core::{MotionState, MotorConfig, SteppingEngine};
use coilstep_hal::UartConfig;

use crate::board::{RX_BUF_SIZE, TX_BUF_SIZE};
use crate::coils::GpioCoils;

mod board;
mod coils;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// Target position and delay, shared by the receiver and the engine
static MOTION_STATE: MotionState = MotionState::new();

/// High-priority executor for the serial receiver
static EXECUTOR_RX: InterruptExecutor = InterruptExecutor::new();

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; TX_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; RX_BUF_SIZE]> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_RX.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("coilstep firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Command link: 4800 8N1, receive interrupt enabled by the buffered driver
    let link = UartConfig::default();
    let tx_buf = TX_BUF.init([0u8; TX_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; RX_BUF_SIZE]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, board::rp_uart_config(&link));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();

    info!("UART initialized: {} baud", link.baudrate);

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_RX.start(interrupt::SWI_IRQ_1);
    spawner
        .spawn(tasks::serial_rx_task(rx, &MOTION_STATE))
        .unwrap();

    // Coil outputs are configured once here and never change direction
    let coils = GpioCoils::new([
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
    ]);

    let config = MotorConfig::default();
    info!(
        "Stepping engine running: {} us per delay unit, coil mask {=u8:#x}",
        config.delay_unit_us, config.coil_mask
    );

    let mut engine = SteppingEngine::with_config(coils, Delay, config);
    engine.run_with(&MOTION_STATE, |plan| {
        debug!(
            "Moved {} -> {}: {} cycles {:?} at delay {}",
            plan.from, plan.to, plan.cycles, plan.direction, plan.delay
        );
    })
}
