//! End-to-end: serial bytes in, coil patterns out.

use std::collections::VecDeque;

use coilstep_core::motion::{CLOCKWISE, COUNTER_CLOCKWISE};
use coilstep_core::{CommandInterpreter, Direction, MotionState, SteppingEngine};
use coilstep_hal::CoilPort;
use embedded_hal::delay::DelayNs;

#[derive(Default)]
struct RecordingCoils {
    writes: Vec<u8>,
}

impl CoilPort for RecordingCoils {
    fn write(&mut self, pattern: u8) {
        self.writes.push(pattern);
    }

    fn pattern(&self) -> u8 {
        self.writes.last().copied().unwrap_or(0)
    }
}

#[derive(Default)]
struct CountingDelay {
    calls: usize,
    total_us: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_us += u64::from(ns / 1000);
    }

    fn delay_us(&mut self, us: u32) {
        self.calls += 1;
        self.total_us += u64::from(us);
    }
}

/// Delay primitive that lets one received byte "interrupt" each wait
struct InterruptingDelay<'a> {
    interpreter: CommandInterpreter<'a>,
    incoming: VecDeque<u8>,
}

impl DelayNs for InterruptingDelay<'_> {
    fn delay_ns(&mut self, _ns: u32) {
        if let Some(byte) = self.incoming.pop_front() {
            let _ = self.interpreter.on_byte(byte);
        }
    }
}

#[test]
fn test_speed_then_two_positions() {
    let state = MotionState::new();
    let mut interpreter = CommandInterpreter::new(&state);
    let mut engine = SteppingEngine::new(RecordingCoils::default(), CountingDelay::default());

    interpreter.on_bytes(b"s5\n");
    interpreter.on_bytes(b"p20\n");

    let plan = engine.reconcile(&state);
    assert_eq!(plan.direction, Some(Direction::Clockwise));
    assert_eq!(plan.cycles, 20);
    assert_eq!(plan.delay, 5);
    assert_eq!(engine.previous_position(), 20);

    interpreter.on_bytes(b"p15\n");
    let plan = engine.reconcile(&state);
    assert_eq!(plan.direction, Some(Direction::CounterClockwise));
    assert_eq!(plan.cycles, 5);
    assert_eq!(engine.previous_position(), 15);

    let (coils, delay) = engine.into_inner();

    let mut expected = CLOCKWISE.repeat(20);
    expected.extend(COUNTER_CLOCKWISE.repeat(5));
    assert_eq!(coils.writes, expected);

    // 25 cycles × 8 steps × 5 units, 10 µs each
    assert_eq!(delay.calls, 25 * 8 * 5);
    assert_eq!(delay.total_us, 25 * 8 * 50);
}

#[test]
fn test_same_target_twice_moves_once() {
    let state = MotionState::new();
    let mut interpreter = CommandInterpreter::new(&state);
    let mut engine = SteppingEngine::new(RecordingCoils::default(), CountingDelay::default());

    interpreter.on_bytes(b"p100\n");
    engine.reconcile(&state);
    interpreter.on_bytes(b"p100\n");
    let plan = engine.reconcile(&state);

    assert!(plan.is_idle());
    assert_eq!(engine.coils().writes.len(), 100 * 8);
}

#[test]
fn test_garbage_between_commands() {
    let state = MotionState::new();
    let mut interpreter = CommandInterpreter::new(&state);
    let mut engine = SteppingEngine::new(RecordingCoils::default(), CountingDelay::default());

    let applied = interpreter.on_bytes(b"hello\np-3\nz\n\np99999999\ns2\n");
    assert_eq!(applied, 2);

    let plan = engine.reconcile(&state);
    assert_eq!(plan.direction, Some(Direction::CounterClockwise));
    assert_eq!(plan.cycles, 3);
    assert_eq!(plan.delay, 2);
}

#[test]
fn test_command_arriving_mid_move_applies_next_pass() {
    let state = MotionState::new();
    state.set_delay(1);
    state.set_position(4);

    let delay = InterruptingDelay {
        interpreter: CommandInterpreter::new(&state),
        incoming: b"p1\n".iter().copied().collect(),
    };
    let mut engine = SteppingEngine::new(RecordingCoils::default(), delay);

    // The new target lands during the third wait; the current move
    // still runs to the target it snapshotted.
    let plan = engine.reconcile(&state);
    assert_eq!(plan.to, 4);
    assert_eq!(plan.cycles, 4);
    assert_eq!(state.snapshot().position, 1);
    assert_eq!(engine.previous_position(), 4);

    let plan = engine.reconcile(&state);
    assert_eq!(plan.direction, Some(Direction::CounterClockwise));
    assert_eq!(plan.cycles, 3);
    assert_eq!(engine.previous_position(), 1);

    let mut expected = CLOCKWISE.repeat(4);
    expected.extend(COUNTER_CLOCKWISE.repeat(3));
    assert_eq!(engine.coils().writes, expected);
}
