//! Foreground stepping engine
//!
//! Repeatedly snapshots the shared state, works out how far the target
//! moved since the last pass, and walks the coils that many full cycles in
//! the matching direction. Open loop: the engine's idea of position is
//! only the count of cycles it has emitted.

use coilstep_hal::CoilPort;
use embedded_hal::delay::DelayNs;

use crate::config::MotorConfig;
use crate::motion::sequence::{CoilSequence, Direction};
use crate::state::{MotionSnapshot, MotionState};

/// Movement decided for one reconciliation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepPlan {
    /// Position before the pass
    pub from: i16,
    /// Target position read from the snapshot
    pub to: i16,
    /// Delay units each coil pattern is held for
    pub delay: u16,
    /// Rotation direction, `None` when already at target
    pub direction: Option<Direction>,
    /// Full sequence cycles to emit
    pub cycles: u32,
}

impl StepPlan {
    /// Plan the move from `previous` to the snapshot's target
    pub fn new(previous: i16, snapshot: MotionSnapshot) -> Self {
        // Widened so that e.g. -32768 → 32767 is 65535 cycles, not a wrap
        let delta = i32::from(snapshot.position) - i32::from(previous);

        Self {
            from: previous,
            to: snapshot.position,
            delay: snapshot.delay,
            direction: Direction::from_delta(delta),
            cycles: delta.unsigned_abs(),
        }
    }

    /// Check if this pass moves nothing
    pub fn is_idle(&self) -> bool {
        self.cycles == 0
    }
}

/// Stepping engine
///
/// Generic over the coil output and the delay primitive so the exact write
/// and delay sequence can be observed off-target.
pub struct SteppingEngine<P, D> {
    coils: P,
    delay: D,
    config: MotorConfig,
    previous_position: i16,
}

impl<P: CoilPort, D: DelayNs> SteppingEngine<P, D> {
    /// Create an engine with the default motor configuration
    pub fn new(coils: P, delay: D) -> Self {
        Self::with_config(coils, delay, MotorConfig::default())
    }

    /// Create an engine with an explicit motor configuration
    pub fn with_config(coils: P, delay: D, config: MotorConfig) -> Self {
        Self {
            coils,
            delay,
            config,
            previous_position: 0,
        }
    }

    /// Position reached at the end of the last pass
    pub fn previous_position(&self) -> i16 {
        self.previous_position
    }

    /// Motor configuration in use
    pub fn config(&self) -> &MotorConfig {
        &self.config
    }

    /// Borrow the coil output
    pub fn coils(&self) -> &P {
        &self.coils
    }

    /// Release the coil output and delay primitive
    pub fn into_inner(self) -> (P, D) {
        (self.coils, self.delay)
    }

    /// Run one reconciliation pass against the shared state
    ///
    /// The previous position becomes the snapshot's target whether or
    /// not anything moved.
    pub fn reconcile(&mut self, state: &MotionState) -> StepPlan {
        let plan = StepPlan::new(self.previous_position, state.snapshot());

        if let Some(direction) = plan.direction {
            self.drive(direction.sequence(), plan.delay, plan.cycles);
        }

        self.previous_position = plan.to;
        plan
    }

    /// Emit `cycles` full passes over `sequence`
    ///
    /// Every pattern is written to the coils and then held for `delay`
    /// delay units, one delay primitive call per unit.
    pub fn drive(&mut self, sequence: &CoilSequence, delay: u16, cycles: u32) {
        for _ in 0..cycles {
            for &pattern in sequence {
                self.coils.write(pattern & self.config.coil_mask);
                self.hold(delay);
            }
        }
    }

    fn hold(&mut self, delay: u16) {
        for _ in 0..delay {
            self.delay.delay_us(self.config.delay_unit_us);
        }
    }

    /// Reconcile forever
    pub fn run(&mut self, state: &MotionState) -> ! {
        self.run_with(state, |_| {})
    }

    /// Reconcile forever, reporting every pass that moved the motor
    pub fn run_with<F>(&mut self, state: &MotionState, mut on_move: F) -> !
    where
        F: FnMut(&StepPlan),
    {
        loop {
            let plan = self.reconcile(state);
            if !plan.is_idle() {
                on_move(&plan);
            }
        }
    }
}
