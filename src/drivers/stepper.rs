//! Hoist stepper driver (STEP/DIR driver board).
//!
//! Open-loop: a move of `n` floors is `n × steps_per_floor` pulses with a
//! fixed half period.  There is no position feedback, so the car is assumed
//! to arrive exactly where it was sent.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: toggles real GPIOs with a ROM busy-wait between edges.
//! On host/test: the same loop runs against no-op GPIO writes and
//! `thread::sleep` delays, so a simulated move takes real time.

use crate::drivers::hw_init;
use crate::pins;

/// Pulses between cooperative yields inside a move.
const YIELD_EVERY_STEPS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

pub struct StepperDriver {
    steps_per_floor: u32,
    half_period_us: u32,
    total_steps: u64,
}

impl StepperDriver {
    pub fn new(steps_per_floor: u32, half_period_us: u32) -> Self {
        // Driver enable is active-low; hold it enabled.
        hw_init::gpio_write(pins::STEPPER_ENABLE_GPIO, false);
        Self {
            steps_per_floor,
            half_period_us,
            total_steps: 0,
        }
    }

    /// Pulses needed to cross `floors` floors.
    pub fn steps_for(&self, floors: u8) -> u32 {
        u32::from(floors) * self.steps_per_floor
    }

    /// Emit `steps` pulses in `dir`.  Blocks until done.
    pub fn run(&mut self, dir: StepDirection, steps: u32) {
        hw_init::gpio_write(pins::STEPPER_DIR_GPIO, dir == StepDirection::Up);

        for i in 0..steps {
            hw_init::gpio_write(pins::STEPPER_STEP_GPIO, true);
            hw_init::delay_us(self.half_period_us);
            hw_init::gpio_write(pins::STEPPER_STEP_GPIO, false);
            hw_init::delay_us(self.half_period_us);

            if (i + 1) % YIELD_EVERY_STEPS == 0 {
                hw_init::yield_now();
            }
        }
        self.total_steps += u64::from(steps);
    }

    /// Pulses emitted since boot.
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }
}
