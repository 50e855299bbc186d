//! Hardware adapters: bridge the board drivers to the port traits.
//!
//! One adapter per independently locked resource: the hoist lives behind
//! the actuator's motion lock, the door and buzzer behind the door lock,
//! the lamps on the presentation task.  On non-espidf targets the
//! underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{DoorDrive, FloorIndicator, LiftDrive};
use crate::drivers::buzzer::Buzzer;
use crate::drivers::door_servo::DoorServo;
use crate::drivers::floor_lamps::FloorLamps;
use crate::drivers::stepper::{StepDirection, StepperDriver};
use crate::request::Floor;

// ── LiftDrive ─────────────────────────────────────────────────

/// Hoist: floor-to-floor moves on the stepper.
pub struct Hoist {
    stepper: StepperDriver,
}

impl Hoist {
    pub fn new(stepper: StepperDriver) -> Self {
        Self { stepper }
    }
}

impl LiftDrive for Hoist {
    fn travel(&mut self, from: Floor, to: Floor) {
        let dir = if to > from {
            StepDirection::Up
        } else {
            StepDirection::Down
        };
        let steps = self.stepper.steps_for(from.abs_diff(to));
        self.stepper.run(dir, steps);
    }
}

// ── DoorDrive ─────────────────────────────────────────────────

/// Door servo plus the arrival buzzer.
pub struct DoorHardware {
    servo: DoorServo,
    buzzer: Buzzer,
}

impl DoorHardware {
    pub fn new(servo: DoorServo, buzzer: Buzzer) -> Self {
        Self { servo, buzzer }
    }
}

impl DoorDrive for DoorHardware {
    fn open(&mut self) {
        self.servo.open();
    }

    fn close(&mut self) {
        self.servo.close();
    }

    fn chime(&mut self) {
        self.buzzer.chime();
    }
}

// ── FloorIndicator ────────────────────────────────────────────

impl FloorIndicator for FloorLamps {
    fn show(&mut self, lamps: &[bool]) {
        self.set(lamps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hoist_counts_steps_per_floor() {
        let mut hoist = Hoist::new(StepperDriver::new(4, 0));
        hoist.travel(1, 3);
        hoist.travel(3, 2);
        assert_eq!(hoist.stepper.total_steps(), 12);
    }

    #[test]
    fn door_hardware_moves_servo() {
        let mut door = DoorHardware::new(DoorServo::new(), Buzzer::new());
        door.open();
        assert!(door.servo.is_open());
        door.close();
        assert!(!door.servo.is_open());
    }
}
