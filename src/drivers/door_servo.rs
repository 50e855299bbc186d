//! Door servo driver (hobby servo on LEDC ch0, 50 Hz).
//!
//! Two positions only: closed (0°) and open (90°).  The servo holds
//! position as long as the pulse train runs, so the channel is never
//! switched off.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the LEDC duty.  On host/test: tracks the commanded
//! angle in memory only.

use crate::drivers::hw_init;
use crate::pins;

/// Pulse width at 0° and at 180°.
const MIN_PULSE_US: u32 = 500;
const MAX_PULSE_US: u32 = 2_500;
/// One servo frame at 50 Hz.
const FRAME_US: u32 = 20_000;

pub struct DoorServo {
    angle: u8,
}

impl DoorServo {
    pub fn new() -> Self {
        Self {
            angle: pins::DOOR_CLOSED_DEG,
        }
    }

    pub fn open(&mut self) {
        self.write_angle(pins::DOOR_OPEN_DEG);
    }

    pub fn close(&mut self) {
        self.write_angle(pins::DOOR_CLOSED_DEG);
    }

    pub fn is_open(&self) -> bool {
        self.angle == pins::DOOR_OPEN_DEG
    }

    pub fn angle(&self) -> u8 {
        self.angle
    }

    fn write_angle(&mut self, deg: u8) {
        let deg = deg.min(180);
        hw_init::ledc_set(hw_init::LEDC_CH_SERVO, duty_for(deg));
        self.angle = deg;
    }
}

impl Default for DoorServo {
    fn default() -> Self {
        Self::new()
    }
}

/// LEDC duty for `deg` at 14-bit resolution over one frame.
fn duty_for(deg: u8) -> u32 {
    let pulse_us = MIN_PULSE_US + (MAX_PULSE_US - MIN_PULSE_US) * u32::from(deg) / 180;
    pulse_us * (1 << hw_init::SERVO_DUTY_BITS) / FRAME_US
}
