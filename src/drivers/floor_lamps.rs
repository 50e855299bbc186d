//! Floor indicator lamps, one GPIO per floor.
//!
//! Only writes a pin when its level changes.

use crate::drivers::hw_init;
use crate::pins;

const LAMP_COUNT: usize = pins::FLOOR_LAMP_GPIOS.len();

pub struct FloorLamps {
    lit: [bool; LAMP_COUNT],
}

impl FloorLamps {
    pub fn new() -> Self {
        for &pin in &pins::FLOOR_LAMP_GPIOS {
            hw_init::gpio_write(pin, false);
        }
        Self {
            lit: [false; LAMP_COUNT],
        }
    }

    /// Apply `lamps[i]` to lamp `i`.  Extra entries are ignored, missing
    /// ones switch the lamp off.
    pub fn set(&mut self, lamps: &[bool]) {
        for (i, &pin) in pins::FLOOR_LAMP_GPIOS.iter().enumerate() {
            let on = lamps.get(i).copied().unwrap_or(false);
            if self.lit[i] != on {
                hw_init::gpio_write(pin, on);
                self.lit[i] = on;
            }
        }
    }

    pub fn lit(&self) -> &[bool] {
        &self.lit
    }
}

impl Default for FloorLamps {
    fn default() -> Self {
        Self::new()
    }
}
