//! Arrival buzzer (passive piezo on LEDC ch1, fixed 2 kHz timer).
//!
//! The chime is two 200 ms beeps, 300 ms apart.  It blocks the calling
//! task for its whole duration, which is fine: it only ever runs inside a
//! door cycle that is about to dwell anyway.

use crate::drivers::hw_init;

const BEEPS: u8 = 2;
const BEEP_MS: u32 = 200;
const BEEP_SPACING_MS: u32 = 300;
/// 50 % of the 8-bit tone timer.
const TONE_DUTY: u32 = 128;

pub struct Buzzer {
    chimes: u32,
}

impl Buzzer {
    pub fn new() -> Self {
        hw_init::ledc_set(hw_init::LEDC_CH_BUZZER, 0);
        Self { chimes: 0 }
    }

    /// "Beep beep".
    pub fn chime(&mut self) {
        for _ in 0..BEEPS {
            hw_init::ledc_set(hw_init::LEDC_CH_BUZZER, TONE_DUTY);
            hw_init::delay_us(BEEP_MS * 1_000);
            hw_init::ledc_set(hw_init::LEDC_CH_BUZZER, 0);
            hw_init::delay_us((BEEP_SPACING_MS - BEEP_MS) * 1_000);
        }
        self.chimes += 1;
    }

    pub fn chimes(&self) -> u32 {
        self.chimes
    }
}

impl Default for Buzzer {
    fn default() -> Self {
        Self::new()
    }
}
