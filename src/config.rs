//! System configuration parameters
//!
//! All tunable parameters for the lift controller.  Defaults match the
//! reference three-floor shaft; the host binary may override them with a
//! JSON document.

use core::fmt;

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use crate::request::{Floor, MAX_FLOORS};

/// Longest dwell accepted by [`ElevatorConfig::validate`].
const MAX_DWELL_MS: u32 = 60_000;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevatorConfig {
    // --- Shaft ---
    /// Number of served floors (floors are numbered 1..=floor_count).
    /// The dispatch core accepts up to 16; a board build must also pass
    /// [`fits_board`](Self::fits_board) for its lamp count.
    pub floor_count: u8,
    /// Floor the car is assumed to stand at on power-up
    pub start_floor: Floor,

    // --- Dispatcher ---
    /// SCAN re-evaluation period (milliseconds)
    pub poll_interval_ms: u32,
    /// Door dwell while serving a floor (milliseconds)
    pub service_dwell_ms: u32,

    // --- Door task ---
    /// Door dwell after a manual open (milliseconds)
    pub door_dwell_ms: u32,
    /// How long the door task waits for an open signal before yielding
    pub door_poll_ms: u32,
    /// Pause between door task iterations
    pub door_idle_ms: u32,

    // --- Presentation ---
    /// Status display refresh period (milliseconds)
    pub display_refresh_ms: u32,
    /// Floor lamp refresh period (milliseconds)
    pub indicator_refresh_ms: u32,

    // --- Stepper ---
    /// Step pulses per floor of travel
    pub steps_per_floor: u32,
    /// Half period of one step pulse (microseconds high, then low)
    pub step_half_period_us: u32,
    /// Bounded wait for motion ownership; `None` waits forever
    pub actuator_timeout_ms: Option<u32>,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        Self {
            // Shaft
            floor_count: 3,
            start_floor: 1,

            // Dispatcher
            poll_interval_ms: 100,
            service_dwell_ms: 3000,

            // Door task
            door_dwell_ms: 3000,
            door_poll_ms: 100,
            door_idle_ms: 50,

            // Presentation
            display_refresh_ms: 500,
            indicator_refresh_ms: 200,

            // Stepper: 2000 steps at 1.6 ms per step ≈ 3.2 s per floor
            steps_per_floor: 2000,
            step_half_period_us: 800,
            actuator_timeout_ms: None,
        }
    }
}

impl ElevatorConfig {
    /// Parse a JSON document (missing fields take defaults) and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Corrupted)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject out-of-range values rather than clamping them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.floor_count < 2 || self.floor_count as usize > MAX_FLOORS {
            return Err(ConfigError::ValidationFailed("floor_count must be 2..=16"));
        }
        if self.start_floor < 1 || self.start_floor > self.floor_count {
            return Err(ConfigError::ValidationFailed("start_floor outside the shaft"));
        }
        if self.poll_interval_ms == 0 || self.door_poll_ms == 0 {
            return Err(ConfigError::ValidationFailed("poll periods must be non-zero"));
        }
        if self.display_refresh_ms == 0 || self.indicator_refresh_ms == 0 {
            return Err(ConfigError::ValidationFailed("refresh periods must be non-zero"));
        }
        if self.steps_per_floor == 0 {
            return Err(ConfigError::ValidationFailed("steps_per_floor must be non-zero"));
        }
        if self.service_dwell_ms > MAX_DWELL_MS || self.door_dwell_ms > MAX_DWELL_MS {
            return Err(ConfigError::ValidationFailed("dwell longer than 60 s"));
        }
        Ok(())
    }

    /// Reject a shaft taller than the board's floor lamps can show.
    pub fn fits_board(&self, lamp_count: usize) -> Result<(), ConfigError> {
        if self.floor_count as usize > lamp_count {
            return Err(ConfigError::ValidationFailed("floor_count exceeds the board's floor lamps"));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.into())
    }

    pub fn service_dwell(&self) -> Duration {
        Duration::from_millis(self.service_dwell_ms.into())
    }

    pub fn door_dwell(&self) -> Duration {
        Duration::from_millis(self.door_dwell_ms.into())
    }

    pub fn door_poll(&self) -> Duration {
        Duration::from_millis(self.door_poll_ms.into())
    }

    pub fn door_idle(&self) -> Duration {
        Duration::from_millis(self.door_idle_ms.into())
    }

    pub fn display_refresh(&self) -> Duration {
        Duration::from_millis(self.display_refresh_ms.into())
    }

    pub fn indicator_refresh(&self) -> Duration {
        Duration::from_millis(self.indicator_refresh_ms.into())
    }

    pub fn actuator_timeout(&self) -> Option<Duration> {
        self.actuator_timeout_ms
            .map(|ms| Duration::from_millis(ms.into()))
    }
}

/// Errors from parsing or validating an [`ElevatorConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The document could not be deserialised.
    Corrupted,
    /// A field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl core::error::Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}
