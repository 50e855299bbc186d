//! Unified error types for the lift controller.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! task loops' error handling uniform.  All variants are `Copy` so they can
//! be passed between tasks and logged without allocation.

use core::fmt;

use crate::config::ConfigError;
use crate::request::Floor;

// ---------------------------------------------------------------------------
// Top-level controller error
// ---------------------------------------------------------------------------

/// Every fallible operation in the controller funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A floor index outside `1..=floor_count` reached the core.
    InvalidFloor(Floor),
    /// Motion ownership could not be acquired within the configured bound.
    ActuatorBusyTimeout,
    /// Configuration is invalid or could not be parsed.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFloor(floor) => write!(f, "invalid floor {floor}"),
            Self::ActuatorBusyTimeout => write!(f, "actuator busy: motion ownership timed out"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Controller-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
