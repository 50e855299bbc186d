//! Floor-service requests as produced by the button edge.
//!
//! A [`FloorRequest`] is an immutable value: it is built in interrupt
//! context, copied into the [`RequestChannel`](crate::events::RequestChannel)
//! and consumed exactly once by the [`Ingestor`](crate::ingestor::Ingestor).
//! The manual door buttons travel through the same queue as a
//! [`Target::Door`] sentinel instead of a floor number.

use serde::{Deserialize, Serialize};

/// Floor number, 1-based (floor 1 is the ground floor).
pub type Floor = u8;

/// Upper bound on `floor_count`; sizes every per-floor array.
pub const MAX_FLOORS: usize = 16;

/// The direction an outside caller wishes to travel.
///
/// Only meaningful for [`Origin::OutsideCall`]; cabin requests carry `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallDirection {
    None,
    Up,
    Down,
}

/// Where the button that produced the request lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    InsideCar,
    OutsideCall,
}

/// Manual door button signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorSignal {
    /// Open the door now (or as soon as the car is standing still).
    Open,
    /// Cut the current dwell short and close.
    Close,
}

/// What a request refers to: a floor, or the manual door sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Floor(Floor),
    Door(DoorSignal),
}

/// One button press, as enqueued by the event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloorRequest {
    pub target: Target,
    pub direction: CallDirection,
    pub origin: Origin,
}

impl FloorRequest {
    /// A cabin button: "take me to `floor`".
    pub const fn inside(floor: Floor) -> Self {
        Self {
            target: Target::Floor(floor),
            direction: CallDirection::None,
            origin: Origin::InsideCar,
        }
    }

    /// A hall button at `floor` asking to travel `direction`.
    pub const fn outside(floor: Floor, direction: CallDirection) -> Self {
        Self {
            target: Target::Floor(floor),
            direction,
            origin: Origin::OutsideCall,
        }
    }

    /// A manual door open/close button.
    pub const fn door(signal: DoorSignal) -> Self {
        Self {
            target: Target::Door(signal),
            direction: CallDirection::None,
            origin: Origin::InsideCar,
        }
    }

    /// The floor this request names, or `None` for the door sentinel.
    pub fn floor(&self) -> Option<Floor> {
        match self.target {
            Target::Floor(floor) => Some(floor),
            Target::Door(_) => None,
        }
    }
}
