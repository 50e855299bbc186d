//! Car state: position, travel direction, door.
//!
//! Each field has exactly one writer:
//!
//! | Field       | Writer                                  |
//! |-------------|-----------------------------------------|
//! | `floor`     | [`Actuator`](crate::actuator::Actuator), under its motion lock |
//! | `direction` | [`Dispatcher`](crate::dispatch::Dispatcher) |
//! | `door_open` | [`DoorCoordinator`](crate::door::DoorCoordinator) |
//!
//! Readers (presentation, tests) see each field atomically but get no
//! cross-field guarantee: a snapshot may pair `door_open = true` with a
//! floor that has already been updated.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use serde::Serialize;

use crate::request::Floor;

/// Dispatcher state; doubles as the car's travel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum CarDirection {
    Idle = 0,
    Up = 1,
    Down = 2,
}

impl CarDirection {
    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Up,
            2 => Self::Down,
            _ => Self::Idle,
        }
    }
}

/// Read-only view handed to presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarSnapshot {
    pub floor: Floor,
    pub direction: CarDirection,
    pub door_open: bool,
}

/// Shared car state.
pub struct CarState {
    floor: AtomicU8,
    direction: AtomicU8,
    door_open: AtomicBool,
}

impl CarState {
    /// Power-up state: standing at `start_floor`, idle, door closed.
    pub const fn new(start_floor: Floor) -> Self {
        Self {
            floor: AtomicU8::new(start_floor),
            direction: AtomicU8::new(CarDirection::Idle as u8),
            door_open: AtomicBool::new(false),
        }
    }

    pub fn floor(&self) -> Floor {
        self.floor.load(Ordering::Acquire)
    }

    pub fn direction(&self) -> CarDirection {
        CarDirection::from_u8(self.direction.load(Ordering::Acquire))
    }

    pub fn door_open(&self) -> bool {
        self.door_open.load(Ordering::Acquire)
    }

    pub fn snapshot(&self) -> CarSnapshot {
        CarSnapshot {
            floor: self.floor(),
            direction: self.direction(),
            door_open: self.door_open(),
        }
    }

    pub(crate) fn set_floor(&self, floor: Floor) {
        self.floor.store(floor, Ordering::Release);
    }

    pub(crate) fn set_direction(&self, direction: CarDirection) {
        self.direction.store(direction as u8, Ordering::Release);
    }

    pub(crate) fn set_door_open(&self, open: bool) {
        self.door_open.store(open, Ordering::Release);
    }
}
