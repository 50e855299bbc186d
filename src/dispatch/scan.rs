//! Pure SCAN rules.  Nothing here blocks, moves the car or mutates state;
//! the [`Dispatcher`](super::Dispatcher) feeds these the live store and
//! acts on the answers.

use heapless::Vec;

use crate::car::CarDirection;
use crate::request::{Floor, MAX_FLOORS};
use crate::store::{RequestKind, RequestStore};

/// Direction to leave `Idle` in.  Above is checked before below.
pub fn initial_direction(store: &RequestStore, current: Floor) -> CarDirection {
    if store.any_above(current) {
        CarDirection::Up
    } else if store.any_below(current) {
        CarDirection::Down
    } else {
        CarDirection::Idle
    }
}

/// Whether a sweep heading `heading` stops at `floor`.
///
/// Cabin requests always stop the car; hall calls only when they point the
/// same way as the sweep.
pub fn should_stop(store: &RequestStore, floor: Floor, heading: CarDirection) -> bool {
    store.is_pending(RequestKind::Inside, floor)
        || match heading {
            CarDirection::Up => store.is_pending(RequestKind::Up, floor),
            CarDirection::Down => store.is_pending(RequestKind::Down, floor),
            CarDirection::Idle => false,
        }
}

/// Dispatcher state after a completed sweep that ended at `current`.
pub fn after_sweep(store: &RequestStore, current: Floor, heading: CarDirection) -> CarDirection {
    match heading {
        CarDirection::Up
            if store.any_of_kind(RequestKind::Down) || store.any_below(current) =>
        {
            CarDirection::Down
        }
        CarDirection::Down if store.any_of_kind(RequestKind::Up) || store.any_above(current) => {
            CarDirection::Up
        }
        _ => CarDirection::Idle,
    }
}

/// End of travel for `heading`.
pub fn terminus(heading: CarDirection, floor_count: u8) -> Option<Floor> {
    match heading {
        CarDirection::Up => Some(floor_count),
        CarDirection::Down => Some(1),
        CarDirection::Idle => None,
    }
}

/// Floors visited by a sweep from `current` to the terminus, in visiting
/// order.  `current` itself comes first.
pub fn sweep_floors(current: Floor, heading: CarDirection, floor_count: u8) -> Vec<Floor, MAX_FLOORS> {
    let mut floors = Vec::new();
    match heading {
        CarDirection::Up => {
            for f in current..=floor_count {
                let _ = floors.push(f);
            }
        }
        CarDirection::Down => {
            for f in (1..=current).rev() {
                let _ = floors.push(f);
            }
        }
        CarDirection::Idle => {}
    }
    floors
}
