//! Port traits: the hexagonal boundary between the dispatch core and the
//! hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Actuator / DoorCoordinator / presentation
//! ```
//!
//! Driven adapters (stepper, door servo, lamps, display) implement these
//! traits.  The core consumes them via generics, so nothing under
//! `dispatch`, `actuator` or `door` touches a register.

use crate::presentation::StatusLines;
use crate::request::Floor;

// ───────────────────────────────────────────────────────────────
// Lift drive (domain → vertical actuator)
// ───────────────────────────────────────────────────────────────

/// Physical car movement.
///
/// `travel` blocks for a time proportional to `|to - from|` and returns once
/// the car is at `to`.  There is no position feedback: the caller assumes
/// the move succeeded.
pub trait LiftDrive: Send {
    fn travel(&mut self, from: Floor, to: Floor);
}

// ───────────────────────────────────────────────────────────────
// Door drive (domain → door actuator + arrival chime)
// ───────────────────────────────────────────────────────────────

/// Door open/close primitives.
pub trait DoorDrive: Send {
    fn open(&mut self);

    fn close(&mut self);

    /// Audible arrival signal, sounded before the door opens on service.
    fn chime(&mut self) {}
}

// ───────────────────────────────────────────────────────────────
// Presentation (car state → lamps / text display)
// ───────────────────────────────────────────────────────────────

/// Text status display (16×2 character LCD on the reference board).
pub trait StatusDisplay {
    fn show(&mut self, lines: &StatusLines);
}

/// Per-floor indicator lamps.  `lamps[i]` is floor `i + 1`.
pub trait FloorIndicator {
    fn show(&mut self, lamps: &[bool]);
}
