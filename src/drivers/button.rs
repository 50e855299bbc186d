//! ISR-debounced push buttons.
//!
//! ## Hardware
//!
//! Seven active-low momentary switches with pull-ups.  Each GPIO fires on
//! its falling edge; the ISR passes the button id and a millisecond
//! timestamp to [`button_isr_handler`], which debounces per button and
//! enqueues the matching [`FloorRequest`].
//!
//! | Button        | Request                       | Host key |
//! |---------------|-------------------------------|----------|
//! | `Cabin1..3`   | inside, floor 1..3            | `1`-`3`  |
//! | `Hall2Up`     | outside, floor 2, up          | `u`      |
//! | `Hall2Down`   | outside, floor 2, down        | `d`      |
//! | `DoorOpen`    | door open                     | `o`      |
//! | `DoorClose`   | door close                    | `c`      |
//!
//! Nothing here logs or blocks: it runs in interrupt context.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::events::RequestChannel;
use crate::request::{CallDirection, DoorSignal, FloorRequest};

const DEBOUNCE_MS: u32 = 50;

/// Every button on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ButtonId {
    Cabin1 = 0,
    Cabin2,
    Cabin3,
    Hall2Up,
    Hall2Down,
    DoorOpen,
    DoorClose,
}

pub const BUTTON_COUNT: usize = 7;

impl ButtonId {
    pub const ALL: [ButtonId; BUTTON_COUNT] = [
        ButtonId::Cabin1,
        ButtonId::Cabin2,
        ButtonId::Cabin3,
        ButtonId::Hall2Up,
        ButtonId::Hall2Down,
        ButtonId::DoorOpen,
        ButtonId::DoorClose,
    ];

    /// The request this button produces.
    pub const fn request(self) -> FloorRequest {
        match self {
            Self::Cabin1 => FloorRequest::inside(1),
            Self::Cabin2 => FloorRequest::inside(2),
            Self::Cabin3 => FloorRequest::inside(3),
            Self::Hall2Up => FloorRequest::outside(2, CallDirection::Up),
            Self::Hall2Down => FloorRequest::outside(2, CallDirection::Down),
            Self::DoorOpen => FloorRequest::door(DoorSignal::Open),
            Self::DoorClose => FloorRequest::door(DoorSignal::Close),
        }
    }

    /// Keyboard mapping for the host simulation.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            '1' => Some(Self::Cabin1),
            '2' => Some(Self::Cabin2),
            '3' => Some(Self::Cabin3),
            'u' => Some(Self::Hall2Up),
            'd' => Some(Self::Hall2Down),
            'o' => Some(Self::DoorOpen),
            'c' => Some(Self::DoorClose),
            _ => None,
        }
    }

    /// GPIO the button is wired to.
    pub const fn gpio(self) -> i32 {
        use crate::pins;
        match self {
            Self::Cabin1 => pins::CABIN_1_GPIO,
            Self::Cabin2 => pins::CABIN_2_GPIO,
            Self::Cabin3 => pins::CABIN_3_GPIO,
            Self::Hall2Up => pins::HALL_2_UP_GPIO,
            Self::Hall2Down => pins::HALL_2_DOWN_GPIO,
            Self::DoorOpen => pins::DOOR_OPEN_GPIO,
            Self::DoorClose => pins::DOOR_CLOSE_GPIO,
        }
    }
}

/// Last accepted edge per button (ms since boot, truncated to u32).
/// 0 means "never pressed".
pub struct Debouncer {
    last_ms: [AtomicU32; BUTTON_COUNT],
}

impl Debouncer {
    pub const fn new() -> Self {
        Self {
            last_ms: [const { AtomicU32::new(0) }; BUTTON_COUNT],
        }
    }

    /// `true` if an edge at `now_ms` counts as a new press.
    pub fn accept(&self, id: ButtonId, now_ms: u32) -> bool {
        let slot = &self.last_ms[id as usize];
        let last = slot.load(Ordering::Acquire);
        if last != 0 && now_ms.wrapping_sub(last) < DEBOUNCE_MS {
            return false;
        }
        // Timestamp 0 would read as "never pressed"; nudge it.
        slot.store(now_ms.max(1), Ordering::Release);
        true
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

static DEBOUNCE: Debouncer = Debouncer::new();

/// ISR handler. Call on each button's falling edge.
/// Safe in interrupt context (atomics plus a non-blocking enqueue).
/// Returns `true` if a request was enqueued.
pub fn button_isr_handler(id: ButtonId, now_ms: u32, channel: &RequestChannel) -> bool {
    debounced_press(&DEBOUNCE, id, now_ms, channel)
}

fn debounced_press(debounce: &Debouncer, id: ButtonId, now_ms: u32, channel: &RequestChannel) -> bool {
    debounce.accept(id, now_ms) && channel.enqueue(id.request())
}
