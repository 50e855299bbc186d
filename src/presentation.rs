//! Read-only renderers of the car state.
//!
//! Both refreshers poll [`CarState::snapshot`] on their own period and push
//! the rendered result into a port.  Nothing here writes car state.

use core::fmt::Write;

use embassy_time::{Duration, Timer};
use heapless::{String, Vec};
use std::sync::Arc;

use crate::app::ports::{FloorIndicator, StatusDisplay};
use crate::car::{CarDirection, CarSnapshot, CarState};
use crate::request::MAX_FLOORS;

/// Width of one line of the character display.
pub const LINE_WIDTH: usize = 16;

/// Two lines of display text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLines {
    pub top: String<LINE_WIDTH>,
    pub bottom: String<LINE_WIDTH>,
}

/// `Floor: 2 ^` / `Door: Closed`.
pub fn render_status(snapshot: &CarSnapshot) -> StatusLines {
    let mut lines = StatusLines::default();

    // "Floor: 16 ^" is 11 chars; writes cannot overflow.
    let _ = write!(lines.top, "Floor: {}", snapshot.floor);
    let arrow = match snapshot.direction {
        CarDirection::Up => " ^",
        CarDirection::Down => " v",
        CarDirection::Idle => "",
    };
    let _ = lines.top.push_str(arrow);

    let _ = lines.bottom.push_str(if snapshot.door_open {
        "Door: Open"
    } else {
        "Door: Closed"
    });
    lines
}

/// One lamp per floor, only the current floor lit.
pub fn floor_lamps(snapshot: &CarSnapshot, floor_count: u8) -> Vec<bool, MAX_FLOORS> {
    (1..=floor_count.min(MAX_FLOORS as u8))
        .map(|f| f == snapshot.floor)
        .collect()
}

/// Status display task body.  Never returns.
pub async fn refresh_display<S: StatusDisplay>(car: Arc<CarState>, mut display: S, period: Duration) {
    loop {
        display.show(&render_status(&car.snapshot()));
        Timer::after(period).await;
    }
}

/// Floor indicator task body.  Never returns.
pub async fn refresh_indicator<F: FloorIndicator>(
    car: Arc<CarState>,
    mut indicator: F,
    floor_count: u8,
    period: Duration,
) {
    loop {
        indicator.show(&floor_lamps(&car.snapshot(), floor_count));
        Timer::after(period).await;
    }
}
