//! Full controller with all tasks running: button presses in through the
//! request queue, motion and door activity out through the mocks.

use std::time::Duration;

use liftctl::car::CarDirection;
use liftctl::drivers::button::{ButtonId, Debouncer};
use liftctl::events::RequestChannel;
use liftctl::request::{CallDirection, DoorSignal, FloorRequest};

use crate::mock_hw::{HwCall, LampLog, ScreenLog, fast_config, rig, wait_until};

const SETTLE: Duration = Duration::from_secs(5);

#[test]
fn queued_presses_are_served_and_displayed() {
    static QUEUE: RequestChannel = RequestChannel::new();
    let (ctl, log) = rig(fast_config(3, 1), Duration::from_millis(5));
    let screen = ScreenLog::default();
    let lamps = LampLog::default();
    let _tasks = ctl.spawn(&QUEUE, screen.clone(), lamps.clone());

    assert!(QUEUE.enqueue(FloorRequest::inside(3)));
    assert!(wait_until(SETTLE, || log.opens() == 1 && ctl.snapshot().floor == 3));
    assert!(wait_until(SETTLE, || ctl.snapshot().direction == CarDirection::Idle));
    assert!(wait_until(SETTLE, || screen.shown("Floor: 3")));

    assert!(QUEUE.enqueue(FloorRequest::outside(2, CallDirection::Down)));
    assert!(QUEUE.enqueue(FloorRequest::inside(1)));
    assert!(wait_until(SETTLE, || log.opens() == 3 && ctl.snapshot().floor == 1));
    assert!(wait_until(SETTLE, || !ctl.store().any_pending()));

    assert_eq!(log.travels(), vec![(1, 3), (3, 2), (2, 1)]);
    assert!(!log.moved_with_door_open());

    assert!(wait_until(SETTLE, || screen.shown("Floor: 1")));
    assert!(wait_until(SETTLE, || lamps.last() == Some(vec![true, false, false])));
}

#[test]
fn manual_open_cycles_the_door_without_moving() {
    static QUEUE: RequestChannel = RequestChannel::new();
    let (ctl, log) = rig(fast_config(3, 2), Duration::ZERO);
    let _tasks = ctl.spawn(&QUEUE, ScreenLog::default(), LampLog::default());

    assert!(QUEUE.enqueue(FloorRequest::door(DoorSignal::Open)));
    assert!(wait_until(SETTLE, || log.calls().contains(&HwCall::Close)));

    assert_eq!(log.calls(), vec![HwCall::Open, HwCall::Close]);
    assert_eq!(ctl.snapshot().floor, 2);
    assert!(!ctl.store().any_pending());
}

#[test]
fn open_during_motion_waits_for_the_car_to_stop() {
    static QUEUE: RequestChannel = RequestChannel::new();
    let (ctl, log) = rig(fast_config(3, 1), Duration::from_millis(200));
    let _tasks = ctl.spawn(&QUEUE, ScreenLog::default(), LampLog::default());

    assert!(QUEUE.enqueue(FloorRequest::inside(3)));
    assert!(wait_until(SETTLE, || !log.travels().is_empty()));
    assert!(QUEUE.enqueue(FloorRequest::door(DoorSignal::Open)));

    assert!(wait_until(SETTLE, || log.opens() == 2));
    assert!(wait_until(SETTLE, || !ctl.snapshot().door_open));
    assert!(!log.moved_with_door_open());
    assert_eq!(log.travels(), vec![(1, 3)]);
}

#[test]
fn close_button_ends_a_long_dwell() {
    static QUEUE: RequestChannel = RequestChannel::new();
    let config = liftctl::config::ElevatorConfig {
        door_dwell_ms: 30_000,
        ..fast_config(3, 1)
    };
    let (ctl, log) = rig(config, Duration::ZERO);
    let _tasks = ctl.spawn(&QUEUE, ScreenLog::default(), LampLog::default());

    assert!(QUEUE.enqueue(FloorRequest::door(DoorSignal::Open)));
    assert!(wait_until(SETTLE, || ctl.snapshot().door_open));
    assert!(QUEUE.enqueue(FloorRequest::door(DoorSignal::Close)));

    assert!(wait_until(SETTLE, || !ctl.snapshot().door_open));
    assert_eq!(log.calls(), vec![HwCall::Open, HwCall::Close]);
}

#[test]
fn out_of_range_request_is_dropped_and_the_loop_survives() {
    static QUEUE: RequestChannel = RequestChannel::new();
    let (ctl, log) = rig(fast_config(3, 1), Duration::ZERO);
    let _tasks = ctl.spawn(&QUEUE, ScreenLog::default(), LampLog::default());

    assert!(QUEUE.enqueue(FloorRequest::inside(9)));
    assert!(QUEUE.enqueue(FloorRequest::outside(2, CallDirection::None)));
    assert!(QUEUE.enqueue(FloorRequest::inside(2)));

    assert!(wait_until(SETTLE, || log.opens() == 1));
    assert!(wait_until(SETTLE, || !ctl.store().any_pending()));
    assert_eq!(log.travels(), vec![(1, 2), (2, 3)]);
}

#[test]
fn button_edges_feed_the_queue() {
    let queue = RequestChannel::new();
    let debounce = Debouncer::new();

    for (t, id) in [(100, ButtonId::Cabin3), (120, ButtonId::Cabin3), (130, ButtonId::Hall2Down)] {
        if debounce.accept(id, t) {
            queue.enqueue(id.request());
        }
    }

    assert_eq!(queue.try_dequeue(), Some(FloorRequest::inside(3)));
    assert_eq!(
        queue.try_dequeue(),
        Some(FloorRequest::outside(2, CallDirection::Down))
    );
    assert!(queue.is_empty());
}
