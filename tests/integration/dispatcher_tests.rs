//! Dispatcher (SCAN) behaviour against mock drives, one step at a time.

use std::time::Duration;

use futures_lite::future::block_on;

use liftctl::car::CarDirection;
use liftctl::store::RequestKind;

use crate::mock_hw::{HwCall, fast_config, rig};

fn travel(from: u8, to: u8, heading: CarDirection) -> HwCall {
    HwCall::Travel { from, to, heading }
}

const SERVE: [HwCall; 3] = [HwCall::Chime, HwCall::Open, HwCall::Close];

#[test]
fn empty_store_stays_idle_in_place() {
    let (ctl, log) = rig(fast_config(3, 2), Duration::ZERO);

    for _ in 0..3 {
        assert_eq!(block_on(ctl.dispatcher().step()), Ok(CarDirection::Idle));
    }
    assert_eq!(ctl.snapshot().floor, 2);
    assert_eq!(ctl.snapshot().direction, CarDirection::Idle);
    assert!(log.calls().is_empty());
}

#[test]
fn sweep_runs_to_terminus_before_reversing() {
    let (ctl, log) = rig(fast_config(3, 1), Duration::ZERO);
    ctl.store().record(RequestKind::Inside, 2).unwrap();

    let next = block_on(ctl.dispatcher().step()).unwrap();

    let mut expected = vec![travel(1, 2, CarDirection::Up)];
    expected.extend(SERVE);
    expected.push(travel(2, 3, CarDirection::Up));
    assert_eq!(log.calls(), expected);
    assert_eq!(next, CarDirection::Idle);
    assert_eq!(ctl.snapshot().floor, 3);
    assert!(!ctl.store().any_pending());
}

#[test]
fn down_call_ahead_is_passed_on_the_way_up() {
    let (ctl, log) = rig(fast_config(3, 1), Duration::ZERO);
    ctl.store().record(RequestKind::Down, 3).unwrap();

    // Up sweep: floor 3 is passed (reached as terminus) without service.
    assert_eq!(block_on(ctl.dispatcher().step()), Ok(CarDirection::Down));
    assert_eq!(log.calls(), vec![travel(1, 3, CarDirection::Up)]);
    assert!(ctl.store().is_pending(RequestKind::Down, 3));

    // Down sweep: served at 3, then on to the bottom.
    log.clear();
    assert_eq!(block_on(ctl.dispatcher().step()), Ok(CarDirection::Idle));
    let mut expected = SERVE.to_vec();
    expected.push(travel(3, 1, CarDirection::Down));
    assert_eq!(log.calls(), expected);
    assert!(!ctl.store().any_pending());
}

#[test]
fn up_call_behind_waits_for_the_next_up_sweep() {
    let (ctl, log) = rig(fast_config(4, 3), Duration::ZERO);
    ctl.store().record(RequestKind::Up, 1).unwrap();

    // Below only: go down, but a down sweep never serves an up call.
    assert_eq!(block_on(ctl.dispatcher().step()), Ok(CarDirection::Up));
    assert_eq!(log.calls(), vec![travel(3, 1, CarDirection::Down)]);
    assert!(ctl.store().is_pending(RequestKind::Up, 1));

    log.clear();
    assert_eq!(block_on(ctl.dispatcher().step()), Ok(CarDirection::Idle));
    let mut expected = SERVE.to_vec();
    expected.push(travel(1, 4, CarDirection::Up));
    assert_eq!(log.calls(), expected);
}

#[test]
fn above_wins_when_requests_lie_both_ways() {
    let (ctl, log) = rig(fast_config(3, 2), Duration::ZERO);
    ctl.store().record(RequestKind::Inside, 1).unwrap();
    ctl.store().record(RequestKind::Inside, 3).unwrap();

    assert_eq!(block_on(ctl.dispatcher().step()), Ok(CarDirection::Down));
    assert_eq!(log.travels(), vec![(2, 3)]);
    assert!(ctl.store().is_pending(RequestKind::Inside, 1));

    assert_eq!(block_on(ctl.dispatcher().step()), Ok(CarDirection::Idle));
    assert_eq!(log.travels(), vec![(2, 3), (3, 1)]);
    assert_eq!(log.opens(), 2);
}

#[test]
fn request_at_current_floor_is_served_in_place() {
    let (ctl, log) = rig(fast_config(3, 2), Duration::ZERO);
    ctl.store().record(RequestKind::Up, 2).unwrap();
    ctl.store().record(RequestKind::Down, 2).unwrap();
    ctl.store().record(RequestKind::Inside, 2).unwrap();

    assert_eq!(block_on(ctl.dispatcher().step()), Ok(CarDirection::Idle));
    assert_eq!(log.calls(), SERVE.to_vec());
    assert!(!ctl.store().any_pending());
    assert_eq!(ctl.snapshot().floor, 2);
}

#[test]
fn end_to_end_three_floor_scenario() {
    let (ctl, log) = rig(fast_config(3, 1), Duration::ZERO);

    // Cabin request for the top floor.
    ctl.store().record(RequestKind::Inside, 3).unwrap();
    assert_eq!(block_on(ctl.dispatcher().step()), Ok(CarDirection::Idle));

    let mut expected = vec![travel(1, 3, CarDirection::Up)];
    expected.extend(SERVE);
    assert_eq!(log.calls(), expected);
    assert_eq!(ctl.snapshot().floor, 3);
    assert!(!ctl.snapshot().door_open);
    assert!(!ctl.store().is_pending(RequestKind::Inside, 3));

    // Down call at 2, then cabin request for 1, both below the car.
    log.clear();
    ctl.store().record(RequestKind::Down, 2).unwrap();
    ctl.store().record(RequestKind::Inside, 1).unwrap();
    assert_eq!(block_on(ctl.dispatcher().step()), Ok(CarDirection::Idle));

    let mut expected = vec![travel(3, 2, CarDirection::Down)];
    expected.extend(SERVE);
    expected.push(travel(2, 1, CarDirection::Down));
    expected.extend(SERVE);
    assert_eq!(log.calls(), expected);
    assert_eq!(ctl.snapshot().floor, 1);
    assert_eq!(ctl.snapshot().direction, CarDirection::Idle);
    assert!(!ctl.store().any_pending());
    assert!(!log.moved_with_door_open());
}

#[test]
fn requests_arriving_mid_sweep_are_picked_up() {
    let (ctl, log) = rig(fast_config(5, 1), Duration::from_millis(50));
    ctl.store().record(RequestKind::Inside, 2).unwrap();

    let stepper = {
        let dispatcher = std::sync::Arc::clone(ctl.dispatcher());
        std::thread::spawn(move || block_on(dispatcher.step()))
    };
    // Lands while the car is still on its way to floor 2.
    std::thread::sleep(Duration::from_millis(20));
    ctl.store().record(RequestKind::Up, 4).unwrap();

    assert_eq!(stepper.join().unwrap(), Ok(CarDirection::Idle));
    assert_eq!(log.travels(), vec![(1, 2), (2, 4), (4, 5)]);
    assert_eq!(log.opens(), 2);
}
