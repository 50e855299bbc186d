//! Motion exclusivity under concurrent callers.

use std::sync::Arc;
use std::time::Duration;

use embassy_time::Duration as EmbassyDuration;
use futures_lite::future::block_on;

use liftctl::actuator::Actuator;
use liftctl::car::CarState;
use liftctl::error::Error;

use crate::mock_hw::{HwLog, MockLift};

#[test]
fn concurrent_moves_never_overlap() {
    let log = HwLog::new();
    let car = Arc::new(CarState::new(1));
    let actuator = Arc::new(Actuator::new(
        MockLift::new(&log, Duration::from_millis(2)),
        Arc::clone(&car),
        5,
        None,
    ));

    let workers: Vec<_> = (0..6u8)
        .map(|w| {
            let actuator = Arc::clone(&actuator);
            std::thread::spawn(move || {
                for i in 0..10u8 {
                    let target = (w + i) % 5 + 1;
                    block_on(actuator.move_to(target)).unwrap();
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }

    assert_eq!(log.peak_moves(), 1);
    // Each recorded move starts where the previous one ended.
    let travels = log.travels();
    assert!(!travels.is_empty());
    for pair in travels.windows(2) {
        assert_eq!(pair[0].1, pair[1].0);
    }
    assert!(travels.iter().all(|(from, to)| from != to));
    assert_eq!(car.floor(), travels.last().unwrap().1);
}

#[test]
fn bounded_wait_reports_busy_actuator() {
    let log = HwLog::new();
    let car = Arc::new(CarState::new(1));
    let actuator = Arc::new(Actuator::new(
        MockLift::new(&log, Duration::from_millis(300)),
        car,
        3,
        Some(EmbassyDuration::from_millis(30)),
    ));

    let long_move = {
        let actuator = Arc::clone(&actuator);
        std::thread::spawn(move || block_on(actuator.move_to(3)))
    };
    std::thread::sleep(Duration::from_millis(50));

    assert_eq!(block_on(actuator.move_to(2)), Err(Error::ActuatorBusyTimeout));
    assert_eq!(long_move.join().unwrap(), Ok(()));
    assert_eq!(log.travels(), vec![(1, 3)]);
}
