//! Mock hardware for integration tests.
//!
//! Records every drive and door call, in order, into one shared log so
//! tests can assert on the full command history without touching real
//! GPIO/PWM registers.  The lift mock also instruments concurrency: how
//! many moves overlap, and whether the door was ever open during one.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use liftctl::app::ports::{DoorDrive, FloorIndicator, LiftDrive, StatusDisplay};
use liftctl::app::service::LiftController;
use liftctl::car::{CarDirection, CarState};
use liftctl::config::ElevatorConfig;
use liftctl::presentation::StatusLines;
use liftctl::request::Floor;

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwCall {
    /// A move, with the dispatcher state at the moment it started.
    Travel {
        from: Floor,
        to: Floor,
        heading: CarDirection,
    },
    Chime,
    Open,
    Close,
}

// ── Shared log ────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct HwLog {
    calls: Arc<Mutex<Vec<HwCall>>>,
    door_open: Arc<AtomicBool>,
    active_moves: Arc<AtomicUsize>,
    peak_moves: Arc<AtomicUsize>,
    moved_with_door_open: Arc<AtomicBool>,
    car: Arc<OnceLock<Arc<CarState>>>,
}

impl HwLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let travel records capture the dispatcher state.
    pub fn watch_car(&self, car: &Arc<CarState>) {
        let _ = self.car.set(Arc::clone(car));
    }

    pub fn calls(&self) -> Vec<HwCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn travels(&self) -> Vec<(Floor, Floor)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                HwCall::Travel { from, to, .. } => Some((from, to)),
                _ => None,
            })
            .collect()
    }

    pub fn opens(&self) -> usize {
        self.calls().iter().filter(|c| **c == HwCall::Open).count()
    }

    /// Most moves ever in flight at once.
    pub fn peak_moves(&self) -> usize {
        self.peak_moves.load(Ordering::SeqCst)
    }

    pub fn moved_with_door_open(&self) -> bool {
        self.moved_with_door_open.load(Ordering::SeqCst)
    }

    fn push(&self, call: HwCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn heading(&self) -> CarDirection {
        self.car
            .get()
            .map(|car| car.direction())
            .unwrap_or(CarDirection::Idle)
    }
}

// ── MockLift ──────────────────────────────────────────────────

pub struct MockLift {
    log: HwLog,
    travel_time: Duration,
}

impl MockLift {
    pub fn new(log: &HwLog, travel_time: Duration) -> Self {
        Self {
            log: log.clone(),
            travel_time,
        }
    }
}

impl LiftDrive for MockLift {
    fn travel(&mut self, from: Floor, to: Floor) {
        let log = &self.log;
        log.push(HwCall::Travel {
            from,
            to,
            heading: log.heading(),
        });

        let active = log.active_moves.fetch_add(1, Ordering::SeqCst) + 1;
        log.peak_moves.fetch_max(active, Ordering::SeqCst);

        if log.door_open.load(Ordering::SeqCst) {
            log.moved_with_door_open.store(true, Ordering::SeqCst);
        }
        if !self.travel_time.is_zero() {
            std::thread::sleep(self.travel_time);
        }
        if log.door_open.load(Ordering::SeqCst) {
            log.moved_with_door_open.store(true, Ordering::SeqCst);
        }

        log.active_moves.fetch_sub(1, Ordering::SeqCst);
    }
}

// ── MockDoor ──────────────────────────────────────────────────

pub struct MockDoor {
    log: HwLog,
}

impl MockDoor {
    pub fn new(log: &HwLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DoorDrive for MockDoor {
    fn open(&mut self) {
        self.log.door_open.store(true, Ordering::SeqCst);
        self.log.push(HwCall::Open);
    }

    fn close(&mut self) {
        self.log.door_open.store(false, Ordering::SeqCst);
        self.log.push(HwCall::Close);
    }

    fn chime(&mut self) {
        self.log.push(HwCall::Chime);
    }
}

// ── Presentation recorders ────────────────────────────────────

#[derive(Clone, Default)]
pub struct ScreenLog(pub Arc<Mutex<Vec<StatusLines>>>);

impl ScreenLog {
    pub fn shown(&self, top: &str) -> bool {
        self.0.lock().unwrap().iter().any(|l| l.top.as_str() == top)
    }
}

impl StatusDisplay for ScreenLog {
    fn show(&mut self, lines: &StatusLines) {
        self.0.lock().unwrap().push(lines.clone());
    }
}

#[derive(Clone, Default)]
pub struct LampLog(pub Arc<Mutex<Vec<Vec<bool>>>>);

impl LampLog {
    pub fn last(&self) -> Option<Vec<bool>> {
        self.0.lock().unwrap().last().cloned()
    }
}

impl FloorIndicator for LampLog {
    fn show(&mut self, lamps: &[bool]) {
        self.0.lock().unwrap().push(lamps.to_vec());
    }
}

// ── Rig ───────────────────────────────────────────────────────

/// Millisecond-scale timings so a full sweep finishes quickly.
pub fn fast_config(floor_count: u8, start_floor: Floor) -> ElevatorConfig {
    ElevatorConfig {
        floor_count,
        start_floor,
        poll_interval_ms: 5,
        service_dwell_ms: 1,
        door_dwell_ms: 1,
        door_poll_ms: 5,
        door_idle_ms: 1,
        display_refresh_ms: 5,
        indicator_refresh_ms: 5,
        ..ElevatorConfig::default()
    }
}

pub type TestController = LiftController<MockLift, MockDoor>;

/// A controller over mocks, with travel records tagged by heading.
pub fn rig(config: ElevatorConfig, travel_time: Duration) -> (TestController, HwLog) {
    let log = HwLog::new();
    let ctl = LiftController::new(config, MockLift::new(&log, travel_time), MockDoor::new(&log))
        .expect("test config is valid");
    log.watch_car(ctl.car());
    (ctl, log)
}

/// Poll `cond` every 5 ms until it holds or `timeout` passes.
pub fn wait_until(timeout: Duration, mut cond: impl FnMut() -> bool) -> bool {
    let deadline = std::time::Instant::now() + timeout;
    while std::time::Instant::now() < deadline {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    cond()
}
