//! Fuzz target: request ingestion + SCAN dispatch
//!
//! Decodes arbitrary bytes into button requests (including out-of-range
//! floors and directionless hall calls), folds them through the ingestor,
//! then drives the dispatcher and asserts it never panics, never moves the
//! car outside the shaft, and always drains to Idle within three sweeps.
//!
//! cargo fuzz run fuzz_request_fold

#![no_main]

use futures_lite::future::block_on;
use libfuzzer_sys::fuzz_target;

use liftctl::app::ports::{DoorDrive, LiftDrive};
use liftctl::app::service::LiftController;
use liftctl::car::CarDirection;
use liftctl::config::ElevatorConfig;
use liftctl::events::RequestChannel;
use liftctl::request::{CallDirection, DoorSignal, Floor, FloorRequest};

struct NullHw;

impl LiftDrive for NullHw {
    fn travel(&mut self, _from: Floor, _to: Floor) {}
}

impl DoorDrive for NullHw {
    fn open(&mut self) {}
    fn close(&mut self) {}
}

static UNUSED: RequestChannel = RequestChannel::new();

fn decode(byte: u8) -> FloorRequest {
    let floor = byte & 0x1F;
    match byte >> 5 {
        1 => FloorRequest::outside(floor, CallDirection::Up),
        2 => FloorRequest::outside(floor, CallDirection::Down),
        3 => FloorRequest::outside(floor, CallDirection::None),
        4 => FloorRequest::door(DoorSignal::Open),
        5 => FloorRequest::door(DoorSignal::Close),
        _ => FloorRequest::inside(floor),
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&shape, requests)) = data.split_first() else {
        return;
    };
    let floor_count = 2 + shape % 15;
    let config = ElevatorConfig {
        floor_count,
        start_floor: 1 + (shape >> 4) % floor_count,
        service_dwell_ms: 0,
        ..ElevatorConfig::default()
    };
    let Ok(ctl) = LiftController::new(config, NullHw, NullHw) else {
        return;
    };

    let ingestor = ctl.ingestor(&UNUSED);
    for &byte in requests {
        let _ = ingestor.fold(decode(byte));
    }

    for _ in 0..3 {
        assert!(block_on(ctl.dispatcher().step()).is_ok());
        assert!((1..=floor_count).contains(&ctl.snapshot().floor));
    }
    assert!(!ctl.store().any_pending());
    assert_eq!(block_on(ctl.dispatcher().step()), Ok(CarDirection::Idle));
});
