//! SCAN dispatcher.
//!
//! # State machine
//!
//! ```text
//!   Idle ──(pending above)──▶ Up ──(down calls, or anything below)──▶ Down
//!   Idle ──(pending below)──▶ Down ──(up calls, or anything above)──▶ Up
//!   Up / Down ──(nothing left after the sweep)──▶ Idle
//! ```
//!
//! One [`Dispatcher::step`] runs one complete sweep: every eligible stop
//! between the car and the terminus is served, the car rides on to the
//! terminus, and only then is the next direction chosen.  Requests at the
//! car's own floor while idle are served in place.

pub mod scan;

use embassy_time::{Duration, Timer};
use log::{info, warn};
use std::sync::Arc;

use crate::actuator::Actuator;
use crate::app::ports::{DoorDrive, LiftDrive};
use crate::car::{CarDirection, CarState};
use crate::door::DoorCoordinator;
use crate::error::Result;
use crate::request::Floor;
use crate::store::{RequestKind, RequestStore};

pub struct Dispatcher<D, G> {
    store: Arc<RequestStore>,
    car: Arc<CarState>,
    actuator: Arc<Actuator<D>>,
    door: Arc<DoorCoordinator<G>>,
    poll: Duration,
    service_dwell: Duration,
}

impl<D: LiftDrive, G: DoorDrive> Dispatcher<D, G> {
    pub fn new(
        store: Arc<RequestStore>,
        car: Arc<CarState>,
        actuator: Arc<Actuator<D>>,
        door: Arc<DoorCoordinator<G>>,
        poll: Duration,
        service_dwell: Duration,
    ) -> Self {
        Self {
            store,
            car,
            actuator,
            door,
            poll,
            service_dwell,
        }
    }

    /// Evaluate the store once and act on it.  Returns the state the
    /// dispatcher is left in.
    pub async fn step(&self) -> Result<CarDirection> {
        if !self.store.any_pending() {
            self.set_direction(CarDirection::Idle);
            return Ok(CarDirection::Idle);
        }

        let mut heading = self.car.direction();
        if heading == CarDirection::Idle {
            let here = self.car.floor();
            heading = scan::initial_direction(&self.store, here);
            if heading == CarDirection::Idle {
                self.serve_floor(here, CarDirection::Idle).await;
                return Ok(CarDirection::Idle);
            }
            self.set_direction(heading);
        }

        self.sweep(heading).await?;

        let next = scan::after_sweep(&self.store, self.car.floor(), heading);
        self.set_direction(next);
        Ok(next)
    }

    /// Serve every eligible stop from the car to the terminus, then finish
    /// the ride to the terminus.
    async fn sweep(&self, heading: CarDirection) -> Result<()> {
        let floor_count = self.store.floor_count();
        for floor in scan::sweep_floors(self.car.floor(), heading, floor_count) {
            if scan::should_stop(&self.store, floor, heading) {
                self.travel_to(floor).await?;
                self.serve_floor(floor, heading).await;
            }
        }
        if let Some(end) = scan::terminus(heading, floor_count) {
            self.travel_to(end).await?;
        }
        Ok(())
    }

    /// Move with the door held shut for the whole trip.
    async fn travel_to(&self, floor: Floor) -> Result<()> {
        if floor == self.car.floor() {
            return Ok(());
        }
        let _door = self.door.hold_closed().await;
        self.actuator.move_to(floor).await
    }

    /// Chime, cycle the door, then clear what this stop satisfied.  A stop
    /// made while idle satisfies both hall directions.
    async fn serve_floor(&self, floor: Floor, heading: CarDirection) {
        info!("Serving floor {}", floor);
        self.door.serve_arrival(self.service_dwell).await;

        self.store.clear(RequestKind::Inside, floor);
        match heading {
            CarDirection::Up => self.store.clear(RequestKind::Up, floor),
            CarDirection::Down => self.store.clear(RequestKind::Down, floor),
            CarDirection::Idle => {
                self.store.clear(RequestKind::Up, floor);
                self.store.clear(RequestKind::Down, floor);
            }
        }
    }

    fn set_direction(&self, next: CarDirection) {
        let prev = self.car.direction();
        if prev != next {
            info!("Direction: {:?} -> {:?}", prev, next);
            self.car.set_direction(next);
        }
    }

    /// Task body: step, then wait one poll period.  Never returns.
    pub async fn run(&self) {
        loop {
            if let Err(e) = self.step().await {
                warn!("Dispatcher step failed: {}", e);
            }
            Timer::after(self.poll).await;
        }
    }
}
