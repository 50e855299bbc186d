//! Exclusive ownership of car motion.
//!
//! [`Actuator::move_to`] is the only path that moves the car or updates its
//! floor.  The drive sits inside an async mutex: a second caller waits until
//! the first move has finished, and the floor is written while the lock is
//! still held, after the physical move completes.
//!
//! The move itself is a blocking call into the [`LiftDrive`] port.  Every
//! caller runs on its own task thread, so blocking there only stalls the
//! mover; higher-priority tasks still preempt it.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, with_timeout};
use log::info;
use std::sync::Arc;

use crate::app::ports::LiftDrive;
use crate::car::CarState;
use crate::error::{Error, Result};
use crate::request::Floor;

pub struct Actuator<D> {
    drive: Mutex<CriticalSectionRawMutex, D>,
    car: Arc<CarState>,
    floor_count: u8,
    busy_timeout: Option<Duration>,
}

impl<D: LiftDrive> Actuator<D> {
    /// Wrap `drive`.  With `busy_timeout = None` callers wait indefinitely
    /// for motion ownership.
    pub fn new(
        drive: D,
        car: Arc<CarState>,
        floor_count: u8,
        busy_timeout: Option<Duration>,
    ) -> Self {
        Self {
            drive: Mutex::new(drive),
            car,
            floor_count,
            busy_timeout,
        }
    }

    /// Move the car to `target`.
    ///
    /// Returns immediately, without taking the lock, if the car is already
    /// there.  Fails with [`Error::ActuatorBusyTimeout`] only when a bounded
    /// wait is configured and ownership was not granted in time.
    pub async fn move_to(&self, target: Floor) -> Result<()> {
        if !(1..=self.floor_count).contains(&target) {
            return Err(Error::InvalidFloor(target));
        }
        if target == self.car.floor() {
            return Ok(());
        }

        let mut drive = match self.busy_timeout {
            None => self.drive.lock().await,
            Some(limit) => with_timeout(limit, self.drive.lock())
                .await
                .map_err(|_| Error::ActuatorBusyTimeout)?,
        };

        // Another holder may have moved the car while we waited.
        let from = self.car.floor();
        if from == target {
            return Ok(());
        }

        info!("Moving from floor {} to {}", from, target);
        drive.travel(from, target);
        self.car.set_floor(target);
        Ok(())
    }

    /// Current floor as last written by a completed move.
    pub fn current_floor(&self) -> Floor {
        self.car.floor()
    }
}
