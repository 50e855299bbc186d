//! Door coordination.
//!
//! The door drive lives behind an async mutex.  Whoever holds the lock owns
//! the door:
//!
//! - the manual-open task runs a full open → dwell → close cycle under it
//! - the dispatcher runs the arrival cycle under it
//! - the dispatcher also holds it for the whole of every car move
//!   ([`DoorCoordinator::hold_closed`]), so the door can never open while
//!   the car is travelling
//!
//! A manual close signal cuts the dwell of whichever cycle is currently
//! running.  A close with no open cycle is discarded at the start of the
//! next one.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer, with_timeout};
use log::{debug, info};
use std::sync::Arc;

use crate::app::ports::DoorDrive;
use crate::car::CarState;

/// Wake-up flags for the manual door buttons.  Signals coalesce: several
/// presses before the door task gets the door count as one.
pub struct DoorSignals {
    open: Signal<CriticalSectionRawMutex, ()>,
    close: Signal<CriticalSectionRawMutex, ()>,
}

impl DoorSignals {
    pub const fn new() -> Self {
        Self {
            open: Signal::new(),
            close: Signal::new(),
        }
    }

    pub fn request_open(&self) {
        self.open.signal(());
    }

    pub fn request_close(&self) {
        self.close.signal(());
    }

    /// An open request is waiting to be picked up.
    pub fn open_pending(&self) -> bool {
        self.open.signaled()
    }
}

impl Default for DoorSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing for the manual-open task.
#[derive(Debug, Clone, Copy)]
pub struct DoorTiming {
    /// How long a manually opened door stays open.
    pub dwell: Duration,
    /// Bounded wait for an open signal per loop iteration.
    pub poll: Duration,
    /// Pause between iterations.
    pub idle: Duration,
}

pub struct DoorCoordinator<G> {
    signals: Arc<DoorSignals>,
    drive: Mutex<CriticalSectionRawMutex, G>,
    car: Arc<CarState>,
    timing: DoorTiming,
}

impl<G: DoorDrive> DoorCoordinator<G> {
    pub fn new(drive: G, signals: Arc<DoorSignals>, car: Arc<CarState>, timing: DoorTiming) -> Self {
        Self {
            signals,
            drive: Mutex::new(drive),
            car,
            timing,
        }
    }

    /// Drive the door shut and mark it closed.  Run once at boot.
    pub async fn reset(&self) {
        let mut drive = self.drive.lock().await;
        drive.close();
        self.car.set_door_open(false);
    }

    /// Arrival at a served floor: chime, then a full door cycle.
    pub async fn serve_arrival(&self, dwell: Duration) {
        let mut drive = self.drive.lock().await;
        drive.chime();
        self.cycle_locked(&mut drive, dwell).await;
    }

    /// Take door ownership and keep it until the guard drops.  The door is
    /// closed whenever this returns.
    pub async fn hold_closed(&self) -> MutexGuard<'_, CriticalSectionRawMutex, G> {
        self.drive.lock().await
    }

    /// One open → dwell → close cycle.  The dwell ends early on a manual
    /// close signal.  Open presses made while waiting for the door are
    /// served by this cycle.
    pub async fn cycle(&self, dwell: Duration) {
        let mut drive = self.drive.lock().await;
        self.signals.open.reset();
        self.cycle_locked(&mut drive, dwell).await;
    }

    async fn cycle_locked(&self, drive: &mut G, dwell: Duration) {
        // Stale close presses from before this cycle do not count.
        self.signals.close.reset();

        drive.open();
        self.car.set_door_open(true);
        info!("Door opened");

        if with_timeout(dwell, self.signals.close.wait()).await.is_ok() {
            debug!("Door dwell cut short");
        }

        drive.close();
        self.car.set_door_open(false);
        info!("Door closed");
    }

    /// Manual-open task body: wait (bounded) for an open signal, run one
    /// cycle, pause briefly, repeat.  Never returns.
    pub async fn run(&self) {
        loop {
            if with_timeout(self.timing.poll, self.signals.open.wait())
                .await
                .is_ok()
            {
                self.cycle(self.timing.dwell).await;
            }
            Timer::after(self.timing.idle).await;
        }
    }

    pub fn door_open(&self) -> bool {
        self.car.door_open()
    }
}
