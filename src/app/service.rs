//! Lift controller: wires the core together and starts its tasks.
//!
//! [`LiftController`] owns the shared state and the task objects.  Hardware
//! enters only through the port traits, so the whole controller runs
//! against mock drives in tests.
//!
//! ```text
//!  RequestChannel ──▶ Ingestor ──▶ RequestStore ──▶ Dispatcher ──▶ Actuator ──▶ LiftDrive
//!                        │                             │
//!                        └──▶ DoorSignals ──▶ DoorCoordinator ──▶ DoorDrive
//!                                                      │
//!                            CarState ──▶ presentation ──▶ StatusDisplay / FloorIndicator
//! ```

use log::info;
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::actuator::Actuator;
use crate::car::{CarSnapshot, CarState};
use crate::config::ElevatorConfig;
use crate::dispatch::Dispatcher;
use crate::door::{DoorCoordinator, DoorSignals, DoorTiming};
use crate::drivers::task_pin::{self, spawn_on_core};
use crate::error::Result;
use crate::events::RequestChannel;
use crate::ingestor::Ingestor;
use crate::presentation;
use crate::store::RequestStore;

use super::ports::{DoorDrive, FloorIndicator, LiftDrive, StatusDisplay};

// ───────────────────────────────────────────────────────────────
// LiftController
// ───────────────────────────────────────────────────────────────

pub struct LiftController<D, G> {
    config: ElevatorConfig,
    store: Arc<RequestStore>,
    car: Arc<CarState>,
    signals: Arc<DoorSignals>,
    door: Arc<DoorCoordinator<G>>,
    dispatcher: Arc<Dispatcher<D, G>>,
}

impl<D, G> LiftController<D, G>
where
    D: LiftDrive + 'static,
    G: DoorDrive + 'static,
{
    /// Validate `config` and build the core around the two drives.
    ///
    /// Does **not** start anything. Call [`spawn`](Self::spawn) next.
    pub fn new(config: ElevatorConfig, drive: D, door_drive: G) -> Result<Self> {
        config.validate()?;

        let store = Arc::new(RequestStore::new(config.floor_count));
        let car = Arc::new(CarState::new(config.start_floor));
        let signals = Arc::new(DoorSignals::new());

        let actuator = Arc::new(Actuator::new(
            drive,
            Arc::clone(&car),
            config.floor_count,
            config.actuator_timeout(),
        ));
        let door = Arc::new(DoorCoordinator::new(
            door_drive,
            Arc::clone(&signals),
            Arc::clone(&car),
            DoorTiming {
                dwell: config.door_dwell(),
                poll: config.door_poll(),
                idle: config.door_idle(),
            },
        ));
        let dispatcher = Arc::new(Dispatcher::new(
            Arc::clone(&store),
            Arc::clone(&car),
            actuator,
            Arc::clone(&door),
            config.poll_interval(),
            config.service_dwell(),
        ));

        info!(
            "Lift controller: {} floors, car at floor {}",
            config.floor_count, config.start_floor
        );

        Ok(Self {
            config,
            store,
            car,
            signals,
            door,
            dispatcher,
        })
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn snapshot(&self) -> CarSnapshot {
        self.car.snapshot()
    }

    pub fn config(&self) -> &ElevatorConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<RequestStore> {
        &self.store
    }

    pub fn car(&self) -> &Arc<CarState> {
        &self.car
    }

    pub fn door(&self) -> &Arc<DoorCoordinator<G>> {
        &self.door
    }

    pub fn dispatcher(&self) -> &Arc<Dispatcher<D, G>> {
        &self.dispatcher
    }

    /// An ingestor draining `channel` into this controller.
    pub fn ingestor(&self, channel: &'static RequestChannel) -> Ingestor {
        Ingestor::new(channel, Arc::clone(&self.store), Arc::clone(&self.signals))
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Start the four controller tasks.  The two presentation refreshers
    /// share one executor on the presentation task.
    pub fn spawn<S, F>(
        &self,
        channel: &'static RequestChannel,
        display: S,
        indicator: F,
    ) -> [JoinHandle<()>; 4]
    where
        S: StatusDisplay + Send + 'static,
        F: FloorIndicator + Send + 'static,
    {
        let dispatcher = Arc::clone(&self.dispatcher);
        let dispatch_task = spawn_on_core(&task_pin::DISPATCHER, move || {
            futures_lite::future::block_on(dispatcher.run())
        });

        let ingestor = self.ingestor(channel);
        let ingest_task = spawn_on_core(&task_pin::INGESTOR, move || {
            futures_lite::future::block_on(ingestor.run())
        });

        let door = Arc::clone(&self.door);
        let door_task = spawn_on_core(&task_pin::DOOR, move || {
            futures_lite::future::block_on(door.run())
        });

        let car = Arc::clone(&self.car);
        let floor_count = self.config.floor_count;
        let display_period = self.config.display_refresh();
        let indicator_period = self.config.indicator_refresh();
        let present_task = spawn_on_core(&task_pin::PRESENTATION, move || {
            let executor: edge_executor::LocalExecutor<'_, 2> = edge_executor::LocalExecutor::new();
            executor
                .spawn(presentation::refresh_display(
                    Arc::clone(&car),
                    display,
                    display_period,
                ))
                .detach();
            executor
                .spawn(presentation::refresh_indicator(
                    car,
                    indicator,
                    floor_count,
                    indicator_period,
                ))
                .detach();
            futures_lite::future::block_on(executor.run(core::future::pending::<()>()));
        });

        info!("Lift controller tasks started");
        [dispatch_task, ingest_task, door_task, present_task]
    }
}
