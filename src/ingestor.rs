//! Request ingestion: drain the [`RequestChannel`] and fold each request
//! into the pending sets.
//!
//! | Request                          | Effect                         |
//! |----------------------------------|--------------------------------|
//! | cabin, floor `n`                 | `inside[n]`                    |
//! | hall, floor `n`, `Up`            | `up[n]`                        |
//! | hall, floor `n`, `Down`          | `down[n]`                      |
//! | hall, `None` direction           | ignored                        |
//! | door open / door close           | door signal                    |
//! | floor outside `1..=floor_count`  | rejected, logged               |

use log::{debug, info, warn};
use std::sync::Arc;

use crate::door::DoorSignals;
use crate::error::Result;
use crate::events::RequestChannel;
use crate::request::{CallDirection, DoorSignal, Floor, FloorRequest, Origin, Target};
use crate::store::{RequestKind, RequestStore};

/// What a single request turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folded {
    Recorded(RequestKind, Floor),
    DoorOpen,
    DoorClose,
    Ignored,
}

pub struct Ingestor {
    channel: &'static RequestChannel,
    store: Arc<RequestStore>,
    door: Arc<DoorSignals>,
}

impl Ingestor {
    pub fn new(
        channel: &'static RequestChannel,
        store: Arc<RequestStore>,
        door: Arc<DoorSignals>,
    ) -> Self {
        Self {
            channel,
            store,
            door,
        }
    }

    /// Apply one request to the store / door signals.
    pub fn fold(&self, request: FloorRequest) -> Result<Folded> {
        let floor = match request.target {
            Target::Door(DoorSignal::Open) => {
                self.door.request_open();
                return Ok(Folded::DoorOpen);
            }
            Target::Door(DoorSignal::Close) => {
                self.door.request_close();
                return Ok(Folded::DoorClose);
            }
            Target::Floor(floor) => floor,
        };

        let kind = match (request.origin, request.direction) {
            (Origin::InsideCar, _) => RequestKind::Inside,
            (Origin::OutsideCall, CallDirection::Up) => RequestKind::Up,
            (Origin::OutsideCall, CallDirection::Down) => RequestKind::Down,
            (Origin::OutsideCall, CallDirection::None) => {
                debug!("Hall call at floor {} without direction ignored", floor);
                return Ok(Folded::Ignored);
            }
        };

        self.store.record(kind, floor)?;
        match kind {
            RequestKind::Inside => info!("Inside request: floor {}", floor),
            RequestKind::Up => info!("Outside request: floor {} up", floor),
            RequestKind::Down => info!("Outside request: floor {} down", floor),
        }
        Ok(Folded::Recorded(kind, floor))
    }

    /// Task body.  Never returns.
    pub async fn run(&self) {
        loop {
            let request = self.channel.dequeue().await;
            if let Err(e) = self.fold(request) {
                warn!("Request {:?} rejected: {}", request, e);
            }
        }
    }
}
