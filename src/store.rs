//! Pending-request bookkeeping shared by the Ingestor and the Dispatcher.
//!
//! Three parallel boolean sets indexed by floor: hall calls going up, hall
//! calls going down, and cabin requests.  Every entry is an `AtomicBool`,
//! so a single flag is never read torn; no multi-entry transaction exists
//! or is needed.  The Ingestor only ever sets entries, the Dispatcher only
//! ever clears them, and only after it has served that floor.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};
use crate::request::{Floor, MAX_FLOORS};

/// Which of the three sets an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Hall call wanting to travel up.
    Up,
    /// Hall call wanting to travel down.
    Down,
    /// Cabin button.
    Inside,
}

impl RequestKind {
    pub const ALL: [RequestKind; 3] = [RequestKind::Up, RequestKind::Down, RequestKind::Inside];
}

type FlagSet = [AtomicBool; MAX_FLOORS + 1];

const fn empty_set() -> FlagSet {
    [const { AtomicBool::new(false) }; MAX_FLOORS + 1]
}

/// Per-floor pending flags.  Index 0 is unused so floors index directly.
pub struct RequestStore {
    floor_count: u8,
    up: FlagSet,
    down: FlagSet,
    inside: FlagSet,
}

impl RequestStore {
    /// Create an empty store for floors `1..=floor_count`.
    ///
    /// `floor_count` is clamped to [`MAX_FLOORS`]; the config validator
    /// rejects larger values before we get here.
    pub fn new(floor_count: u8) -> Self {
        debug_assert!(floor_count as usize <= MAX_FLOORS);
        Self {
            floor_count: floor_count.min(MAX_FLOORS as u8),
            up: empty_set(),
            down: empty_set(),
            inside: empty_set(),
        }
    }

    pub fn floor_count(&self) -> u8 {
        self.floor_count
    }

    /// `true` if `floor` lies inside the shaft.
    pub fn contains(&self, floor: Floor) -> bool {
        (1..=self.floor_count).contains(&floor)
    }

    /// Mark a request pending.  Out-of-range floors are rejected.
    pub fn record(&self, kind: RequestKind, floor: Floor) -> Result<()> {
        if !self.contains(floor) {
            return Err(Error::InvalidFloor(floor));
        }
        self.set(kind)[floor as usize].store(true, Ordering::Release);
        Ok(())
    }

    /// Mark a request served.  Out-of-range floors are ignored.
    pub fn clear(&self, kind: RequestKind, floor: Floor) {
        if self.contains(floor) {
            self.set(kind)[floor as usize].store(false, Ordering::Release);
        }
    }

    pub fn is_pending(&self, kind: RequestKind, floor: Floor) -> bool {
        self.contains(floor) && self.set(kind)[floor as usize].load(Ordering::Acquire)
    }

    /// Any of the three sets has `floor` pending.
    pub fn pending_at(&self, floor: Floor) -> bool {
        RequestKind::ALL
            .iter()
            .any(|&kind| self.is_pending(kind, floor))
    }

    /// Any request anywhere.
    pub fn any_pending(&self) -> bool {
        self.floors().any(|f| self.pending_at(f))
    }

    /// Any request of `kind` at any floor.
    pub fn any_of_kind(&self, kind: RequestKind) -> bool {
        self.floors().any(|f| self.is_pending(kind, f))
    }

    /// Any request strictly above `floor`.
    pub fn any_above(&self, floor: Floor) -> bool {
        self.floors().filter(|&f| f > floor).any(|f| self.pending_at(f))
    }

    /// Any request strictly below `floor`.
    pub fn any_below(&self, floor: Floor) -> bool {
        self.floors().filter(|&f| f < floor).any(|f| self.pending_at(f))
    }

    /// Number of pending entries across all three sets.
    pub fn pending_count(&self) -> usize {
        self.floors()
            .map(|f| {
                RequestKind::ALL
                    .iter()
                    .filter(|&&kind| self.is_pending(kind, f))
                    .count()
            })
            .sum()
    }

    fn floors(&self) -> impl Iterator<Item = Floor> {
        1..=self.floor_count
    }

    fn set(&self, kind: RequestKind) -> &FlagSet {
        match kind {
            RequestKind::Up => &self.up,
            RequestKind::Down => &self.down,
            RequestKind::Inside => &self.inside,
        }
    }
}
