//! Interrupt-fed request queue.
//!
//! Requests are produced by:
//! - GPIO ISRs (cabin, hall and door buttons)
//! - The host simulation's keyboard reader
//!
//! and consumed by the single [`Ingestor`](crate::ingestor::Ingestor) task.
//!
//! ```text
//! ┌─────────────┐     ┌────────────────┐     ┌──────────────┐
//! │ Cabin ISR   │────▶│                │     │              │
//! │ Hall ISR    │────▶│ RequestChannel │────▶│   Ingestor   │
//! │ Door ISR    │────▶│  (lock-free)   │     │   (polls)    │
//! └─────────────┘     └────────────────┘     └──────────────┘
//! ```
//!
//! The producer side is a lock-free MPMC push plus two atomics.  It never
//! blocks, never allocates and never runs a waker, so it is safe from a GPIO
//! ISR.  The consumer polls on a short timer instead of being woken.
//!
//! At most [`REQUEST_QUEUE_CAP`] requests are held.  A full queue drops the
//! event and bumps a counter.  Buttons produce a fresh edge on the next
//! press, so a lost event is recovered by pressing again.

use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use embassy_time::{Duration, Timer};
use heapless::mpmc::Q32;

use crate::request::FloorRequest;

/// Maximum number of pending requests (≥ 2 × the seven buttons).
pub const REQUEST_QUEUE_CAP: usize = 20;

/// How often an idle consumer re-checks the queue.
pub const DEQUEUE_POLL: Duration = Duration::from_millis(10);

/// The board's request queue, reachable from the GPIO ISRs.
pub static REQUESTS: RequestChannel = RequestChannel::new();

/// Bounded multi-producer, single-consumer FIFO of [`FloorRequest`]s.
pub struct RequestChannel {
    // Backing ring is larger than the cap; `len` enforces the cap.
    queue: Q32<FloorRequest>,
    len: AtomicUsize,
    dropped: AtomicU32,
}

impl RequestChannel {
    /// `const` so the channel can live in a `static` reachable from ISRs.
    pub const fn new() -> Self {
        Self {
            queue: Q32::new(),
            len: AtomicUsize::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    /// Push a request.
    /// Safe to call from ISR context (lock-free, no allocation, no wake-up).
    /// Returns `false` if the queue is full (request dropped).
    pub fn enqueue(&self, request: FloorRequest) -> bool {
        let reserved = self
            .len
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < REQUEST_QUEUE_CAP).then_some(n + 1)
            })
            .is_ok();

        if reserved {
            if self.queue.enqueue(request).is_ok() {
                return true;
            }
            self.len.fetch_sub(1, Ordering::AcqRel);
        }
        self.dropped.fetch_add(1, Ordering::Relaxed);
        false
    }

    /// Wait for the next request.  FIFO across all producers.
    pub async fn dequeue(&self) -> FloorRequest {
        loop {
            if let Some(request) = self.try_dequeue() {
                return request;
            }
            Timer::after(DEQUEUE_POLL).await;
        }
    }

    /// Pop the next request without waiting.
    pub fn try_dequeue(&self) -> Option<FloorRequest> {
        let request = self.queue.dequeue()?;
        self.len.fetch_sub(1, Ordering::AcqRel);
        Some(request)
    }

    /// Number of pending requests.
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Requests lost to a full queue since boot.
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl Default for RequestChannel {
    fn default() -> Self {
        Self::new()
    }
}
