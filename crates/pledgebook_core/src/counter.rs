//! Ambient block counter seam.
//!
//! # Responsibility
//! - Abstract the host-provided monotonically increasing counter that
//!   `schedule` converts offsets against.
//!
//! # Invariants
//! - Implementations must never decrease between observations.
//! - The service reads the counter exactly once per `schedule` call; the
//!   resulting target point is frozen at that value.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing counter supplied by the execution environment.
///
/// Injected into the service so tests and embedders control time
/// deterministically instead of reading an implicit global.
pub trait BlockCounter {
    /// Current counter value.
    fn current(&self) -> u64;
}

/// Manually advanced counter for tests, probes and embedders that drive
/// their own notion of block height.
#[derive(Debug, Default)]
pub struct ManualCounter {
    height: AtomicU64,
}

impl ManualCounter {
    /// Starts the counter at `height`.
    pub fn starting_at(height: u64) -> Self {
        Self {
            height: AtomicU64::new(height),
        }
    }

    /// Moves the counter forward by `blocks`.
    pub fn advance(&self, blocks: u64) {
        self.height.fetch_add(blocks, Ordering::SeqCst);
    }
}

impl BlockCounter for ManualCounter {
    fn current(&self) -> u64 {
        self.height.load(Ordering::SeqCst)
    }
}

impl<C: BlockCounter + ?Sized> BlockCounter for &C {
    fn current(&self) -> u64 {
        (**self).current()
    }
}

#[cfg(test)]
mod tests {
    use super::{BlockCounter, ManualCounter};

    #[test]
    fn manual_counter_starts_and_advances() {
        let counter = ManualCounter::starting_at(100);
        assert_eq!(counter.current(), 100);

        counter.advance(5);
        assert_eq!(counter.current(), 105);

        counter.advance(0);
        assert_eq!(counter.current(), 105);
    }

    #[test]
    fn reference_implements_the_trait() {
        fn read(counter: impl BlockCounter) -> u64 {
            counter.current()
        }

        let counter = ManualCounter::starting_at(7);
        assert_eq!(read(&counter), 7);
    }
}
