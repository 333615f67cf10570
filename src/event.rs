//! Interrupt-to-main-loop signalling.
//!
//! [`ButtonFlag`] is the only state shared between the button interrupt and
//! the cycle loop. The interrupt side sets it, the loop side reads and clears
//! it. Only plain loads and stores are used, so the flag also works on cores
//! without atomic read-modify-write instructions (Cortex-M0).

use core::sync::atomic::{AtomicBool, Ordering};

/// Callback invoked by an interrupt source when its configured edge fires.
///
/// Implementations run in interrupt context: they must return quickly, must
/// not block and must not touch the LED output.
pub trait EdgeTrigger: Sync {
    /// Records that the edge occurred.
    fn trigger(&self);
}

/// Pending button event, set from interrupt context.
#[derive(Debug, Default)]
pub struct ButtonFlag {
    pending: AtomicBool,
}

impl ButtonFlag {
    /// Creates a cleared flag. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Marks an event as pending.
    #[inline]
    pub fn signal(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Returns true if an event is waiting to be consumed.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Consumes the pending event, if any.
    ///
    /// Any number of signals since the previous call are reported as a single
    /// event. A signal that lands between the load and the clear is folded
    /// into the event being returned.
    #[inline]
    pub fn take(&self) -> bool {
        if self.pending.load(Ordering::Acquire) {
            self.pending.store(false, Ordering::Release);
            true
        } else {
            false
        }
    }
}

impl EdgeTrigger for ButtonFlag {
    #[inline]
    fn trigger(&self) {
        self.signal();
    }
}
