//! LED cycler driving the state machine from a polled button flag.
//!
//! Provides [`LedCycler`] which owns the LED output, consumes button events
//! raised from interrupt context and advances the cycle once per tick. Also
//! defines the [`MaskOutput`] trait for hardware abstraction.

use crate::event::ButtonFlag;
use crate::fsm::DirectionFsm;
use crate::time::{Delay, TimeDuration, tick_period};
use crate::types::{CycleError, Direction, LedMask};

/// Trait for abstracting the 3-channel LED output.
///
/// Implement this for your LED hardware (GPIO pins, a port register, PWM,
/// etc.). Handle any hardware errors internally - this method cannot fail.
pub trait MaskOutput {
    /// Drives each channel on or off according to `mask`.
    fn write_mask(&mut self, mask: LedMask);
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// State displayed during this tick.
    pub state: u8,
    /// Mask written to the output.
    pub mask: LedMask,
    /// Direction used to pick the next state.
    pub direction: Direction,
    /// State displayed on the following tick.
    pub next_state: u8,
    /// True if a button event reversed the direction on this tick.
    pub reversed: bool,
}

/// Cycles a single LED output through the 4-state sequence.
///
/// The cycler owns the output and the state machine. The button flag is
/// borrowed: the interrupt handler holds the other reference.
///
/// # Type Parameters
/// * `'f` - Lifetime of the button flag reference
/// * `O` - LED output implementation type
pub struct LedCycler<'f, O: MaskOutput> {
    output: O,
    flag: &'f ButtonFlag,
    fsm: DirectionFsm,
    last_mask: LedMask,
    fault_count: u32,
}

impl<'f, O: MaskOutput> LedCycler<'f, O> {
    /// Creates a cycler in state 0 moving up, with the LED turned off.
    pub fn new(output: O, flag: &'f ButtonFlag) -> Self {
        Self::with_fsm(output, flag, DirectionFsm::new())
    }

    /// Creates a cycler resuming from `fsm`, with the LED turned off.
    pub fn with_fsm(mut output: O, flag: &'f ButtonFlag, fsm: DirectionFsm) -> Self {
        output.write_mask(LedMask::OFF);

        Self {
            output,
            flag,
            fsm,
            last_mask: LedMask::OFF,
            fault_count: 0,
        }
    }

    /// Runs one iteration of the cycle without sleeping.
    ///
    /// Consumes a pending button event (reversing direction), writes the mask
    /// for the current state and moves to the next state.
    ///
    /// # Returns
    /// * `Ok(TickReport)` - The state shown and the transition taken
    /// * `Err(CycleError::InvalidState)` - The state was corrupt. Nothing was
    ///   written and the cycle restarts from state 0 on the next tick.
    pub fn tick(&mut self) -> Result<TickReport, CycleError> {
        let reversed = self.flag.take();
        if reversed {
            self.fsm.reverse();

            #[cfg(feature = "defmt")]
            defmt::debug!("Button event: direction now {}", self.fsm.direction());
        }

        let state = self.fsm.state();
        let direction = self.fsm.direction();

        let mask = self.fsm.advance().inspect_err(|_error| {
            self.fault_count = self.fault_count.saturating_add(1);

            #[cfg(feature = "defmt")]
            defmt::error!("{}, resetting cycle", _error);
        })?;

        self.output.write_mask(mask);
        self.last_mask = mask;

        Ok(TickReport {
            state,
            mask,
            direction,
            next_state: self.fsm.state(),
            reversed,
        })
    }

    /// Runs one iteration and then sleeps for the tick period.
    ///
    /// The sleep happens whether or not the tick faulted.
    pub fn poll<D: TimeDuration>(
        &mut self,
        delay: &mut impl Delay<D>,
    ) -> Result<TickReport, CycleError> {
        let result = self.tick();
        delay.delay(tick_period());
        result
    }

    /// Runs the cycle forever.
    ///
    /// Faults are recovered from inside [`tick`](Self::tick) and handed to
    /// `on_fault` together with the running fault count, so the loop never
    /// stops.
    pub fn run<D: TimeDuration>(
        &mut self,
        delay: &mut impl Delay<D>,
        mut on_fault: impl FnMut(&CycleError, u32),
    ) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "LED cycle started at state {}, direction {}",
            self.fsm.state(),
            self.fsm.direction()
        );

        loop {
            if let Err(error) = self.poll(delay) {
                on_fault(&error, self.fault_count);
            }
        }
    }

    /// Returns the state that the next tick will display.
    pub fn state(&self) -> u8 {
        self.fsm.state()
    }

    /// Returns the current direction of travel.
    pub fn direction(&self) -> Direction {
        self.fsm.direction()
    }

    /// Returns the last mask written to the output.
    pub fn last_mask(&self) -> LedMask {
        self.last_mask
    }

    /// Returns how many invalid states have been recovered from.
    pub fn fault_count(&self) -> u32 {
        self.fault_count
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Releases the LED output.
    pub fn into_output(self) -> O {
        self.output
    }
}
