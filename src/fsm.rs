//! The direction-reversible 4-state cycle.
//!
//! [`DirectionFsm`] holds the current state and direction and knows nothing
//! about hardware or timing. [`next_state`] and [`output_mask`] are the two
//! fixed tables it is built from.

use crate::types::{CycleError, Direction, INITIAL_STATE, LedMask, OUTPUT_TABLE};

/// Computes the state that follows `state` when moving in `direction`.
///
/// # Returns
/// * `Ok(next)` - The next state in the cycle
/// * `Err(CycleError::InvalidState)` - `state` is not part of the cycle
pub fn next_state(state: u8, direction: Direction) -> Result<u8, CycleError> {
    let next = match (state, direction) {
        (0, Direction::Up) => 1,
        (0, Direction::Down) => 3,
        (1, Direction::Up) => 2,
        (1, Direction::Down) => 0,
        (2, Direction::Up) => 3,
        (2, Direction::Down) => 1,
        (3, Direction::Up) => 0,
        (3, Direction::Down) => 2,
        (invalid, _) => return Err(CycleError::InvalidState(invalid)),
    };
    Ok(next)
}

/// Looks up the LED mask displayed in `state`.
pub fn output_mask(state: u8) -> Result<LedMask, CycleError> {
    OUTPUT_TABLE
        .get(state as usize)
        .copied()
        .ok_or(CycleError::InvalidState(state))
}

/// State and direction of the LED cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirectionFsm {
    state: u8,
    direction: Direction,
}

impl DirectionFsm {
    /// Creates a machine in state 0 moving up.
    pub const fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            direction: Direction::Up,
        }
    }

    /// Restores a machine from raw values without validating `state`.
    ///
    /// An out-of-range state is reported by the next [`advance`](Self::advance).
    pub const fn from_raw(state: u8, direction: Direction) -> Self {
        Self { state, direction }
    }

    /// Returns the raw current state.
    pub fn state(&self) -> u8 {
        self.state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Flips the direction of travel.
    pub fn reverse(&mut self) {
        self.direction = self.direction.reversed();
    }

    /// Returns the mask for the current state and moves to the next state.
    ///
    /// On an invalid state the machine is reset to state 0, keeping its
    /// direction, and the error is returned.
    pub fn advance(&mut self) -> Result<LedMask, CycleError> {
        let result = output_mask(self.state)
            .and_then(|mask| next_state(self.state, self.direction).map(|next| (mask, next)));

        match result {
            Ok((mask, next)) => {
                self.state = next;
                Ok(mask)
            }
            Err(error) => {
                self.state = INITIAL_STATE;
                Err(error)
            }
        }
    }
}

impl Default for DirectionFsm {
    fn default() -> Self {
        Self::new()
    }
}
