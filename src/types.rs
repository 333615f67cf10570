//! Core types shared by the state machine and its hardware seams.

/// Direction the LED cycle advances in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Step forward: 0 -> 1 -> 2 -> 3 -> 0.
    #[default]
    Up,

    /// Step backward: 0 -> 3 -> 2 -> 1 -> 0.
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// A 3-bit output mask, one bit per colour channel.
///
/// Bit 0 drives red, bit 1 green and bit 2 blue. Bits above bit 2 are
/// discarded on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedMask(u8);

impl LedMask {
    /// All channels off.
    pub const OFF: Self = LedMask(0b000);

    /// Red channel only.
    pub const RED: Self = LedMask(0b001);

    /// Green channel only.
    pub const GREEN: Self = LedMask(0b010);

    /// Blue channel only.
    pub const BLUE: Self = LedMask(0b100);

    const CHANNEL_BITS: u8 = 0b111;

    /// Creates a mask, keeping only the three channel bits.
    #[inline]
    pub const fn new(bits: u8) -> Self {
        LedMask(bits & Self::CHANNEL_BITS)
    }

    /// Returns the raw mask bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn red(self) -> bool {
        self.0 & Self::RED.0 != 0
    }

    #[inline]
    pub const fn green(self) -> bool {
        self.0 & Self::GREEN.0 != 0
    }

    #[inline]
    pub const fn blue(self) -> bool {
        self.0 & Self::BLUE.0 != 0
    }
}

impl From<LedMask> for u8 {
    fn from(mask: LedMask) -> Self {
        mask.0
    }
}

/// Output written for each state, indexed by state.
pub const OUTPUT_TABLE: [LedMask; 4] = [LedMask::OFF, LedMask::RED, LedMask::GREEN, LedMask::BLUE];

/// Number of states in the cycle.
pub const STATE_COUNT: u8 = OUTPUT_TABLE.len() as u8;

/// State the machine starts in and falls back to after a fault.
pub const INITIAL_STATE: u8 = 0;

/// State machine errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleError {
    /// State value outside the cycle. Only reachable through a logic defect
    /// or memory corruption.
    InvalidState(u8),
}

impl core::fmt::Display for CycleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CycleError::InvalidState(state) => {
                write!(
                    f,
                    "invalid state {} (expected 0-{})",
                    state,
                    STATE_COUNT - 1
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CycleError {}
