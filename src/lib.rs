#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LedCycler`**: Owns the LED output and runs one cycle iteration per tick
//! - **`DirectionFsm`**: The 4-state cycle and its direction of travel
//! - **`ButtonFlag`**: Pending button event, set from interrupt context and polled by the loop
//! - **`MaskOutput`**: Trait to implement for your 3-channel LED hardware
//! - **`ButtonInterrupt`**: Trait to implement for your button's external interrupt
//! - **`Delay`**: Trait to implement for sleeping between ticks
//! - **`LedMask`**: 3-bit output value, bit 0 red, bit 1 green, bit 2 blue
//!
//! Each tick the cycler consumes at most one button event (reversing the
//! direction), writes the mask for the current state and moves to the next
//! state. Corrupt states are reported as `CycleError::InvalidState` and the
//! cycle restarts from state 0.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod button;
pub mod colors;
pub mod cycler;
pub mod event;
pub mod fsm;
pub mod time;
pub mod types;

pub use button::{ButtonConfig, ButtonInterrupt, Edge, Pull};
pub use colors::{BLACK, BLUE, ColorLed, GREEN, RED, RgbLed};
pub use cycler::{LedCycler, MaskOutput, TickReport};
pub use event::{ButtonFlag, EdgeTrigger};
pub use fsm::{DirectionFsm, next_state, output_mask};
pub use time::{Delay, TICK_PERIOD_MS, TimeDuration};
pub use types::{CycleError, Direction, INITIAL_STATE, LedMask, OUTPUT_TABLE, STATE_COUNT};
