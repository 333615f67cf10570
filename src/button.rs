//! Button input configuration and the interrupt registration seam.

use crate::event::EdgeTrigger;

/// Internal resistor configuration for the button pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// Pin held high; a press pulls it to ground.
    Up,

    /// Pin held low; a press drives it high.
    Down,

    /// Floating input, biased by the external circuit.
    None,
}

/// Signal edge that fires the interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
}

/// Pin wiring for the button interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    pub pull: Pull,
    pub edge: Edge,
}

impl ButtonConfig {
    /// Creates a config with an explicit pull and edge.
    pub const fn new(pull: Pull, edge: Edge) -> Self {
        Self { pull, edge }
    }

    /// Creates a config that fires on the edge a press produces for `pull`.
    ///
    /// A pulled-up pin falls when pressed and a pulled-down pin rises. Floating
    /// inputs are assumed to be wired active low, like a pull-up.
    pub const fn for_pull(pull: Pull) -> Self {
        let edge = match pull {
            Pull::Up | Pull::None => Edge::Falling,
            Pull::Down => Edge::Rising,
        };
        Self { pull, edge }
    }
}

impl Default for ButtonConfig {
    /// Internal pull-up, interrupt on the falling edge.
    fn default() -> Self {
        Self::for_pull(Pull::Up)
    }
}

/// Trait for abstracting the button's edge-triggered interrupt.
///
/// Implement this for your HAL's external interrupt line. After
/// `enable_interrupt` returns, the interrupt handler must call
/// [`EdgeTrigger::trigger`] on `trigger` every time the configured edge is
/// detected, and do nothing else that can block.
pub trait ButtonInterrupt<'a> {
    /// Applies `config` to the pin and registers `trigger` as the edge callback.
    fn enable_interrupt(&mut self, config: ButtonConfig, trigger: &'a dyn EdgeTrigger);

    /// Stops delivering edge callbacks.
    fn disable_interrupt(&mut self);
}
