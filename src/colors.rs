//! Colour output for the cycle.
//!
//! Lets a colour-capable LED (PWM channels, a smart LED, a simulator) stand in
//! for the plain 3-pin output by turning each [`LedMask`] into an `Srgb`.

use crate::cycler::MaskOutput;
use crate::types::LedMask;
use palette::Srgb;

pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);
pub const GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);
pub const BLUE: Srgb = Srgb::new(0.0, 0.0, 1.0);

/// Trait for abstracting RGB LED hardware.
///
/// Color components are in the range 0.0-1.0. Implementations should convert
/// these to their hardware's native format (e.g., PWM duty cycles, 8-bit RGB
/// values).
pub trait RgbLed {
    /// Sets the LED to the specified RGB color.
    fn set_color(&mut self, color: Srgb);
}

/// Converts a mask to a colour, each enabled channel at `brightness`.
#[inline]
pub fn mask_to_color(mask: LedMask, brightness: f32) -> Srgb {
    let level = |on: bool| if on { brightness.clamp(0.0, 1.0) } else { 0.0 };
    Srgb::new(level(mask.red()), level(mask.green()), level(mask.blue()))
}

/// [`MaskOutput`] adapter for an [`RgbLed`].
pub struct ColorLed<L: RgbLed> {
    led: L,
    brightness: f32,
}

impl<L: RgbLed> ColorLed<L> {
    /// Wraps `led` at full brightness.
    pub fn new(led: L) -> Self {
        Self::with_brightness(led, 1.0)
    }

    /// Wraps `led`, scaling enabled channels to `brightness` (0.0-1.0).
    pub fn with_brightness(led: L, brightness: f32) -> Self {
        Self {
            led,
            brightness: brightness.clamp(0.0, 1.0),
        }
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    pub fn into_inner(self) -> L {
        self.led
    }
}

impl<L: RgbLed> MaskOutput for ColorLed<L> {
    fn write_mask(&mut self, mask: LedMask) {
        self.led.set_color(mask_to_color(mask, self.brightness));
    }
}
