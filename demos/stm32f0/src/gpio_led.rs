use embedded_hal::digital::v2::OutputPin;
use rgb_direction_cycler::{LedMask, MaskOutput};

/// Three-pin RGB LED driven directly from GPIO outputs
///
/// Handles common anode/cathode logic: a common anode LED lights a channel
/// when its pin is driven low.
pub struct GpioRgbLed<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    red: R,
    green: G,
    blue: B,
    common_anode: bool,
}

impl<R, G, B> GpioRgbLed<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    /// Create a new RGB LED driver
    ///
    /// # Arguments
    /// * `red` - Output pin for the red channel (mask bit 0)
    /// * `green` - Output pin for the green channel (mask bit 1)
    /// * `blue` - Output pin for the blue channel (mask bit 2)
    /// * `common_anode` - true for common anode LED (inverted logic), false for common cathode
    pub fn new(red: R, green: G, blue: B, common_anode: bool) -> Self {
        Self {
            red,
            green,
            blue,
            common_anode,
        }
    }

    fn drive<P: OutputPin>(pin: &mut P, on: bool, common_anode: bool) {
        // GPIO writes on this part cannot fail
        let _ = if on != common_anode {
            pin.set_high()
        } else {
            pin.set_low()
        };
    }
}

impl<R, G, B> MaskOutput for GpioRgbLed<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    fn write_mask(&mut self, mask: LedMask) {
        Self::drive(&mut self.red, mask.red(), self.common_anode);
        Self::drive(&mut self.green, mask.green(), self.common_anode);
        Self::drive(&mut self.blue, mask.blue(), self.common_anode);
    }
}
