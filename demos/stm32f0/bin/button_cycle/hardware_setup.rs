use cortex_m::peripheral::SYST;
use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{Floating, Input, Output, PushPull, gpioa, gpiob},
    pac,
    prelude::*,
};

use stm32f0_demos::exti_button::ExtiButton;
use stm32f0_demos::gpio_led::GpioRgbLed;

/// Type alias for the RGB LED (red PA6, green PA7, blue PB0)
pub type Leds = GpioRgbLed<
    gpioa::PA6<Output<PushPull>>,
    gpioa::PA7<Output<PushPull>>,
    gpiob::PB0<Output<PushPull>>,
>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub leds: Leds,
    pub button: ExtiButton,
}

/// Initialize all hardware peripherals
///
/// - System clock configuration
/// - SysTick timer setup (1ms interrupts)
/// - LED GPIO outputs
/// - Button EXTI routing (interrupt stays masked until enabled)
pub fn init_hardware() -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    let mut rcc = configure_clock(&mut dp.FLASH, dp.RCC);
    configure_systick(&rcc, &mut cp.SYST);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpiob = dp.GPIOB.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    let leds = setup_leds(gpioa.pa6, gpioa.pa7, gpiob.pb0);
    let button = ExtiButton::new(gpioc.pc13, dp.EXTI, dp.SYSCFG);
    rprintln!("Button routed to EXTI line 13 (PC13)");

    HardwareContext { leds, button }
}

fn configure_clock(flash: &mut pac::FLASH, rcc: pac::RCC) -> stm32f0xx_hal::rcc::Rcc {
    let rcc = rcc.configure().freeze(flash);
    rprintln!("System clock configured: {} Hz", rcc.clocks.sysclk().0);
    rcc
}

/// Configure SysTick timer for 1ms interrupts
fn configure_systick(rcc: &stm32f0xx_hal::rcc::Rcc, syst: &mut SYST) {
    let sysclk_freq = rcc.clocks.sysclk();

    syst.set_clock_source(cortex_m::peripheral::syst::SystClkSource::Core);
    syst.set_reload((sysclk_freq.0 / 1_000) - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    rprintln!("SysTick configured for 1ms interrupts");
}

/// Configure the three LED channels as push-pull outputs (common anode)
fn setup_leds(
    pa6: gpioa::PA6<Input<Floating>>,
    pa7: gpioa::PA7<Input<Floating>>,
    pb0: gpiob::PB0<Input<Floating>>,
) -> Leds {
    let (red, green, blue) = cortex_m::interrupt::free(|cs| {
        (
            pa6.into_push_pull_output(cs),
            pa7.into_push_pull_output(cs),
            pb0.into_push_pull_output(cs),
        )
    });

    rprintln!("RGB LED configured on PA6, PA7, PB0");
    GpioRgbLed::new(red, green, blue, true)
}
