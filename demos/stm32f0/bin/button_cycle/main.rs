#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::pac::interrupt;

use rgb_direction_cycler::{ButtonConfig, ButtonFlag, ButtonInterrupt, LedCycler, Pull};
use stm32f0_demos::time_source::SysTickDelay;

mod hardware_setup;

/// Set by the EXTI handler, consumed by the cycle loop
static BUTTON_FLAG: ButtonFlag = ButtonFlag::new();

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    stm32f0_demos::time_source::tick();
}

/// Button edge on EXTI line 13
#[interrupt]
fn EXTI4_15() {
    stm32f0_demos::exti_button::on_exti4_15();
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RGB Direction Cycler ===");

    let mut hw = hardware_setup::init_hardware();

    // The Nucleo user button idles high and pulls PC13 low when pressed
    hw.button
        .enable_interrupt(ButtonConfig::for_pull(Pull::Up), &BUTTON_FLAG);

    let mut cycler = LedCycler::new(hw.leds, &BUTTON_FLAG);
    let mut delay = SysTickDelay::new();

    rprintln!("=== System Ready ===");
    rprintln!("Press the user button to reverse the colour cycle");

    cycler.run(&mut delay, |error, faults| {
        rprintln!("{}, cycle restarted (faults: {})", error, faults);
    })
}
