#![no_std]

pub mod exti_button;
pub mod gpio_led;
pub mod time_source;
