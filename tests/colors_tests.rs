//! Integration tests for colors module

mod common;
use common::*;

use palette::Srgb;
use rgb_direction_cycler::colors::{self, ColorLed};
use rgb_direction_cycler::{BLACK, BLUE, ButtonFlag, GREEN, LedCycler, LedMask, RED};

#[test]
fn table_masks_map_to_primary_colors() {
    assert!(colors_equal(colors::mask_to_color(LedMask::OFF, 1.0), BLACK));
    assert!(colors_equal(colors::mask_to_color(LedMask::RED, 1.0), RED));
    assert!(colors_equal(colors::mask_to_color(LedMask::GREEN, 1.0), GREEN));
    assert!(colors_equal(colors::mask_to_color(LedMask::BLUE, 1.0), BLUE));
}

#[test]
fn combined_mask_mixes_channels() {
    let white = colors::mask_to_color(LedMask::new(0b111), 1.0);
    assert!(colors_equal(white, Srgb::new(1.0, 1.0, 1.0)));

    let yellow = colors::mask_to_color(LedMask::new(0b011), 1.0);
    assert!(colors_equal(yellow, Srgb::new(1.0, 1.0, 0.0)));
}

#[test]
fn brightness_scales_enabled_channels_only() {
    let dim_green = colors::mask_to_color(LedMask::GREEN, 0.25);
    assert!(colors_equal(dim_green, Srgb::new(0.0, 0.25, 0.0)));

    let clamped = colors::mask_to_color(LedMask::RED, 3.0);
    assert!(colors_equal(clamped, RED));
}

#[test]
fn mask_discards_bits_above_blue() {
    assert_eq!(LedMask::new(0b1111_1001).bits(), 0b001);
    assert!(LedMask::new(0b1000).bits() == 0);
}

#[test]
fn color_led_follows_the_cycle() {
    let flag = ButtonFlag::new();
    let mut cycler = LedCycler::new(ColorLed::new(MockRgbLed::new()), &flag);

    for _ in 0..4 {
        cycler.tick().unwrap();
    }

    let history = cycler.output().led().color_history();
    let expected = [BLACK, BLACK, RED, GREEN, BLUE];

    assert_eq!(history.len(), expected.len());
    for (actual, expected) in history.iter().zip(expected) {
        assert!(colors_equal(*actual, expected));
    }
}

#[test]
fn color_led_brightness_is_clamped() {
    let led = ColorLed::with_brightness(MockRgbLed::new(), -1.0);
    assert_eq!(led.brightness(), 0.0);

    let led = ColorLed::with_brightness(MockRgbLed::new(), 0.5);
    assert_eq!(led.brightness(), 0.5);
}
