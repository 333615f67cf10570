//! Shared test infrastructure for rgb-direction-cycler integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use rgb_direction_cycler::{
    ButtonConfig, ButtonInterrupt, Delay, EdgeTrigger, LedMask, MaskOutput, RgbLed, TimeDuration,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock delay that records every requested sleep instead of blocking
pub struct MockDelay {
    requests: heapless::Vec<TestDuration, 32>,
    limit: Option<usize>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self {
            requests: heapless::Vec::new(),
            limit: None,
        }
    }

    /// Panics on the sleep after `limit` recorded ones; stops a `run` loop
    pub fn panics_after(limit: usize) -> Self {
        Self {
            requests: heapless::Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn requests(&self) -> &[TestDuration] {
        &self.requests
    }

    pub fn total_millis(&self) -> u64 {
        self.requests.iter().map(|d| d.0).sum()
    }
}

impl Delay<TestDuration> for MockDelay {
    fn delay(&mut self, duration: TestDuration) {
        if self.limit == Some(self.requests.len()) {
            panic!("delay limit of {} reached", self.requests.len());
        }
        let _ = self.requests.push(duration);
    }
}

// ============================================================================
// Mock Outputs
// ============================================================================

/// Mock LED output that records all mask writes for testing
pub struct MockOutput {
    history: heapless::Vec<LedMask, 32>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    pub fn last_mask(&self) -> Option<LedMask> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[LedMask] {
        &self.history
    }

    /// Writes made after the power-on "all off" write
    pub fn tick_writes(&self) -> &[LedMask] {
        &self.history[1..]
    }
}

impl MaskOutput for MockOutput {
    fn write_mask(&mut self, mask: LedMask) {
        let _ = self.history.push(mask);
    }
}

/// Mock colour LED that records all colour changes for testing
pub struct MockRgbLed {
    color_history: heapless::Vec<Srgb, 32>,
}

impl MockRgbLed {
    pub fn new() -> Self {
        Self {
            color_history: heapless::Vec::new(),
        }
    }

    pub fn color_history(&self) -> &[Srgb] {
        &self.color_history
    }
}

impl RgbLed for MockRgbLed {
    fn set_color(&mut self, color: Srgb) {
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Mock Button Interrupt
// ============================================================================

/// Mock interrupt source; `fire` plays the role of the hardware edge
pub struct MockButton<'a> {
    config: Option<ButtonConfig>,
    trigger: Option<&'a dyn EdgeTrigger>,
}

impl<'a> MockButton<'a> {
    pub fn new() -> Self {
        Self {
            config: None,
            trigger: None,
        }
    }

    pub fn config(&self) -> Option<ButtonConfig> {
        self.config
    }

    /// Simulate the configured edge; returns false if no handler is registered
    pub fn fire(&self) -> bool {
        match self.trigger {
            Some(trigger) => {
                trigger.trigger();
                true
            }
            None => false,
        }
    }
}

impl<'a> ButtonInterrupt<'a> for MockButton<'a> {
    fn enable_interrupt(&mut self, config: ButtonConfig, trigger: &'a dyn EdgeTrigger) {
        self.config = Some(config);
        self.trigger = Some(trigger);
    }

    fn disable_interrupt(&mut self) {
        self.trigger = None;
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
