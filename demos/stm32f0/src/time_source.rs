use core::cell::Cell;
use critical_section::Mutex;
use rgb_direction_cycler::{Delay, TimeDuration};

/// Global millisecond counter incremented by SysTick interrupt
///
/// Wraps after ~49.7 days of continuous operation.
static MILLIS_COUNTER: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Increments the global millisecond counter.
///
/// Call this from the SysTick exception handler every 1ms.
pub fn tick() {
    critical_section::with(|cs| {
        let counter = MILLIS_COUNTER.borrow(cs);
        counter.set(counter.get().wrapping_add(1));
    });
}

/// Milliseconds since startup
pub fn now_millis() -> u32 {
    critical_section::with(|cs| MILLIS_COUNTER.borrow(cs).get())
}

/// Duration type using milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HalDuration(pub u64);

impl TimeDuration for HalDuration {
    const ZERO: Self = HalDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        HalDuration(millis)
    }
}

/// Sleeps with `wfi` until the SysTick counter has advanced far enough
///
/// Any interrupt wakes the core, including the button EXTI, so the target
/// time is re-checked after every wake-up.
pub struct SysTickDelay;

impl SysTickDelay {
    pub fn new() -> Self {
        Self
    }
}

impl Delay<HalDuration> for SysTickDelay {
    fn delay(&mut self, duration: HalDuration) {
        let start = now_millis();
        let wait = duration.as_millis().min(u32::MAX as u64) as u32;

        while now_millis().wrapping_sub(start) < wait {
            cortex_m::asm::wfi();
        }
    }
}
