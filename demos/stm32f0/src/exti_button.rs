//! User button on PC13 delivered through EXTI line 13.
//!
//! The EXTI4_15 handler in the binary calls [`on_exti4_15`], which clears the
//! pending bit and forwards the edge to whatever trigger was registered with
//! [`ExtiButton::enable_interrupt`].

use core::cell::Cell;
use cortex_m::peripheral::NVIC;
use critical_section::Mutex;
use rgb_direction_cycler::{ButtonConfig, ButtonInterrupt, Edge, EdgeTrigger, Pull};
use stm32f0xx_hal::gpio::{Floating, Input, gpioc};
use stm32f0xx_hal::pac::{self, Interrupt};

/// PR is write-1-to-clear; this is the line 13 bit
const PR_LINE_13: u32 = 1 << 13;

static EDGE_TRIGGER: Mutex<Cell<Option<&'static dyn EdgeTrigger>>> =
    Mutex::new(Cell::new(None));

/// EXTI line 13 interrupt source for the Nucleo user button
pub struct ExtiButton {
    _pin: gpioc::PC13<Input<Floating>>,
    exti: pac::EXTI,
}

impl ExtiButton {
    /// Routes PC13 to EXTI line 13. Nothing fires until `enable_interrupt`.
    pub fn new(pin: gpioc::PC13<Input<Floating>>, exti: pac::EXTI, syscfg: pac::SYSCFG) -> Self {
        // SAFETY: single read-modify-write of the SYSCFG clock enable during
        // init, before any interrupt is unmasked
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.syscfgen().set_bit());

        syscfg.exticr4.modify(|_, w| w.exti13().pc13());

        Self { _pin: pin, exti }
    }

    fn apply_pull(pull: Pull) {
        // SAFETY: PC13 is owned by this driver, no other code touches its PUPDR bits
        let gpioc = unsafe { &*pac::GPIOC::ptr() };
        gpioc.pupdr.modify(|_, w| match pull {
            Pull::None => w.pupdr13().floating(),
            Pull::Up => w.pupdr13().pull_up(),
            Pull::Down => w.pupdr13().pull_down(),
        });
    }
}

impl ButtonInterrupt<'static> for ExtiButton {
    fn enable_interrupt(&mut self, config: ButtonConfig, trigger: &'static dyn EdgeTrigger) {
        Self::apply_pull(config.pull);

        critical_section::with(|cs| EDGE_TRIGGER.borrow(cs).set(Some(trigger)));

        let rising = config.edge == Edge::Rising;
        self.exti.rtsr.modify(|_, w| w.tr13().bit(rising));
        self.exti.ftsr.modify(|_, w| w.tr13().bit(!rising));

        // Drop any edge latched while the line was being configured
        self.exti.pr.write(|w| unsafe { w.bits(PR_LINE_13) });
        self.exti.imr.modify(|_, w| w.mr13().set_bit());

        // SAFETY: the handler only touches EXTI PR and the trigger registry
        unsafe { NVIC::unmask(Interrupt::EXTI4_15) };
    }

    fn disable_interrupt(&mut self) {
        self.exti.imr.modify(|_, w| w.mr13().clear_bit());

        critical_section::with(|cs| EDGE_TRIGGER.borrow(cs).set(None));
    }
}

/// Body of the EXTI4_15 interrupt handler.
///
/// Clears the pending bit for line 13 and forwards the edge. Bounded time,
/// no blocking, no GPIO writes.
pub fn on_exti4_15() {
    // SAFETY: PR is write-1-to-clear, writing only our bit leaves other lines untouched
    let exti = unsafe { &*pac::EXTI::ptr() };
    if exti.pr.read().bits() & PR_LINE_13 == 0 {
        return;
    }
    exti.pr.write(|w| unsafe { w.bits(PR_LINE_13) });

    critical_section::with(|cs| {
        if let Some(trigger) = EDGE_TRIGGER.borrow(cs).get() {
            trigger.trigger();
        }
    });
}
