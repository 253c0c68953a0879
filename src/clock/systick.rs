//! Monotonic clock for Cortex-M devices
//!
//! This clock uses SysTick. It's only a 24-bit down-counter, so the SysTick
//! exception counts wrap-arounds to extend it to 64 bits. The counter is
//! clocked by the core clock and converted to nanoseconds with a
//! [`Timebase`] derived from its frequency.
use core::sync::atomic::{AtomicUsize, Ordering};
use cortex_m::{
    peripheral::{syst, SYST},
    register::primask::{self, Primask},
};

use super::{
    counter::{compose_ticks, RELOAD},
    Clock, Timebase,
};
use crate::error::{Error, Result};

static CYCLE: AtomicUsize = AtomicUsize::new(0);

/// SysTick, extended to 64 bits. Created by [`SysTickClock::init`].
#[derive(Debug, Clone, Copy)]
pub struct SysTickClock {
    timebase: Timebase,
}

impl SysTickClock {
    /// Take over SysTick and start it as a free-running counter. `core_hz`
    /// is the core clock frequency.
    pub fn init(mut syst: SYST, core_hz: u32) -> Self {
        syst.enable_interrupt();
        syst.set_reload(RELOAD);
        syst.set_clock_source(syst::SystClkSource::Core);
        syst.clear_current();
        syst.enable_counter();

        log::debug!("SysTick is running as a monotonic clock at {} Hz", core_hz);

        Self {
            timebase: Timebase::from_hz(core_hz),
        }
    }
}

#[cortex_m_rt::exception]
fn SysTick() {
    // note: Armv6-M doesn't support `fetch_add`
    CYCLE.store(
        CYCLE.load(Ordering::Relaxed).wrapping_add(1),
        Ordering::Relaxed,
    );
}

/// Wrap-arounds are only counted while the SysTick exception can be taken.
/// `Primask::Active` means interrupts are enabled.
///
/// (Other things can mask the exception too, so this check is insufficient,
/// though.)
#[inline]
fn wraps_are_counted(primask: Primask) -> bool {
    primask.is_active()
}

fn read_ticks() -> u64 {
    loop {
        // `SYST::has_wrapped` takes `&mut self` for some mysterious reason, so
        // we are not using that
        let cycle = CYCLE.load(Ordering::Relaxed);
        cortex_m::asm::dmb(); // force ordering
        let value = SYST::get_current();
        cortex_m::asm::isb(); // force ordering and interrupt evaluation
        let cycle2 = CYCLE.load(Ordering::Relaxed);

        if cycle != cycle2 {
            // A wrap-around occurred - we can't tell if `value` belongs to
            // `cycle` or `cycle2`.
            continue;
        }

        return compose_ticks(cycle, value);
    }
}

impl Clock for SysTickClock {
    fn try_now_nanos(&self) -> Result<u64> {
        if !wraps_are_counted(primask::read()) {
            return Err(Error::ClockUnavailable);
        }

        Ok(self.timebase.ticks_to_nanos(read_ticks()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupts_enabled_is_readable() {
        assert!(wraps_are_counted(Primask::Active));
    }

    #[test]
    fn test_interrupts_masked_is_unavailable() {
        assert!(!wraps_are_counted(Primask::Inactive));
    }
}
