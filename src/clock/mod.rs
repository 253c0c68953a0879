//! Monotonic clock sources
//!
//! [`Instant`]s are only comparable when they were read from the same clock.
//! Each clock normalizes its native ticks to nanoseconds, so instants from
//! the same clock can be subtracted regardless of the hardware resolution.
use core::cell::Cell;

use crate::{
    error::{Error, Result},
    time::{Duration, Instant},
};

#[cfg(feature = "std")]
mod std_clock;
#[cfg(feature = "std")]
pub use self::std_clock::StdClock;

#[cfg(any(test, feature = "target_cortex_m"))]
mod counter;
#[cfg(feature = "target_cortex_m")]
mod systick;
#[cfg(feature = "target_cortex_m")]
pub use self::systick::SysTickClock;

/// A source of monotonic readings, measured in nanoseconds.
///
/// Readings must never decrease. Implementations are expected to be cheap
/// and non-blocking.
pub trait Clock {
    /// Read the clock.
    fn try_now_nanos(&self) -> Result<u64>;

    /// Read the clock.
    ///
    /// # Panics
    ///
    /// An unavailable clock is a fatal condition. This method panics if
    /// [`Self::try_now_nanos`] fails.
    fn now(&self) -> Instant {
        match self.try_now_nanos() {
            Ok(x) => Instant::from_nanos(x),
            Err(e) => {
                log::error!("Failed to read the monotonic clock: {}", e);
                panic!("monotonic clock unavailable: {}", e);
            }
        }
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn try_now_nanos(&self) -> Result<u64> {
        (**self).try_now_nanos()
    }
}

/// The ratio `numer / denom` converting a clock's native ticks to
/// nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timebase {
    numer: u32,
    denom: u32,
}

impl Timebase {
    /// Native ticks are already nanoseconds.
    pub const NANOS: Self = Self { numer: 1, denom: 1 };

    /// # Panics
    ///
    /// Panics if `denom` is zero.
    pub fn new(numer: u32, denom: u32) -> Self {
        assert_ne!(denom, 0, "timebase denominator must not be zero");
        Self { numer, denom }
    }

    /// The timebase of a counter incremented at `hz` hertz.
    ///
    /// # Panics
    ///
    /// Panics if `hz` is zero.
    pub fn from_hz(hz: u32) -> Self {
        Self::new(1_000_000_000, hz)
    }

    /// Convert native ticks to nanoseconds, saturating at `u64::MAX`.
    #[inline]
    pub fn ticks_to_nanos(self, ticks: u64) -> u64 {
        let nanos = ticks as u128 * self.numer as u128 / self.denom as u128;
        if nanos > u64::MAX as u128 {
            u64::MAX
        } else {
            nanos as u64
        }
    }
}

/// A clock that only moves when told to. Intended for tests and
/// simulations.
///
/// Unlike a real clock, [`ManualClock::set`] can move it backward.
#[derive(Debug)]
pub struct ManualClock {
    nanos: Cell<u64>,
    available: Cell<bool>,
}

impl ManualClock {
    #[inline]
    pub fn new(nanos: u64) -> Self {
        Self {
            nanos: Cell::new(nanos),
            available: Cell::new(true),
        }
    }

    #[inline]
    pub fn set(&self, nanos: u64) {
        self.nanos.set(nanos);
    }

    /// Move the clock forward, saturating at `u64::MAX`.
    #[inline]
    pub fn advance(&self, by: Duration) {
        self.nanos.set(self.nanos.get().saturating_add(by.as_nanos()));
    }

    /// Make subsequent reads fail with [`Error::ClockUnavailable`].
    #[inline]
    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }
}

impl Default for ManualClock {
    #[inline]
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clock for ManualClock {
    #[inline]
    fn try_now_nanos(&self) -> Result<u64> {
        if self.available.get() {
            Ok(self.nanos.get())
        } else {
            Err(Error::ClockUnavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timebase() {
        assert_eq!(Timebase::NANOS.ticks_to_nanos(12345), 12345);
        // 16 MHz: 62.5ns per tick
        assert_eq!(Timebase::from_hz(16_000_000).ticks_to_nanos(2), 125);
        assert_eq!(Timebase::from_hz(16_000_000).ticks_to_nanos(16_000_000), 1_000_000_000);
        // non-integral ratio
        assert_eq!(Timebase::new(125, 3).ticks_to_nanos(24), 1_000);
        assert_eq!(Timebase::new(2, 1).ticks_to_nanos(u64::MAX), u64::MAX);
    }

    #[test]
    #[should_panic(expected = "denominator")]
    fn test_timebase_zero_denom() {
        Timebase::new(1, 0);
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(5);
        assert_eq!(clock.now(), Instant::from_nanos(5));
        clock.advance(Duration::from_nanos(10));
        assert_eq!(clock.try_now_nanos(), Ok(15));
        clock.advance(Duration::from_nanos(u64::MAX));
        assert_eq!(clock.try_now_nanos(), Ok(u64::MAX));
        clock.set(3);
        assert_eq!((&clock).now(), Instant::from_nanos(3));
    }

    #[test]
    fn test_unavailable() {
        let clock = ManualClock::default();
        clock.set_available(false);
        assert_eq!(clock.try_now_nanos(), Err(Error::ClockUnavailable));
        clock.set_available(true);
        assert_eq!(clock.try_now_nanos(), Ok(0));
    }

    #[test]
    #[should_panic(expected = "monotonic clock unavailable")]
    fn test_unavailable_is_fatal() {
        let _ = env_logger::builder().is_test(true).try_init();
        let clock = ManualClock::default();
        clock.set_available(false);
        Instant::now_with(&clock);
    }

    #[test]
    fn test_dyn_clock() {
        let clock = ManualClock::new(77);
        let clock: &dyn Clock = &clock;
        assert_eq!(Instant::now_with(clock), Instant::from_nanos(77));
    }
}
