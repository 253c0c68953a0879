//! Monotonic clock for `std`
//!
//! `std::time::Instant` doesn't let us *just* get the raw value, so readings
//! are taken relative to an origin captured the first time any `StdClock` is
//! read. All `StdClock` readings in a process share this origin.
use std::{convert::TryFrom, time};

use super::Clock;
use crate::error::Result;

lazy_static::lazy_static! {
    static ref ORIGIN: time::Instant = {
        log::debug!("Capturing the origin of `StdClock`");
        time::Instant::now()
    };
}

/// The platform's monotonic clock, as exposed by `std::time::Instant`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdClock;

impl Clock for StdClock {
    #[inline]
    fn try_now_nanos(&self) -> Result<u64> {
        let origin = *ORIGIN;
        let nanos = time::Instant::now().duration_since(origin).as_nanos();
        // Doesn't overflow in 584 years of uptime
        Ok(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_decreases() {
        let mut last = StdClock.now();
        for _ in 0..1000 {
            let now = StdClock.now();
            assert!(now >= last, "{:?} < {:?}", now, last);
            last = now;
        }
    }

    #[test]
    fn test_elapsed_covers_sleep() {
        let start = crate::Instant::now();
        std::thread::sleep(time::Duration::from_millis(10));
        assert!(start.elapsed().as_nanos() >= 10_000_000);
        assert!(start.elapsed_secs() >= 0.01);
    }
}
