//! monotime: monotonic nanosecond instants
//!
//! [`Instant`] is a reading of a monotonic clock, normalized to nanoseconds.
//! Subtracting instants yields a [`Duration`], clamped to zero when the
//! operands are out of order. Durations convert to and from `f64` seconds
//! with [`duration_to_secs`] and [`secs_to_duration`].
//!
//! Clocks are passed explicitly through the [`Clock`] trait. With the `std`
//! feature (enabled by default), [`Instant::now`] reads [`StdClock`].
#![cfg_attr(not(feature = "std"), no_std)]

pub mod clock;
pub mod codec;
mod error;
pub mod time;

pub use self::{
    clock::{Clock, ManualClock, Timebase},
    error::{Error, Result},
    time::{
        duration_between, duration_to_secs, secs_to_duration, try_secs_to_duration, Duration,
        Instant,
    },
};

#[cfg(feature = "std")]
pub use self::clock::StdClock;

#[cfg(feature = "target_cortex_m")]
pub use self::clock::SysTickClock;
