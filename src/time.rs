//! Monotonic instants, nanosecond durations, and conversions to and from
//! seconds.
use core::{convert::TryFrom, fmt, ops};
use serde::{Deserialize, Serialize};

use crate::{
    clock::Clock,
    error::{Error, Result},
};

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Represents a point of time on a monotonic clock, measured in nanoseconds.
///
/// The value is the clock reading taken when the instant was created. It is
/// only meaningful relative to other instants read from the same clock.
#[derive(Default, Copy, Clone, Deserialize, Serialize, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[serde(transparent)]
pub struct Instant(u64);

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.0)
    }
}

/// Represents a duration, measured in nanoseconds.
#[derive(Default, Copy, Clone, Serialize, Deserialize, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[serde(transparent)]
pub struct Duration(u64);

/// Picks a unit (`ns`, `μs`, `ms`, or `s`) and prints the value truncated to
/// a whole number in that unit, e.g., 9.99ms prints as `9ms`.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (value, suffix) = if self.0 < 5_000 {
            (self.0, "ns")
        } else if self.0 < 5_000_000 {
            (self.0 / 1_000, "μs")
        } else if self.0 < 5_000_000_000 {
            (self.0 / 1_000_000, "ms")
        } else {
            (self.0 / 1_000_000_000, "s")
        };
        write!(f, "{}{}", value, suffix)
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.0)
    }
}

impl ops::Add for Duration {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl ops::AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl ops::Sub for Duration {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

/// Equivalent to [`Instant::duration_since`]. Never underflows.
impl ops::Sub for Instant {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.duration_since(rhs)
    }
}

/// Equivalent to [`Instant::add_duration`]. Saturates at `u64::MAX`.
impl ops::Add<Duration> for Instant {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        self.add_duration(rhs)
    }
}

impl Instant {
    /// Read the platform's monotonic clock ([`crate::StdClock`]).
    #[cfg(feature = "std")]
    #[inline]
    pub fn now() -> Self {
        crate::clock::StdClock.now()
    }

    /// Read the given clock.
    ///
    /// # Panics
    ///
    /// Panics if `clock` is unavailable. See [`Clock::now`].
    #[inline]
    pub fn now_with<C: Clock + ?Sized>(clock: &C) -> Self {
        clock.now()
    }

    #[inline]
    pub const fn from_nanos(x: u64) -> Self {
        Self(x)
    }

    #[inline]
    pub const fn from_instant(other: &Self) -> Self {
        Self(other.0)
    }

    /// Get the reference point in nanoseconds.
    #[inline]
    pub const fn as_nanos(self) -> u64 {
        self.0
    }

    /// Get the amount of time elapsed from `earlier` to `self`.
    ///
    /// Returns zero if `earlier` is actually later than `self`.
    #[inline]
    pub const fn duration_since(self, earlier: Self) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }

    /// [`Self::duration_since`] in seconds.
    #[inline]
    pub fn secs_since(self, earlier: Self) -> f64 {
        self.duration_since(earlier).as_secs_f64()
    }

    /// Get the instant `nanos` nanoseconds after `self`, saturating at
    /// `u64::MAX`.
    #[inline]
    pub const fn add_nanos(self, nanos: u64) -> Self {
        Self(self.0.saturating_add(nanos))
    }

    /// Like [`Self::add_nanos`], but returns `None` on overflow.
    #[inline]
    pub fn checked_add_nanos(self, nanos: u64) -> Option<Self> {
        self.0.checked_add(nanos).map(Self)
    }

    #[inline]
    pub const fn add_duration(self, duration: Duration) -> Self {
        self.add_nanos(duration.0)
    }

    /// Get the instant `secs` seconds after `self`. The interval is
    /// truncated to whole nanoseconds.
    ///
    /// # Panics
    ///
    /// Panics if `secs` is negative or NaN.
    #[inline]
    pub fn add_secs(self, secs: f64) -> Self {
        self.add_nanos(secs_to_duration(secs))
    }

    /// Get the amount of time elapsed since `self` was read from
    /// [`crate::StdClock`].
    #[cfg(feature = "std")]
    #[inline]
    pub fn elapsed(self) -> Duration {
        Self::now().duration_since(self)
    }

    #[cfg(feature = "std")]
    #[inline]
    pub fn elapsed_secs(self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Get the amount of time elapsed since `self` according to `clock`.
    #[inline]
    pub fn elapsed_with<C: Clock + ?Sized>(self, clock: &C) -> Duration {
        clock.now().duration_since(self)
    }

    #[inline]
    pub fn elapsed_secs_with<C: Clock + ?Sized>(self, clock: &C) -> f64 {
        self.elapsed_with(clock).as_secs_f64()
    }
}

impl Duration {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn from_nanos(x: u64) -> Self {
        Self(x)
    }

    #[inline]
    pub const fn as_nanos(self) -> u64 {
        self.0
    }

    /// # Panics
    ///
    /// Panics if `secs` is negative or NaN.
    #[inline]
    pub fn from_secs_f64(secs: f64) -> Self {
        Self(secs_to_duration(secs))
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        duration_to_secs(self.0)
    }
}

impl From<Duration> for core::time::Duration {
    #[inline]
    fn from(x: Duration) -> Self {
        core::time::Duration::from_nanos(x.0)
    }
}

/// Saturates at `u64::MAX` nanoseconds (about 584 years).
impl From<core::time::Duration> for Duration {
    #[inline]
    fn from(x: core::time::Duration) -> Self {
        Self(u64::try_from(x.as_nanos()).unwrap_or(u64::MAX))
    }
}

/// Get the amount of time elapsed from `earlier` to `later`, or zero if
/// `later` precedes `earlier`.
#[inline]
pub fn duration_between(earlier: Instant, later: Instant) -> Duration {
    later.duration_since(earlier)
}

/// Convert nanoseconds to seconds. Precision is lost above 2<sup>53</sup>
/// nanoseconds.
#[inline]
pub fn duration_to_secs(nanos: u64) -> f64 {
    nanos as f64 / NANOS_PER_SEC
}

/// Convert seconds to nanoseconds, truncating toward zero.
///
/// # Panics
///
/// Panics if `secs` is negative or NaN. Use [`try_secs_to_duration`] to
/// handle these cases.
pub fn secs_to_duration(secs: f64) -> u64 {
    match try_secs_to_duration(secs) {
        Ok(x) => x,
        Err(e) => panic!("invalid seconds interval: {}", e),
    }
}

/// Convert seconds to nanoseconds, truncating toward zero. Values beyond the
/// range of `u64` (including positive infinity) saturate at `u64::MAX`.
pub fn try_secs_to_duration(secs: f64) -> Result<u64> {
    if secs.is_nan() {
        return Err(Error::NotANumber);
    }
    if secs < 0.0 {
        return Err(Error::NegativeSeconds(secs));
    }
    // `as` truncates toward zero and saturates
    Ok((secs * NANOS_PER_SEC) as u64)
}
