//! The error type shared by clocks, conversions, and the codec
//!
//! `thiserror` is only available with `std`. Without it, `Display` is
//! implemented by hand with the same messages.

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// The clock source can't supply a reading.
    #[cfg_attr(feature = "std", error("the monotonic clock is unavailable"))]
    ClockUnavailable,

    #[cfg_attr(feature = "std", error("negative seconds interval: {0}"))]
    NegativeSeconds(f64),

    #[cfg_attr(feature = "std", error("seconds interval is NaN"))]
    NotANumber,

    /// The output buffer (of the given size) can't hold the encoded value.
    #[cfg_attr(feature = "std", error("output buffer is too small ({0} bytes)"))]
    BufferTooSmall(usize),

    #[cfg_attr(feature = "std", error("malformed encoded instant"))]
    Malformed,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ClockUnavailable => f.write_str("the monotonic clock is unavailable"),
            Self::NegativeSeconds(x) => write!(f, "negative seconds interval: {}", x),
            Self::NotANumber => f.write_str("seconds interval is NaN"),
            Self::BufferTooSmall(x) => write!(f, "output buffer is too small ({} bytes)", x),
            Self::Malformed => f.write_str("malformed encoded instant"),
        }
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
