//! CBOR encoding of [`Instant`]s for persistence and transmission
//!
//! An instant is encoded as nothing but its reference point, a single CBOR
//! unsigned integer. Every `u64` is representable, so any instant survives
//! an encode-decode round trip unchanged.
use serde::Serialize;

use crate::{
    error::{Error, Result},
    time::Instant,
};

/// Indicates that decoding an encoded instant always yields an instant equal
/// to the original.
pub const ROUND_TRIP_SAFE: bool = true;

/// The largest number of bytes [`encode_into`] writes (an initial byte
/// followed by a 64-bit argument).
pub const MAX_ENCODED_LEN: usize = 9;

/// Encode `instant` into `buf`. Returns the number of bytes written.
pub fn encode_into(instant: Instant, buf: &mut [u8]) -> Result<usize> {
    let capacity = buf.len();
    let writer = serde_cbor::ser::SliceWrite::new(&mut buf[..]);
    let mut ser = serde_cbor::ser::Serializer::new(writer);
    // Writing an integer can only fail by running out of space
    instant
        .serialize(&mut ser)
        .map_err(|_| Error::BufferTooSmall(capacity))?;
    let num_bytes = ser.into_inner().bytes_written();

    log::trace!("encoded {:?} as {:?}", instant, &buf[..num_bytes]);

    Ok(num_bytes)
}

/// Decode an instant produced by [`encode_into`]. `buf` must contain exactly
/// one encoded value. The buffer is used as scratch space and its contents
/// are unspecified afterwards.
pub fn decode(buf: &mut [u8]) -> Result<Instant> {
    log::trace!("decoding {:?}", buf);

    serde_cbor::de::from_mut_slice(buf).map_err(|e| {
        log::debug!("rejected an encoded instant: {}", e);
        Error::Malformed
    })
}

/// Encode `instant` into a new `Vec`.
#[cfg(feature = "std")]
pub fn to_vec(instant: Instant) -> Vec<u8> {
    let mut buf = [0u8; MAX_ENCODED_LEN];
    match encode_into(instant, &mut buf) {
        Ok(num_bytes) => buf[..num_bytes].to_vec(),
        Err(e) => unreachable!("`MAX_ENCODED_LEN` is too small: {}", e),
    }
}

/// Like [`decode`], but doesn't need a mutable buffer.
#[cfg(feature = "std")]
pub fn from_slice(buf: &[u8]) -> Result<Instant> {
    serde_cbor::from_slice(buf).map_err(|e| {
        log::debug!("rejected an encoded instant: {}", e);
        Error::Malformed
    })
}
