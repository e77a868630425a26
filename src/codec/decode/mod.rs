// Decode side of the primitive codec. Every entry point validates the
// requested range before a single byte is read.

pub mod basic;
pub mod batch;
pub mod reader;

pub use basic::*;
pub use batch::decode_batch;
pub use reader::FieldReader;

use crate::codec::layout;
use crate::codec::types::Primitive;
use crate::internal::error::{Error, LayoutError, Result};

/// Decodes a `T` from the start of `bytes`.
#[inline]
pub fn decode<T: Primitive>(bytes: &[u8]) -> Result<T> {
    decode_range(bytes, 0, T::WIDTH)
}

/// Decodes a `T` starting at `offset`, assuming `T::WIDTH` bytes are available.
#[inline]
pub fn decode_at<T: Primitive>(bytes: &[u8], offset: usize) -> Result<T> {
    decode_range(bytes, offset, T::WIDTH)
}

/// Decodes a `T` from `bytes[offset..offset + length]`.
///
/// `length` must equal `T::WIDTH` and the range must lie inside `bytes`;
/// otherwise the call fails with `Error::InvalidLayout` naming the cause.
pub fn decode_range<T: Primitive>(bytes: &[u8], offset: usize, length: usize) -> Result<T> {
    let src = layout::check_layout(T::TYPE_NAME, bytes, offset, length, T::WIDTH)?;
    from_validated(src)
}

/// Converts a `T::WIDTH` slice into the fixed-size encoding and decodes it.
pub(crate) fn from_validated<T: Primitive>(src: &[u8]) -> Result<T> {
    let encoded = <T::Encoded as TryFrom<&[u8]>>::try_from(src).map_err(|_| {
        Error::InvalidLayout(LayoutError::LengthMismatch {
            length: src.len(),
            expected: T::WIDTH,
        })
    })?;
    Ok(T::from_be_encoded(encoded))
}
