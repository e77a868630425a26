// Encode side of the primitive codec: fixed-width encodings, in-place writes
// into caller buffers, and appends to growable buffers.

pub mod basic;
pub mod buf;

pub use basic::*;
pub use buf::PutPrimitive;

use crate::codec::layout;
use crate::codec::types::Primitive;
use crate::internal::error::Result;

/// Encodes `value` into its fixed-width big-endian form.
#[inline]
pub fn encode<T: Primitive>(value: T) -> T::Encoded {
    value.to_be_encoded()
}

/// Writes the encoding of `value` into `buffer` at `offset`.
///
/// Returns the offset immediately after the written bytes so successive
/// fields can be packed by chaining calls. Nothing is written if the buffer
/// is too small.
pub fn put<T: Primitive>(buffer: &mut [u8], offset: usize, value: T) -> Result<usize> {
    let dst = layout::check_capacity(T::TYPE_NAME, buffer, offset, T::WIDTH)?;
    dst.copy_from_slice(value.to_be_encoded().as_ref());
    Ok(offset + T::WIDTH)
}
