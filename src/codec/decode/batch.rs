use crate::codec::decode::from_validated;
use crate::codec::layout;
use crate::codec::types::Primitive;
use crate::internal::error::{Error, LayoutError, Result};

/// Decodes `count` contiguous values of `T` from `bytes`.
///
/// `bytes.len()` must be exactly `count * T::WIDTH`; the mismatch is reported
/// with both total lengths.
pub fn decode_batch<T: Primitive>(bytes: &[u8], count: usize) -> Result<Vec<T>> {
    let expected = count.saturating_mul(T::WIDTH);
    if let Some(cause) = layout::explain_layout(bytes.len(), 0, bytes.len(), expected) {
        tracing::debug!(type_name = T::TYPE_NAME, count, length = bytes.len(), %cause, "rejected batch decode");
        return Err(Error::InvalidLayout(cause));
    }

    bytes.chunks_exact(T::WIDTH).map(from_validated::<T>).collect()
}

/// Number of `T` values held by `bytes`.
///
/// Fails when `bytes` ends in a partial value; the error's `expected` is the
/// length that would complete the last value, as in [`decode_batch`].
pub fn batch_len<T: Primitive>(bytes: &[u8]) -> Result<usize> {
    if bytes.len() % T::WIDTH != 0 {
        let whole = bytes.len() / T::WIDTH;
        return Err(Error::InvalidLayout(LayoutError::LengthMismatch {
            length: bytes.len(),
            expected: (whole + 1).saturating_mul(T::WIDTH),
        }));
    }
    Ok(bytes.len() / T::WIDTH)
}
