// Contract checks shared by every decoder and in-place writer.

use tracing::debug;

use crate::internal::error::{Error, LayoutError, Result};

/// Explains why `offset..offset + length` is not a valid range for a value of
/// `expected` bytes inside a buffer of `capacity` bytes.
///
/// A length mismatch takes precedence over a bounds violation. Returns `None`
/// when the range is valid.
pub fn explain_layout(
    capacity: usize,
    offset: usize,
    length: usize,
    expected: usize,
) -> Option<LayoutError> {
    if length != expected {
        return Some(LayoutError::LengthMismatch { length, expected });
    }
    explain_bounds(capacity, offset, length)
}

/// Explains why `offset..offset + length` does not fit in `capacity` bytes.
/// An offset sum that overflows `usize` is out of bounds as well.
pub fn explain_bounds(capacity: usize, offset: usize, length: usize) -> Option<LayoutError> {
    match offset.checked_add(length) {
        Some(end) if end <= capacity => None,
        _ => Some(LayoutError::OutOfBounds {
            offset,
            length,
            capacity,
        }),
    }
}

/// Validates a fixed-width decode range and returns the exact slice to read.
pub fn check_layout<'a>(
    type_name: &'static str,
    bytes: &'a [u8],
    offset: usize,
    length: usize,
    expected: usize,
) -> Result<&'a [u8]> {
    match explain_layout(bytes.len(), offset, length, expected) {
        None => Ok(&bytes[offset..offset + length]),
        Some(cause) => {
            debug!(type_name, offset, length, capacity = bytes.len(), %cause, "rejected decode");
            Err(Error::InvalidLayout(cause))
        }
    }
}

/// Validates a variable-length range and returns the slice it covers.
pub fn check_bounds<'a>(
    type_name: &'static str,
    bytes: &'a [u8],
    offset: usize,
    length: usize,
) -> Result<&'a [u8]> {
    match explain_bounds(bytes.len(), offset, length) {
        None => Ok(&bytes[offset..offset + length]),
        Some(cause) => {
            debug!(type_name, offset, length, capacity = bytes.len(), %cause, "rejected decode");
            Err(Error::InvalidLayout(cause))
        }
    }
}

/// Validates that `width` bytes can be written at `offset` and returns the
/// destination slice.
pub fn check_capacity<'a>(
    type_name: &'static str,
    buffer: &'a mut [u8],
    offset: usize,
    width: usize,
) -> Result<&'a mut [u8]> {
    let capacity = buffer.len();
    match capacity.checked_sub(offset) {
        Some(room) if room >= width => Ok(&mut buffer[offset..offset + width]),
        _ => {
            debug!(type_name, offset, width, capacity, "rejected in-place write");
            Err(Error::InsufficientCapacity {
                type_name,
                offset,
                width,
                capacity,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_layout() {
        assert_eq!(explain_layout(8, 0, 8, 8), None);
        assert_eq!(
            explain_layout(8, 0, 3, 8),
            Some(LayoutError::LengthMismatch {
                length: 3,
                expected: 8
            })
        );
        assert_eq!(
            explain_layout(4, 2, 4, 4),
            Some(LayoutError::OutOfBounds {
                offset: 2,
                length: 4,
                capacity: 4
            })
        );
        // Length is reported even when the range is also out of bounds.
        assert_eq!(
            explain_layout(2, 5, 3, 4),
            Some(LayoutError::LengthMismatch {
                length: 3,
                expected: 4
            })
        );
    }

    #[test]
    fn test_explain_bounds_overflow() {
        assert_eq!(
            explain_bounds(4, usize::MAX, 4),
            Some(LayoutError::OutOfBounds {
                offset: usize::MAX,
                length: 4,
                capacity: 4
            })
        );
        assert_eq!(explain_bounds(4, 4, 0), None);
    }

    #[test]
    fn test_check_layout_slice() {
        let data = [1u8, 2, 3, 4, 5, 6];
        assert_eq!(check_layout("int", &data, 2, 4, 4).unwrap(), &[3, 4, 5, 6]);
        assert!(check_layout("int", &data, 3, 4, 4).is_err());
    }

    #[test]
    fn test_check_capacity() {
        let mut buf = [0u8; 8];
        assert_eq!(check_capacity("int", &mut buf, 4, 4).unwrap().len(), 4);

        let err = check_capacity("int", &mut buf, 5, 4).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientCapacity {
                type_name: "int",
                offset: 5,
                width: 4,
                capacity: 8
            }
        );

        // Offset past the end of the buffer.
        assert!(check_capacity("int", &mut buf, 12, 4).is_err());
    }
}
