use crate::codec::decode::{decode_at, decode_range};
use crate::codec::sizes::{
    SIZEOF_BOOLEAN, SIZEOF_BYTE, SIZEOF_CHAR, SIZEOF_INT, SIZEOF_LONG, SIZEOF_SHORT,
};
use crate::internal::error::Result;

/// Converts a byte array to a long value. Reverses [`long_to_bytes`](crate::codec::encode::long_to_bytes).
pub fn to_long(bytes: &[u8]) -> Result<i64> {
    to_long_range(bytes, 0, SIZEOF_LONG)
}

/// Converts the eight bytes at `offset` to a long value.
pub fn to_long_at(bytes: &[u8], offset: usize) -> Result<i64> {
    to_long_range(bytes, offset, SIZEOF_LONG)
}

/// Converts a byte range to a long value. `length` must be [`SIZEOF_LONG`].
pub fn to_long_range(bytes: &[u8], offset: usize, length: usize) -> Result<i64> {
    decode_range(bytes, offset, length)
}

/// Converts a byte array to an int value.
pub fn to_int(bytes: &[u8]) -> Result<i32> {
    to_int_range(bytes, 0, SIZEOF_INT)
}

/// Converts the four bytes at `offset` to an int value.
pub fn to_int_at(bytes: &[u8], offset: usize) -> Result<i32> {
    to_int_range(bytes, offset, SIZEOF_INT)
}

/// Converts a byte range to an int value. `length` must be [`SIZEOF_INT`].
pub fn to_int_range(bytes: &[u8], offset: usize, length: usize) -> Result<i32> {
    decode_range(bytes, offset, length)
}

/// Presumes a float encoded as IEEE 754 single format bits.
pub fn to_float(bytes: &[u8]) -> Result<f32> {
    to_float_at(bytes, 0)
}

/// Reads a float from the four bytes at `offset`.
pub fn to_float_at(bytes: &[u8], offset: usize) -> Result<f32> {
    decode_at(bytes, offset)
}

/// Reads a float from a byte range. `length` must be [`SIZEOF_FLOAT`](crate::codec::sizes::SIZEOF_FLOAT).
pub fn to_float_range(bytes: &[u8], offset: usize, length: usize) -> Result<f32> {
    decode_range(bytes, offset, length)
}

/// Presumes a double encoded as IEEE 754 double format bits.
pub fn to_double(bytes: &[u8]) -> Result<f64> {
    to_double_at(bytes, 0)
}

/// Reads a double from the eight bytes at `offset`.
pub fn to_double_at(bytes: &[u8], offset: usize) -> Result<f64> {
    decode_at(bytes, offset)
}

/// Reads a double from a byte range. `length` must be [`SIZEOF_DOUBLE`](crate::codec::sizes::SIZEOF_DOUBLE).
pub fn to_double_range(bytes: &[u8], offset: usize, length: usize) -> Result<f64> {
    decode_range(bytes, offset, length)
}

/// Converts a byte array to a short value.
pub fn to_short(bytes: &[u8]) -> Result<i16> {
    to_short_range(bytes, 0, SIZEOF_SHORT)
}

/// Converts the two bytes at `offset` to a short value.
pub fn to_short_at(bytes: &[u8], offset: usize) -> Result<i16> {
    to_short_range(bytes, offset, SIZEOF_SHORT)
}

/// Converts a byte range to a short value. `length` must be [`SIZEOF_SHORT`].
pub fn to_short_range(bytes: &[u8], offset: usize, length: usize) -> Result<i16> {
    decode_range(bytes, offset, length)
}

/// Reads one UTF-16 code unit.
pub fn to_char(bytes: &[u8]) -> Result<u16> {
    to_char_range(bytes, 0, SIZEOF_CHAR)
}

/// Reads the UTF-16 code unit at `offset`.
pub fn to_char_at(bytes: &[u8], offset: usize) -> Result<u16> {
    to_char_range(bytes, offset, SIZEOF_CHAR)
}

/// Reads a UTF-16 code unit from a byte range. `length` must be [`SIZEOF_CHAR`].
pub fn to_char_range(bytes: &[u8], offset: usize, length: usize) -> Result<u16> {
    decode_range(bytes, offset, length)
}

/// Returns the first byte as a signed value.
pub fn to_byte(bytes: &[u8]) -> Result<i8> {
    to_byte_range(bytes, 0, SIZEOF_BYTE)
}

/// Returns the byte at `offset` as a signed value.
pub fn to_byte_at(bytes: &[u8], offset: usize) -> Result<i8> {
    to_byte_range(bytes, offset, SIZEOF_BYTE)
}

/// Reads a signed byte from a range. `length` must be [`SIZEOF_BYTE`].
pub fn to_byte_range(bytes: &[u8], offset: usize, length: usize) -> Result<i8> {
    decode_range(bytes, offset, length)
}

/// Reads a boolean. Any nonzero byte is `true`.
pub fn to_boolean(bytes: &[u8]) -> Result<bool> {
    to_boolean_range(bytes, 0, SIZEOF_BOOLEAN)
}

/// Reads the boolean at `offset`.
pub fn to_boolean_at(bytes: &[u8], offset: usize) -> Result<bool> {
    to_boolean_range(bytes, offset, SIZEOF_BOOLEAN)
}

/// Reads a boolean from a byte range. `length` must be [`SIZEOF_BOOLEAN`].
pub fn to_boolean_range(bytes: &[u8], offset: usize, length: usize) -> Result<bool> {
    decode_range(bytes, offset, length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode::{double_to_bytes, float_to_bytes, int_to_bytes, long_to_bytes};
    use crate::internal::error::{Error, LayoutError};

    #[test]
    fn test_named_decoders() {
        assert_eq!(to_long(&long_to_bytes(i64::MIN)).unwrap(), i64::MIN);
        assert_eq!(to_int(&int_to_bytes(-42)).unwrap(), -42);
        assert_eq!(to_float(&float_to_bytes(0.25)).unwrap(), 0.25);
        assert_eq!(to_double(&double_to_bytes(-1e-9)).unwrap(), -1e-9);
        assert_eq!(to_short(&[0xff, 0x00]).unwrap(), -256);
        assert_eq!(to_char(&[0x00, b'~']).unwrap(), u16::from(b'~'));
        assert_eq!(to_byte(&[0xf0]).unwrap(), -16);
        assert!(to_boolean(&[0x02]).unwrap());
    }

    #[test]
    fn test_offset_overloads() {
        let mut bytes = vec![0xEE; 3];
        bytes.extend_from_slice(&long_to_bytes(77));
        assert_eq!(to_long_at(&bytes, 3).unwrap(), 77);
        assert_eq!(to_int_at(&bytes, 7).unwrap(), 77);
        assert_eq!(to_double_at(&bytes, 3).unwrap().to_bits(), 77);
        assert_eq!(to_float_at(&bytes, 7).unwrap().to_bits(), 77);
        assert_eq!(to_short_at(&bytes, 9).unwrap(), 77);
        assert_eq!(to_char_at(&bytes, 9).unwrap(), 77);
        assert_eq!(to_byte_at(&bytes, 10).unwrap(), 77);
        assert!(to_boolean_at(&bytes, 0).unwrap());
    }

    #[test]
    fn test_width_enforcement() {
        let bytes = long_to_bytes(1);
        assert_eq!(
            to_long_range(&bytes, 0, 3).unwrap_err(),
            Error::InvalidLayout(LayoutError::LengthMismatch {
                length: 3,
                expected: 8
            })
        );
        assert_eq!(
            to_int_range(&[0u8; 4], 2, 4).unwrap_err(),
            Error::InvalidLayout(LayoutError::OutOfBounds {
                offset: 2,
                length: 4,
                capacity: 4
            })
        );
        assert!(to_float_range(&bytes, 0, 8).is_err());
        assert!(to_double_range(&bytes, 0, 4).is_err());
        assert!(to_short_range(&bytes, 7, 2).is_err());
        assert!(to_char_range(&bytes, 0, 4).is_err());
        assert!(to_byte_range(&bytes, 8, 1).is_err());
        assert!(to_boolean_range(&bytes, 0, 0).is_err());
    }
}
