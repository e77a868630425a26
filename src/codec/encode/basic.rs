use crate::codec::encode::{encode, put};
use crate::codec::sizes::{SIZEOF_DOUBLE, SIZEOF_FLOAT, SIZEOF_INT, SIZEOF_LONG};
use crate::internal::error::Result;

/// Converts a long value to a byte array using big-endian.
pub fn long_to_bytes(val: i64) -> [u8; SIZEOF_LONG] {
    encode(val)
}

/// Converts an int value to a byte array using big-endian.
pub fn int_to_bytes(val: i32) -> [u8; SIZEOF_INT] {
    encode(val)
}

/// Serializes a float as its IEEE 754 single format bits.
pub fn float_to_bytes(f: f32) -> [u8; SIZEOF_FLOAT] {
    encode(f)
}

/// Serializes a double as its IEEE 754 double format bits.
pub fn double_to_bytes(d: f64) -> [u8; SIZEOF_DOUBLE] {
    encode(d)
}

/// Puts an int value at `offset` and returns the incremented offset.
pub fn put_int(bytes: &mut [u8], offset: usize, val: i32) -> Result<usize> {
    put(bytes, offset, val)
}

/// Puts a float value at `offset` and returns the incremented offset.
pub fn put_float(bytes: &mut [u8], offset: usize, f: f32) -> Result<usize> {
    put(bytes, offset, f)
}

/// Puts a long value at `offset` and returns the incremented offset.
pub fn put_long(bytes: &mut [u8], offset: usize, val: i64) -> Result<usize> {
    put(bytes, offset, val)
}

/// Puts a double as its IEEE 754 bits at `offset`.
pub fn put_double(bytes: &mut [u8], offset: usize, d: f64) -> Result<usize> {
    put(bytes, offset, d)
}

/// Puts a short value at `offset` and returns the incremented offset.
pub fn put_short(bytes: &mut [u8], offset: usize, val: i16) -> Result<usize> {
    put(bytes, offset, val)
}

/// Puts one UTF-16 code unit at `offset`.
pub fn put_char(bytes: &mut [u8], offset: usize, code_unit: u16) -> Result<usize> {
    put(bytes, offset, code_unit)
}

/// Puts a single byte at `offset`.
pub fn put_byte(bytes: &mut [u8], offset: usize, val: i8) -> Result<usize> {
    put(bytes, offset, val)
}

/// Puts `0xFF` for `true` or `0x00` for `false` at `offset`.
pub fn put_boolean(bytes: &mut [u8], offset: usize, val: bool) -> Result<usize> {
    put(bytes, offset, val)
}
