//! Encoded widths of the fixed-width primitives, in bytes.
//!
//! These never change: data written with one width table must stay readable.

/// Size of boolean in bytes
pub const SIZEOF_BOOLEAN: usize = 1;

/// Size of byte in bytes
pub const SIZEOF_BYTE: usize = SIZEOF_BOOLEAN;

/// Size of char (one UTF-16 code unit) in bytes
pub const SIZEOF_CHAR: usize = u16::BITS as usize / 8;

/// Size of short in bytes
pub const SIZEOF_SHORT: usize = i16::BITS as usize / 8;

/// Size of int in bytes
pub const SIZEOF_INT: usize = i32::BITS as usize / 8;

/// Size of float in bytes
pub const SIZEOF_FLOAT: usize = SIZEOF_INT;

/// Size of long in bytes
pub const SIZEOF_LONG: usize = i64::BITS as usize / 8;

/// Size of double in bytes
pub const SIZEOF_DOUBLE: usize = SIZEOF_LONG;

/// The shared empty byte sequence.
pub const EMPTY_BYTE_ARRAY: &[u8] = &[];
