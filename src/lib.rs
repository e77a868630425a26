// blip-bytes library entry point
//
// Fixed-width, big-endian encoding of primitive values and UTF-8 text, with
// strict length and offset validation on every read and write.

pub mod codec;
pub mod internal;

pub use codec::decode::{
    decode, decode_at, decode_batch, decode_range, to_boolean, to_boolean_at, to_boolean_range,
    to_byte, to_byte_at, to_byte_range, to_char, to_char_at, to_char_range, to_double,
    to_double_at, to_double_range, to_float, to_float_at, to_float_range, to_int, to_int_at,
    to_int_range, to_long, to_long_at, to_long_range, to_short, to_short_at, to_short_range,
    FieldReader,
};
pub use codec::encode::{
    double_to_bytes, encode, float_to_bytes, int_to_bytes, long_to_bytes, put, put_boolean,
    put_byte, put_char, put_double, put_float, put_int, put_long, put_short, PutPrimitive,
};
pub use codec::sizes::*;
pub use codec::text::{
    bytes_to_text, bytes_to_text_range, join, next_after, stop_key, text_to_bytes,
    CHARACTER_AFTER_COLON,
};
pub use codec::types::{Primitive, PrimitiveType, Value};
pub use internal::error::{Error, LayoutError, Result};
