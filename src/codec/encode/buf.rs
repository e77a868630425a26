use bytes::BufMut;

use crate::codec::encode::encode;
use crate::codec::types::Primitive;

/// Appends primitive encodings to any growable `BufMut`.
pub trait PutPrimitive: BufMut {
    /// Appends the fixed-width big-endian encoding of `value`.
    fn put_primitive<T: Primitive>(&mut self, value: T) {
        self.put_slice(encode(value).as_ref());
    }

    /// Appends the UTF-8 bytes of `s`, with no length prefix or terminator.
    fn put_text(&mut self, s: &str) {
        self.put_slice(s.as_bytes());
    }
}

impl<B: BufMut + ?Sized> PutPrimitive for B {}
