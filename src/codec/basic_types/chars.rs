use crate::codec::sizes::SIZEOF_CHAR;
use crate::codec::types::Primitive;

/// The `char` layout: one UTF-16 code unit, big-endian unsigned.
impl Primitive for u16 {
    const WIDTH: usize = SIZEOF_CHAR;
    const TYPE_NAME: &'static str = "char";
    type Encoded = [u8; SIZEOF_CHAR];

    fn to_be_encoded(self) -> Self::Encoded {
        let mut b = [0u8; SIZEOF_CHAR];
        let mut val = self;
        for slot in b.iter_mut().rev() {
            *slot = val as u8;
            val >>= 8;
        }
        b
    }

    fn from_be_encoded(bytes: Self::Encoded) -> Self {
        bytes.iter().fold(0u16, |n, &b| (n << 8) | u16::from(b))
    }
}
