use crate::codec::sizes::SIZEOF_INT;
use crate::codec::types::Primitive;

/// Big-endian two's-complement.
impl Primitive for i32 {
    const WIDTH: usize = SIZEOF_INT;
    const TYPE_NAME: &'static str = "int";
    type Encoded = [u8; SIZEOF_INT];

    fn to_be_encoded(self) -> Self::Encoded {
        let mut b = [0u8; SIZEOF_INT];
        let mut val = self as u32;
        for slot in b.iter_mut().rev() {
            *slot = val as u8;
            val >>= 8;
        }
        b
    }

    fn from_be_encoded(bytes: Self::Encoded) -> Self {
        bytes.iter().fold(0u32, |n, &b| (n << 8) | u32::from(b)) as i32
    }
}
