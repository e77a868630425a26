use crate::codec::sizes::SIZEOF_BOOLEAN;
use crate::codec::types::Primitive;

/// `true` is written as `0xFF`, `false` as `0x00`. Any nonzero byte reads
/// back as `true`.
impl Primitive for bool {
    const WIDTH: usize = SIZEOF_BOOLEAN;
    const TYPE_NAME: &'static str = "boolean";
    type Encoded = [u8; SIZEOF_BOOLEAN];

    fn to_be_encoded(self) -> Self::Encoded {
        [if self { 0xFF } else { 0x00 }]
    }

    fn from_be_encoded(bytes: Self::Encoded) -> Self {
        let [b] = bytes;
        b != 0
    }
}
