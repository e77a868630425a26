use crate::codec::sizes::SIZEOF_SHORT;
use crate::codec::types::Primitive;

impl Primitive for i16 {
    const WIDTH: usize = SIZEOF_SHORT;
    const TYPE_NAME: &'static str = "short";
    type Encoded = [u8; SIZEOF_SHORT];

    fn to_be_encoded(self) -> Self::Encoded {
        (self as u16).to_be_encoded()
    }

    fn from_be_encoded(bytes: Self::Encoded) -> Self {
        u16::from_be_encoded(bytes) as i16
    }
}
