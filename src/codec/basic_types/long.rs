use crate::codec::sizes::SIZEOF_LONG;
use crate::codec::types::Primitive;

impl Primitive for i64 {
    const WIDTH: usize = SIZEOF_LONG;
    const TYPE_NAME: &'static str = "long";
    type Encoded = [u8; SIZEOF_LONG];

    fn to_be_encoded(self) -> Self::Encoded {
        let mut b = [0u8; SIZEOF_LONG];
        let mut val = self as u64;
        for slot in b.iter_mut().rev() {
            *slot = val as u8;
            val >>= 8;
        }
        b
    }

    fn from_be_encoded(bytes: Self::Encoded) -> Self {
        bytes.iter().fold(0u64, |l, &b| (l << 8) | u64::from(b)) as i64
    }
}
