use crate::codec::sizes::SIZEOF_BYTE;
use crate::codec::types::Primitive;

impl Primitive for i8 {
    const WIDTH: usize = SIZEOF_BYTE;
    const TYPE_NAME: &'static str = "byte";
    type Encoded = [u8; SIZEOF_BYTE];

    fn to_be_encoded(self) -> Self::Encoded {
        [self as u8]
    }

    fn from_be_encoded(bytes: Self::Encoded) -> Self {
        let [b] = bytes;
        b as i8
    }
}

#[cfg(test)]
mod tests {
    use crate::codec::decode::{decode, decode_at};
    use crate::codec::encode::encode;

    #[test]
    fn test_byte_raw_value() {
        assert_eq!(encode(0i8), [0x00]);
        assert_eq!(encode(127i8), [0x7f]);
        assert_eq!(encode(-1i8), [0xff]);
        assert_eq!(encode(-128i8), [0x80]);
    }

    #[test]
    fn test_decode_byte() {
        assert_eq!(decode::<i8>(&[0x80]).unwrap(), -128);
        assert_eq!(decode_at::<i8>(&[0x00, 0xfe], 1).unwrap(), -2);
        assert!(decode_at::<i8>(&[0x00, 0xfe], 2).is_err());
    }
}
