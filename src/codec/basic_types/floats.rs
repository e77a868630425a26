use crate::codec::sizes::{SIZEOF_DOUBLE, SIZEOF_FLOAT};
use crate::codec::types::Primitive;

// Floats travel as their raw IEEE 754 bits through the integer layout of the
// same width. `to_bits`/`from_bits` never canonicalise NaN, so every payload
// survives a round trip.

impl Primitive for f32 {
    const WIDTH: usize = SIZEOF_FLOAT;
    const TYPE_NAME: &'static str = "float";
    type Encoded = [u8; SIZEOF_FLOAT];

    fn to_be_encoded(self) -> Self::Encoded {
        (self.to_bits() as i32).to_be_encoded()
    }

    fn from_be_encoded(bytes: Self::Encoded) -> Self {
        f32::from_bits(i32::from_be_encoded(bytes) as u32)
    }
}

impl Primitive for f64 {
    const WIDTH: usize = SIZEOF_DOUBLE;
    const TYPE_NAME: &'static str = "double";
    type Encoded = [u8; SIZEOF_DOUBLE];

    fn to_be_encoded(self) -> Self::Encoded {
        (self.to_bits() as i64).to_be_encoded()
    }

    fn from_be_encoded(bytes: Self::Encoded) -> Self {
        f64::from_bits(i64::from_be_encoded(bytes) as u64)
    }
}
