use std::fmt;
use std::str::FromStr;

use crate::codec::decode::decode_range;
use crate::codec::encode::encode;
use crate::codec::text::bytes_to_text_range;

/// A fixed-width primitive with a big-endian byte layout.
///
/// Implementations live in `codec::basic_types`, one file per type.
pub trait Primitive: Copy + Sized {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Lower-case type name used in error messages.
    const TYPE_NAME: &'static str;

    /// The fixed-size encoding, always `[u8; WIDTH]`.
    ///
    /// Slices only become an `Encoded` through `TryFrom`, which rejects any
    /// other length.
    type Encoded: AsRef<[u8]> + Copy + for<'a> TryFrom<&'a [u8]>;

    /// Encodes the value, most significant byte first.
    fn to_be_encoded(self) -> Self::Encoded;

    /// Decodes a value from its fixed-size encoding.
    ///
    /// Use [`decode_range`](crate::codec::decode::decode_range) to decode from
    /// an arbitrary slice.
    fn from_be_encoded(bytes: Self::Encoded) -> Self;
}

/// Runtime tag for the types the codec understands.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Float,
    Long,
    Double,
    Text,
}

impl PrimitiveType {
    /// Fixed encoded width, or `None` for variable-length text.
    pub fn width(self) -> Option<usize> {
        match self {
            PrimitiveType::Boolean => Some(<bool as Primitive>::WIDTH),
            PrimitiveType::Byte => Some(<i8 as Primitive>::WIDTH),
            PrimitiveType::Char => Some(<u16 as Primitive>::WIDTH),
            PrimitiveType::Short => Some(<i16 as Primitive>::WIDTH),
            PrimitiveType::Int => Some(<i32 as Primitive>::WIDTH),
            PrimitiveType::Float => Some(<f32 as Primitive>::WIDTH),
            PrimitiveType::Long => Some(<i64 as Primitive>::WIDTH),
            PrimitiveType::Double => Some(<f64 as Primitive>::WIDTH),
            PrimitiveType::Text => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Float => "float",
            PrimitiveType::Long => "long",
            PrimitiveType::Double => "double",
            PrimitiveType::Text => "text",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a type name is not one of the known primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown primitive type: {0}")]
pub struct UnknownType(pub String);

impl FromStr for PrimitiveType {
    type Err = UnknownType;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "boolean" | "bool" => Ok(PrimitiveType::Boolean),
            "byte" => Ok(PrimitiveType::Byte),
            "char" => Ok(PrimitiveType::Char),
            "short" => Ok(PrimitiveType::Short),
            "int" => Ok(PrimitiveType::Int),
            "float" => Ok(PrimitiveType::Float),
            "long" => Ok(PrimitiveType::Long),
            "double" => Ok(PrimitiveType::Double),
            "text" | "string" => Ok(PrimitiveType::Text),
            other => Err(UnknownType(other.to_string())),
        }
    }
}

/// A decoded value of any supported type.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Boolean(bool),
    Byte(i8),
    Char(u16),
    Short(i16),
    Int(i32),
    Float(f32),
    Long(i64),
    Double(f64),
    Text(String),
}

impl Value {
    /// Returns the corresponding PrimitiveType for the Value.
    pub fn value_type(&self) -> PrimitiveType {
        match self {
            Value::Boolean(_) => PrimitiveType::Boolean,
            Value::Byte(_) => PrimitiveType::Byte,
            Value::Char(_) => PrimitiveType::Char,
            Value::Short(_) => PrimitiveType::Short,
            Value::Int(_) => PrimitiveType::Int,
            Value::Float(_) => PrimitiveType::Float,
            Value::Long(_) => PrimitiveType::Long,
            Value::Double(_) => PrimitiveType::Double,
            Value::Text(_) => PrimitiveType::Text,
        }
    }

    /// Encodes the value into a freshly allocated byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Value::Boolean(v) => encode(*v).to_vec(),
            Value::Byte(v) => encode(*v).to_vec(),
            Value::Char(v) => encode(*v).to_vec(),
            Value::Short(v) => encode(*v).to_vec(),
            Value::Int(v) => encode(*v).to_vec(),
            Value::Float(v) => encode(*v).to_vec(),
            Value::Long(v) => encode(*v).to_vec(),
            Value::Double(v) => encode(*v).to_vec(),
            Value::Text(v) => v.as_bytes().to_vec(),
        }
    }

    /// Decodes `length` bytes at `offset` as a value of type `ty`.
    pub fn decode(
        ty: PrimitiveType,
        bytes: &[u8],
        offset: usize,
        length: usize,
    ) -> crate::Result<Value> {
        Ok(match ty {
            PrimitiveType::Boolean => Value::Boolean(decode_range(bytes, offset, length)?),
            PrimitiveType::Byte => Value::Byte(decode_range(bytes, offset, length)?),
            PrimitiveType::Char => Value::Char(decode_range(bytes, offset, length)?),
            PrimitiveType::Short => Value::Short(decode_range(bytes, offset, length)?),
            PrimitiveType::Int => Value::Int(decode_range(bytes, offset, length)?),
            PrimitiveType::Float => Value::Float(decode_range(bytes, offset, length)?),
            PrimitiveType::Long => Value::Long(decode_range(bytes, offset, length)?),
            PrimitiveType::Double => Value::Double(decode_range(bytes, offset, length)?),
            PrimitiveType::Text => {
                Value::Text(bytes_to_text_range(Some(bytes), offset, length)?.unwrap_or_default())
            }
        })
    }
}
