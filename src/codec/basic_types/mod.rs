// Big-endian layouts of the fixed-width primitives, one file per type.

pub mod boolean;
pub mod byte;
pub mod chars;
pub mod floats;
pub mod int;
pub mod long;
pub mod short;
