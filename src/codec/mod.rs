// Codec module for the fixed-width big-endian primitive layout

pub mod basic_types;
pub mod decode;
pub mod encode;
pub mod layout;
pub mod sizes;
pub mod text;
pub mod types;
