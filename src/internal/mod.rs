// Internal support: the crate error type.

pub mod error;
