use thiserror::Error;

/// Why a decode range was rejected.
///
/// The two causes are kept apart because callers print them verbatim when
/// diagnosing a bad call site.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The requested length does not match the fixed width of the type.
    #[error("Wrong length: {length}, expected {expected}")]
    LengthMismatch { length: usize, expected: usize },

    /// The slice `offset..offset + length` runs past the end of the buffer.
    #[error("offset ({offset}) + length ({length}) exceed the capacity of the array: {capacity}")]
    OutOfBounds {
        offset: usize,
        length: usize,
        capacity: usize,
    },
}

/// Unified error type for the blip-bytes library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Decode called with a length or offset that violates the layout contract.
    #[error("Invalid Layout: {0}")]
    InvalidLayout(#[from] LayoutError),

    /// In-place write target is too small at the given offset.
    #[error(
        "Not enough room to put {} {} at offset {} in a {} byte array",
        article(.type_name),
        .type_name,
        .offset,
        .capacity
    )]
    InsufficientCapacity {
        type_name: &'static str,
        offset: usize,
        width: usize,
        capacity: usize,
    },
}

impl Error {
    /// Returns the layout cause when this is an `InvalidLayout` error.
    pub fn layout(&self) -> Option<&LayoutError> {
        match self {
            Error::InvalidLayout(cause) => Some(cause),
            Error::InsufficientCapacity { .. } => None,
        }
    }
}

fn article(type_name: &str) -> &'static str {
    match type_name.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// A specialized `Result` type for blip-bytes operations.
pub type Result<T> = std::result::Result<T, Error>;

/*
Panic policy:

Every contract violation the codec can detect is reported through `Result`;
library code never indexes a caller-supplied buffer before the range has been
validated. Panics are left for genuine bugs and for test assertions.
*/
