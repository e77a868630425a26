use crate::codec::decode::decode_range;
use crate::codec::layout;
use crate::codec::types::Primitive;
use crate::internal::error::Result;

/// Sequential reader over a packed record.
///
/// The read-side counterpart of chaining [`put`](crate::codec::encode::put)
/// calls: each read validates its range and advances only on success.
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::at(bytes, 0)
    }

    /// Starts reading at `offset`. The offset is validated by the first read.
    pub fn at(bytes: &'a [u8], offset: usize) -> Self {
        FieldReader {
            bytes,
            position: offset,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left after the current position.
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.position)
    }

    /// Reads the next fixed-width value.
    pub fn read<T: Primitive>(&mut self) -> Result<T> {
        let value = decode_range(self.bytes, self.position, T::WIDTH)?;
        self.position += T::WIDTH;
        Ok(value)
    }

    /// Reads the next `length` bytes as UTF-8 text, replacing invalid
    /// sequences with U+FFFD.
    pub fn read_text(&mut self, length: usize) -> Result<String> {
        if length == 0 {
            return Ok(String::new());
        }
        let src = layout::check_bounds("text", self.bytes, self.position, length)?;
        let text = String::from_utf8_lossy(src).into_owned();
        self.position += length;
        Ok(text)
    }

    /// Returns the next `length` raw bytes.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        let src = layout::check_bounds("bytes", self.bytes, self.position, length)?;
        self.position += length;
        Ok(src)
    }
}
