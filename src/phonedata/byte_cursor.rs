// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use byteorder::{ByteOrder, LittleEndian};

use super::errors::BoundsError;

pub type Result<T> = std::result::Result<T, BoundsError>;

/// Forward-scanning reader over the phone format buffer.
///
/// Every read is bounds checked and little-endian. Positional reads
/// (`*_at`) leave the cursor untouched, sequential reads advance it.
/// [`ByteCursor::seek`] is the only way to jump, so every
/// resynchronization point of the block layout is explicit.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Creates cursor positioned at `offset`.
    pub fn at(data: &'a [u8], offset: usize) -> Result<Self> {
        let mut cursor = Self::new(data);
        cursor.seek(offset)?;
        Ok(cursor)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Moves the cursor to an absolute offset. Seeking to the very end
    /// is allowed, anything past it is not.
    pub fn seek(&mut self, offset: usize) -> Result<()> {
        if offset > self.data.len() {
            return Err(self.bounds_error(offset, 0));
        }
        self.pos = offset;
        Ok(())
    }

    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.slice_at(self.pos, count)?;
        self.pos += count;
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let value = self.u8_at(self.pos)?;
        self.pos += 1;
        Ok(value)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let value = self.u16_at(self.pos)?;
        self.pos += 2;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let value = self.u32_at(self.pos)?;
        self.pos += 4;
        Ok(value)
    }

    /// Reads a NUL terminated string and moves past its terminator.
    pub fn read_cstring(&mut self) -> Result<String> {
        let (value, next) = self.cstring_at(self.pos)?;
        self.pos = next;
        Ok(value)
    }

    pub fn u8_at(&self, offset: usize) -> Result<u8> {
        Ok(self.slice_at(offset, 1)?[0])
    }

    pub fn u16_at(&self, offset: usize) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.slice_at(offset, 2)?))
    }

    pub fn u32_at(&self, offset: usize) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.slice_at(offset, 4)?))
    }

    /// Scans from `offset` up to a zero byte or the end of the buffer.
    ///
    /// Returns the decoded text and the offset right after the terminator
    /// (or the buffer length if the string runs until the end).
    pub fn cstring_at(&self, offset: usize) -> Result<(String, usize)> {
        if offset >= self.data.len() {
            return Err(self.bounds_error(offset, 1));
        }
        let tail = &self.data[offset..];
        let (bytes, next) = match tail.iter().position(|b| *b == 0) {
            Some(nul) => (&tail[..nul], offset + nul + 1),
            None => (tail, self.data.len()),
        };
        Ok((String::from_utf8_lossy(bytes).into_owned(), next))
    }

    /// Decodes the fixed `width` byte field at `offset` up to its first
    /// zero byte. A field without a terminator is taken whole.
    pub fn cstring_in(&self, offset: usize, width: usize) -> Result<String> {
        let field = self.slice_at(offset, width)?;
        let end = field.iter().position(|b| *b == 0).unwrap_or(width);
        Ok(String::from_utf8_lossy(&field[..end]).into_owned())
    }

    fn slice_at(&self, offset: usize, len: usize) -> Result<&'a [u8]> {
        let end = offset
            .checked_add(len)
            .ok_or_else(|| self.bounds_error(offset, len))?;
        self.data
            .get(offset..end)
            .ok_or_else(|| self.bounds_error(offset, len))
    }

    fn bounds_error(&self, offset: usize, len: usize) -> BoundsError {
        BoundsError { offset, len, available: self.data.len() }
    }
}

#[cfg(test)]
mod tests {
    use super::ByteCursor;
    use crate::phonedata::errors::BoundsError;

    #[test]
    fn reads_little_endian() {
        let data = [0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_u16(), Ok(0x1234));
        assert_eq!(cursor.read_u32(), Ok(0x12345678));
        assert_eq!(cursor.position(), 6);
        assert_eq!(cursor.u16_at(2), Ok(0x5678));
    }

    #[test]
    fn out_of_bounds_is_typed_error() {
        let data = [1, 2, 3];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(
            cursor.u32_at(0),
            Err(BoundsError { offset: 0, len: 4, available: 3 })
        );
        assert!(cursor.u16_at(usize::MAX).is_err());
        cursor.skip(2).unwrap();
        assert!(cursor.read_u16().is_err());
        // failed read must not move the cursor
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.read_u8(), Ok(3));
    }

    #[test]
    fn cstrings() {
        let data = b"44\0\0gb";
        let mut cursor = ByteCursor::new(data);
        assert_eq!(cursor.read_cstring(), Ok("44".to_owned()));
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.read_cstring(), Ok(String::new()));
        assert_eq!(cursor.position(), 4);
        // unterminated string stops at the end of the buffer
        assert_eq!(cursor.cstring_at(4), Ok(("gb".to_owned(), 6)));
        assert!(cursor.cstring_at(6).is_err());
    }

    #[test]
    fn fixed_width_fields_stop_at_their_slot() {
        let data = b"1234us\0\0";
        let cursor = ByteCursor::new(data);
        assert_eq!(cursor.cstring_in(0, 4), Ok("1234".to_owned()));
        assert_eq!(cursor.cstring_in(4, 4), Ok("us".to_owned()));
        assert_eq!(cursor.cstring_in(2, 2), Ok("34".to_owned()));
        assert!(cursor.cstring_in(6, 4).is_err());
    }

    #[test]
    fn seek_resynchronizes() {
        let data = [0u8, 0, 7, 0];
        let mut cursor = ByteCursor::at(&data, 2).unwrap();
        assert_eq!(cursor.read_u16(), Ok(7));
        cursor.seek(0).unwrap();
        assert_eq!(cursor.read_u16(), Ok(0));
        assert!(cursor.seek(4).is_ok());
        assert!(cursor.seek(5).is_err());
        assert!(ByteCursor::at(&data, 9).is_err());
    }
}
