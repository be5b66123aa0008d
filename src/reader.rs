//! Bounds-checked sequential reads over a borrowed byte buffer.


use std::mem;

use bytemuck::AnyBitPattern;

use crate::error::{Error, Result};

/// A cursor over a byte slice.
///
/// Multi-byte integers are read in big-endian order, as used by every JPEG marker segment. Reads
/// that would run past the end of the buffer fail with an underrun error and leave the cursor
/// where it was.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, position: 0 }
    }

    /// Returns the number of bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the bytes that have not been consumed yet.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.position..]
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        let remaining = self.buf.len() - self.position;
        if remaining < needed {
            Err(Error::underrun(needed, remaining))
        } else {
            Ok(())
        }
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let byte = self.buf[self.position];
        self.position += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.ensure(2)?;
        let b = [self.buf[self.position], self.buf[self.position + 1]];
        self.position += 2;
        Ok(u16::from_be_bytes(b))
    }

    pub fn read_slice(&mut self, count: usize) -> Result<&'a [u8]> {
        self.ensure(count)?;
        let slice = &self.remaining()[..count];
        self.position += count;
        Ok(slice)
    }

    /// Reads a byte-aligned plain-old-data record.
    ///
    /// Only types with an alignment of 1 (ie. made up entirely of `u8`s) can be read this way.
    pub fn read_obj<T: AnyBitPattern>(&mut self) -> Result<&'a T> {
        assert_eq!(mem::align_of::<T>(), 1);

        let bytes = self.read_slice(mem::size_of::<T>())?;
        Ok(bytemuck::from_bytes(bytes))
    }
}
