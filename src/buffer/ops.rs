// src/buffer/ops.rs
//! Positional little-endian decode operations

use super::core::ByteBuffer;
use crate::error::{BufferError, Result};

impl ByteBuffer {
    /// Decodes the two bytes at `[position, position + 2)` as a little-endian
    /// `u16` (low-order byte at `position`).
    ///
    /// Every call supplies its own position; no read cursor survives between
    /// calls, so reads at different offsets never interfere.
    ///
    /// # Errors
    ///
    /// - [`BufferError::Released`] if the buffer has been released.
    /// - [`BufferError::EndOfData`] if the requested range extends past the
    ///   accumulated data. This is never reported as a silent default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use lebuf::ByteBuffer;
    /// # use lebuf::BufferError;
    ///
    /// let mut buf = ByteBuffer::new();
    /// buf.write(&[0x34, 0x12])?;
    /// assert_eq!(buf.read_u16(0)?, 4660);
    /// # Ok::<(), BufferError>(())
    /// ```
    #[inline]
    pub fn read_u16(&self, position: usize) -> Result<u16> {
        self.check_active()?;
        let end = position.checked_add(2).ok_or(BufferError::EndOfData)?;
        if end > self.data.len() {
            return Err(BufferError::EndOfData);
        }
        Ok(u16::from_le_bytes([self.data[position], self.data[position + 1]]))
    }

    /// Decodes `count` packed little-endian `u16` values starting at
    /// `position`, element `i` from byte offset `position + 2 * i`.
    ///
    /// All-or-nothing: the full range `[position, position + 2 * count)` is
    /// validated before any element is decoded, so an out-of-range run fails
    /// with [`BufferError::EndOfData`] without returning a partial sequence.
    /// A `count` of 0 returns an empty vector for any position, even past the
    /// end of the data.
    ///
    /// # Errors
    ///
    /// - [`BufferError::Released`] if the buffer has been released.
    /// - [`BufferError::EndOfData`] if the full range is not available.
    ///
    /// # Examples
    ///
    /// ```
    /// use lebuf::ByteBuffer;
    /// # use lebuf::BufferError;
    ///
    /// let mut buf = ByteBuffer::new();
    /// buf.write(&[0x01, 0x00, 0x02, 0x00, 0x03, 0x00])?;
    /// assert_eq!(buf.read_u16_array(3, 0)?, vec![1, 2, 3]);
    /// # Ok::<(), BufferError>(())
    /// ```
    pub fn read_u16_array(&self, count: usize, position: usize) -> Result<Vec<u16>> {
        self.check_active()?;
        if count == 0 {
            return Ok(Vec::new());
        }

        let span = count.checked_mul(2).ok_or(BufferError::EndOfData)?;
        let end = position.checked_add(span).ok_or(BufferError::EndOfData)?;
        if end > self.data.len() {
            return Err(BufferError::EndOfData);
        }

        Ok(self.data[position..end]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect())
    }
}
