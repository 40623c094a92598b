// src/buffer/core.rs
//! Core buffer structure: accumulation, snapshots, and lifecycle
//!
//! This module provides the fundamental [`ByteBuffer`] type: an append-only
//! byte accumulator with explicit release semantics and secure memory zeroing
//! on release.

use crate::error::{BufferError, Result};
use zeroize::Zeroize;

/// A growable, append-only byte buffer with explicit release semantics.
///
/// The buffer accumulates bytes via [`write`](Self::write) and exposes them
/// either as a snapshot copy ([`bytes`](Self::bytes)) or through positional
/// little-endian decoders ([`read_u16`](Self::read_u16),
/// [`read_u16_array`](Self::read_u16_array)). Every read takes an explicit
/// byte offset; there is no cursor state carried between calls.
///
/// # Lifecycle
///
/// A buffer is either *active* or *released*. [`release`](Self::release)
/// wipes and frees the backing storage; after that, every read and write
/// operation fails with [`BufferError::Released`]. Dropping an active buffer
/// performs the same cleanup, so release is guaranteed on every exit path.
/// The backing memory is zeroed with the [`zeroize`] crate, which provides
/// compiler-resistant clearing.
///
/// # Examples
///
/// ```
/// use lebuf::ByteBuffer;
/// # use lebuf::BufferError;
///
/// let mut buf = ByteBuffer::new();
/// buf.write(&[0x34, 0x12])?;
/// assert_eq!(buf.read_u16(0)?, 0x1234);
/// buf.release();
/// # Ok::<(), BufferError>(())
/// ```
pub struct ByteBuffer {
    /// Accumulated data (securely erased on release)
    pub(crate) data: Vec<u8>,
    /// Set once by `release()`; no operation is valid afterwards
    pub(crate) released: bool,
}

impl ByteBuffer {
    /// Creates a new, empty buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use lebuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::new();
    /// assert_eq!(buf.len(), 0);
    /// assert!(buf.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            released: false,
        }
    }

    /// Creates a buffer pre-populated with existing data.
    ///
    /// Equivalent to [`new`](Self::new) followed by a single
    /// [`write`](Self::write) of the vector's contents, but takes ownership
    /// without copying.
    ///
    /// # Examples
    ///
    /// ```
    /// use lebuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::from_vec(vec![1, 2, 3]);
    /// assert_eq!(buf.len(), 3);
    /// ```
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self {
            data,
            released: false,
        }
    }

    /// Returns the number of bytes accumulated so far.
    ///
    /// Remains callable after release (reports 0, since the storage has been
    /// freed).
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no bytes have been accumulated.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` once [`release`](Self::release) has been called.
    ///
    /// # Examples
    ///
    /// ```
    /// use lebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::new();
    /// assert!(!buf.is_released());
    /// buf.release();
    /// assert!(buf.is_released());
    /// ```
    #[inline(always)]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Appends bytes to the end of the accumulated data, in order.
    ///
    /// Writing an empty slice is a no-op and succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Released`] if the buffer has been released.
    ///
    /// # Examples
    ///
    /// ```
    /// use lebuf::ByteBuffer;
    /// # use lebuf::BufferError;
    ///
    /// let mut buf = ByteBuffer::new();
    /// buf.write(b"ab")?;
    /// buf.write(b"cd")?;
    /// assert_eq!(buf.bytes()?, b"abcd");
    /// # Ok::<(), BufferError>(())
    /// ```
    #[inline]
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.check_active()?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Returns a snapshot copy of all accumulated bytes, in write order.
    ///
    /// The returned vector is independent of the buffer: mutating it never
    /// affects the buffer's internal state, and later writes never affect
    /// the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Released`] if the buffer has been released.
    #[inline]
    pub fn bytes(&self) -> Result<Vec<u8>> {
        self.check_active()?;
        Ok(self.data.clone())
    }

    /// Releases the buffer's backing storage.
    ///
    /// The accumulated bytes are securely zeroed via the [`zeroize`] crate
    /// before the storage is freed. Idempotent: calling it again has no
    /// further effect and does not error. After release, all read and write
    /// operations fail with [`BufferError::Released`].
    ///
    /// Dropping the buffer performs the same cleanup, so an explicit call is
    /// only needed for early or deterministic release.
    ///
    /// # Examples
    ///
    /// ```
    /// use lebuf::ByteBuffer;
    /// # use lebuf::BufferError;
    ///
    /// let mut buf = ByteBuffer::new();
    /// buf.write(b"sensitive")?;
    /// buf.release();
    /// buf.release(); // no-op
    /// assert!(buf.write(b"x").is_err());
    /// # Ok::<(), BufferError>(())
    /// ```
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        // Wipe before freeing so the accumulated bytes never linger in
        // deallocated pages.
        self.data.as_mut_slice().zeroize();
        self.data = Vec::new();
        self.released = true;
    }

    /// Shared released-state guard for all read/write operations.
    #[inline(always)]
    pub(crate) fn check_active(&self) -> Result<()> {
        if self.released {
            return Err(BufferError::Released);
        }
        Ok(())
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::from_vec(data)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_vec(bytes.to_vec())
    }
}

impl Drop for ByteBuffer {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let buf = ByteBuffer::new();
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert!(!buf.is_released());
    }

    #[test]
    fn test_from_vec() {
        let buf = ByteBuffer::from_vec(vec![1, 2, 3, 4, 5]);
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.bytes().unwrap(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_from_slice_matches_write() {
        let a = ByteBuffer::from(&b"hello"[..]);

        let mut b = ByteBuffer::new();
        b.write(b"hello").unwrap();

        assert_eq!(a.bytes().unwrap(), b.bytes().unwrap());
    }

    #[test]
    fn test_write_appends_in_order() {
        let mut buf = ByteBuffer::new();
        buf.write(b"ab").unwrap();
        buf.write(&[]).unwrap();
        buf.write(b"cd").unwrap();
        assert_eq!(buf.bytes().unwrap(), b"abcd");
    }

    #[test]
    fn test_bytes_is_a_copy() {
        let mut buf = ByteBuffer::new();
        buf.write(&[1, 2, 3]).unwrap();

        let mut snapshot = buf.bytes().unwrap();
        snapshot[0] = 0xFF;
        snapshot.push(4);

        assert_eq!(buf.bytes().unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn test_release_idempotent() {
        let mut buf = ByteBuffer::new();
        buf.write(&[1, 2]).unwrap();
        buf.release();
        buf.release();
        assert!(buf.is_released());
    }

    #[test]
    fn test_operations_fail_after_release() {
        let mut buf = ByteBuffer::from_vec(vec![1, 2, 3, 4]);
        buf.release();

        assert_eq!(buf.write(&[5]), Err(BufferError::Released));
        assert_eq!(buf.bytes(), Err(BufferError::Released));
        assert_eq!(buf.read_u16(0), Err(BufferError::Released));
        assert_eq!(buf.read_u16_array(2, 0), Err(BufferError::Released));
    }

    #[test]
    fn test_accessors_survive_release() {
        let mut buf = ByteBuffer::from_vec(vec![1, 2]);
        buf.release();
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert!(buf.is_released());
    }
}
