// src/lib.rs
//! # Little-Endian Byte Buffer
//!
//! A single-owner, in-memory byte buffer that accumulates written bytes and
//! decodes fixed-width little-endian unsigned integers from them at explicit
//! offsets.
//!
//! Features:
//! - Append-only accumulation with snapshot reads (`bytes()` returns a copy)
//! - Positional decoding of `u16` values and packed `u16` runs, little-endian
//! - Stateless reads: every decode takes an explicit offset, no shared cursor
//! - Explicit, idempotent `release()` with secure memory zeroing via the
//!   `zeroize` crate, plus the same cleanup on drop
//! - Fail-loud out-of-range reads (never a silent default value)
//!
//! The buffer provides no internal synchronization; a single owner is
//! expected to serialize access.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod error;

// Re-export main types
pub use buffer::ByteBuffer;
pub use error::{BufferError, Result};

/// Commonly used imports.
pub mod prelude {
    pub use crate::buffer::ByteBuffer;
    pub use crate::error::{BufferError, Result};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_basic_roundtrip() {
        let mut buf = ByteBuffer::new();
        buf.write(&[0x34, 0x12]).unwrap();
        buf.write(&[0x01, 0x00]).unwrap();

        assert_eq!(buf.bytes().unwrap(), &[0x34, 0x12, 0x01, 0x00]);
        assert_eq!(buf.read_u16(0).unwrap(), 0x1234);
        assert_eq!(buf.read_u16(2).unwrap(), 1);
    }

    #[test]
    fn test_prepopulated_buffer() {
        let buf = ByteBuffer::from_vec(vec![0x10, 0x27, 0x00, 0x00]);
        assert_eq!(buf.read_u16_array(2, 0).unwrap(), vec![10_000, 0]);
    }

    #[test]
    fn test_release_lifecycle() {
        let mut buf = ByteBuffer::new();
        buf.write(&[1, 2, 3, 4]).unwrap();
        buf.release();

        assert!(buf.is_released());
        assert_eq!(buf.write(&[5]), Err(BufferError::Released));
        assert_eq!(buf.read_u16(0), Err(BufferError::Released));
    }
}
