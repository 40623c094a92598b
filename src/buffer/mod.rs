// src/buffer/mod.rs
//! Byte accumulation buffer with positional little-endian decoding.

mod core;
mod ops;

pub use self::core::ByteBuffer;
