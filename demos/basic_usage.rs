// demos/basic_usage.rs
//! Basic usage example of the byte buffer

use lebuf::prelude::*;

fn main() -> Result<()> {
    println!("=== Accumulating Bytes ===\n");

    // 1. Create a buffer and append to it
    let mut buf = ByteBuffer::new();
    buf.write(&[0x34, 0x12])?;
    buf.write(&[0x01, 0x00, 0x02, 0x00, 0x03, 0x00])?;

    println!("Buffer length: {}", buf.len());
    println!("Raw bytes: {:02X?}", buf.bytes()?);

    println!("\n=== Positional Little-Endian Decoding ===\n");

    // Every read takes its own offset; nothing is consumed.
    let first = buf.read_u16(0)?;
    let run = buf.read_u16_array(3, 2)?;

    println!("u16 at offset 0: {} (0x{:04X})", first, first);
    println!("u16 run at offset 2: {:?}", run);

    // Out-of-range reads fail loudly instead of returning a default.
    match buf.read_u16(buf.len()) {
        Ok(v) => println!("unexpected value: {}", v),
        Err(e) => println!("read past end: {}", e),
    }

    println!("\n=== Pre-populated Buffers ===\n");

    let snapshot = buf.bytes()?;
    let copy = ByteBuffer::from_vec(snapshot);
    println!("Copy decodes the same header: 0x{:04X}", copy.read_u16(0)?);

    println!("\n=== Release Lifecycle ===\n");

    // Explicit release wipes and frees the backing storage; drop would do
    // the same at scope exit.
    buf.release();
    buf.release(); // idempotent
    println!("Released: {}", buf.is_released());
    match buf.write(&[0xFF]) {
        Ok(()) => println!("unexpected write success"),
        Err(e) => println!("write after release: {}", e),
    }

    Ok(())
}
