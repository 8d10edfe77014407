//! Message traits and write helpers for single-allocation MySQL packet serialization.
//!
//! Messages implement the `Message` trait, which allows calculating the wire
//! size before allocation. The size is also what the packet header declares,
//! so `wire_size()` and `write_to()` must agree byte for byte.

use crate::error::{Error, Result};
use crate::protocol::constants::*;

// ============================================================================
// Core Traits
// ============================================================================

/// A message that can calculate its wire size and serialize to bytes.
///
/// 1. Call `wire_size()` to determine the payload length
/// 2. Write the packet header with that length
/// 3. Call `write_to()` to serialize the payload directly into the buffer
pub trait Message {
    /// Calculate the serialized size in bytes (excluding packet header).
    fn wire_size(&self) -> usize;

    /// Write message content to buffer.
    ///
    /// Must write exactly `wire_size()` bytes.
    fn write_to(&self, buf: &mut Vec<u8>) -> Result<()>;
}

// ============================================================================
// Size Calculation Helpers
// ============================================================================

/// Calculate wire size for a length-encoded integer.
///
/// - 0-250: 1 byte
/// - 251-65535: 3 bytes (0xFC + u16)
/// - 65536-16777215: 4 bytes (0xFD + u24)
/// - larger: 9 bytes (0xFE + u64)
#[inline]
pub const fn lenenc_int_wire_size(val: u64) -> usize {
    match val {
        0..=LENENC_MAX_SINGLE_BYTE => 1,
        0xFB..=0xFFFF => 3,
        0x1_0000..=0xFF_FFFF => 4,
        _ => 9,
    }
}

/// Calculate wire size for bytes with a length-encoded prefix.
#[inline]
pub const fn bytes_with_length_wire_size(len: usize) -> usize {
    lenenc_int_wire_size(len as u64) + len
}

// ============================================================================
// Write Helpers
// ============================================================================

/// Extension trait for writing MySQL protocol data to `Vec<u8>`.
pub trait WriteExt {
    /// Write a single byte.
    fn write_u8(&mut self, val: u8);

    /// Write a little-endian u16.
    fn write_u16_le(&mut self, val: u16);

    /// Write the low 3 bytes of `val`, little-endian.
    fn write_u24_le(&mut self, val: u32);

    /// Write a little-endian u32.
    fn write_u32_le(&mut self, val: u32);

    /// Write a little-endian u64.
    fn write_u64_le(&mut self, val: u64);

    /// Write raw bytes.
    fn write_bytes(&mut self, bytes: &[u8]);

    /// Write zeros.
    fn write_zeros(&mut self, count: usize);

    /// Write a length-encoded integer.
    fn write_lenenc_int(&mut self, val: u64);

    /// Write bytes with a length-encoded prefix.
    fn write_bytes_with_length(&mut self, bytes: &[u8]) -> Result<()>;
}

impl WriteExt for Vec<u8> {
    #[inline]
    fn write_u8(&mut self, val: u8) {
        self.push(val);
    }

    #[inline]
    fn write_u16_le(&mut self, val: u16) {
        self.extend_from_slice(&val.to_le_bytes());
    }

    #[inline]
    fn write_u24_le(&mut self, val: u32) {
        self.extend_from_slice(&val.to_le_bytes()[..3]);
    }

    #[inline]
    fn write_u32_le(&mut self, val: u32) {
        self.extend_from_slice(&val.to_le_bytes());
    }

    #[inline]
    fn write_u64_le(&mut self, val: u64) {
        self.extend_from_slice(&val.to_le_bytes());
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    #[inline]
    fn write_zeros(&mut self, count: usize) {
        self.resize(self.len() + count, 0);
    }

    fn write_lenenc_int(&mut self, val: u64) {
        match lenenc_int_wire_size(val) {
            1 => self.push(val as u8),
            3 => {
                self.push(LENENC_U16);
                self.write_u16_le(val as u16);
            }
            4 => {
                self.push(LENENC_U24);
                self.write_u24_le(val as u32);
            }
            _ => {
                self.push(LENENC_U64);
                self.write_u64_le(val);
            }
        }
    }

    fn write_bytes_with_length(&mut self, bytes: &[u8]) -> Result<()> {
        let len = u64::try_from(bytes.len()).map_err(|_| Error::FieldTooLarge {
            field: "bytes",
            length: bytes.len(),
        })?;
        self.write_lenenc_int(len);
        self.extend_from_slice(bytes);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
