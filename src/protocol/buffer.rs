//! Buffer utilities for reading MySQL protocol data.

use crate::error::{Error, Result};
use crate::protocol::constants::*;
use crate::protocol::types::NullableBytes;
use bytes::Bytes;

/// A read cursor over a packet payload.
///
/// Reads advance strictly left to right. Every short read fails with
/// `Error::TruncatedPacket` and leaves the position unchanged.
pub struct ReadBuffer {
    data: Bytes,
    pos: usize,
}

impl ReadBuffer {
    /// Create a new read buffer from bytes.
    pub fn new(data: Bytes) -> Self {
        Self { data, pos: 0 }
    }

    /// Get the current position in the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the remaining bytes in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Check if the buffer has at least `n` bytes remaining.
    pub fn has_remaining(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    #[track_caller]
    fn ensure(&self, n: usize) -> Result<()> {
        if !self.has_remaining(n) {
            return Err(Error::truncated(n, self.remaining()));
        }
        Ok(())
    }

    #[track_caller]
    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }

    /// Skip `n` bytes.
    #[track_caller]
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.pos += n;
        Ok(())
    }

    /// Read a single byte.
    #[track_caller]
    pub fn read_u8(&mut self) -> Result<u8> {
        let [b] = self.take::<1>()?;
        Ok(b)
    }

    /// Read a little-endian u16.
    #[track_caller]
    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.take::<2>()?))
    }

    /// Read a little-endian 3-byte unsigned integer.
    #[track_caller]
    pub fn read_u24_le(&mut self) -> Result<u32> {
        let [b0, b1, b2] = self.take::<3>()?;
        Ok(u32::from_le_bytes([b0, b1, b2, 0]))
    }

    /// Read a little-endian u32.
    #[track_caller]
    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.take::<4>()?))
    }

    /// Read a little-endian u64.
    #[track_caller]
    pub fn read_u64_le(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.take::<8>()?))
    }

    /// Read raw bytes.
    #[track_caller]
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes> {
        self.ensure(n)?;
        let bytes = self.data.slice(self.pos..self.pos + n);
        self.pos += n;
        Ok(bytes)
    }

    /// Read a length-encoded integer.
    ///
    /// Returns `None` for the NULL marker (0xFB).
    #[track_caller]
    pub fn read_lenenc_int(&mut self) -> Result<Option<u64>> {
        let start = self.pos;
        let prefix = self.read_u8()?;
        let value = match prefix {
            LENENC_NULL => return Ok(None),
            LENENC_U16 => self.read_u16_le().map(u64::from),
            LENENC_U24 => self.read_u24_le().map(u64::from),
            LENENC_U64 => self.read_u64_le(),
            LENENC_INVALID => {
                self.pos = start;
                return Err(Error::InvalidLengthPrefix { prefix });
            }
            small => Ok(u64::from(small)),
        };
        match value {
            Ok(v) => Ok(Some(v)),
            Err(e) => {
                self.pos = start;
                Err(e)
            }
        }
    }

    /// Read a length-prefixed byte string.
    ///
    /// Both the NULL marker and a zero length decode to `NullableBytes::Absent`.
    #[track_caller]
    pub fn read_bytes_with_length(&mut self) -> Result<NullableBytes> {
        let start = self.pos;
        let length = match self.read_lenenc_int()? {
            None | Some(0) => return Ok(NullableBytes::Absent),
            Some(length) => length,
        };
        let length = match usize::try_from(length) {
            Ok(len) => len,
            Err(_) => {
                self.pos = start;
                return Err(Error::protocol(format!(
                    "length {} does not fit in memory",
                    length
                )));
            }
        };
        match self.read_bytes(length) {
            Ok(data) => Ok(NullableBytes::from(data)),
            Err(e) => {
                self.pos = start;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(data: &[u8]) -> ReadBuffer {
        ReadBuffer::new(Bytes::copy_from_slice(data))
    }

    #[test]
    fn test_read_fixed_width_le() {
        let mut b = buf(&[0x21, 0x00, 0x0B, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03]);
        assert_eq!(b.read_u16_le().unwrap(), 33);
        assert_eq!(b.read_u32_le().unwrap(), 11);
        assert_eq!(b.read_u24_le().unwrap(), 0x030201);
        assert_eq!(b.remaining(), 0);
    }

    #[test]
    fn test_short_read_is_truncated() {
        let mut b = buf(&[0x01]);
        let err = b.read_u16_le().unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedPacket {
                needed: 2,
                available: 1,
                ..
            }
        ));
        // position unchanged
        assert_eq!(b.position(), 0);
    }

    #[test]
    fn test_read_lenenc_int() {
        let mut b = buf(&[0xFA]);
        assert_eq!(b.read_lenenc_int().unwrap(), Some(250));

        let mut b = buf(&[0xFC, 0xFB, 0x00]);
        assert_eq!(b.read_lenenc_int().unwrap(), Some(251));

        let mut b = buf(&[0xFD, 0x00, 0x00, 0x01]);
        assert_eq!(b.read_lenenc_int().unwrap(), Some(0x010000));

        let mut b = buf(&[0xFE, 1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(b.read_lenenc_int().unwrap(), Some(1));

        let mut b = buf(&[0xFB]);
        assert_eq!(b.read_lenenc_int().unwrap(), None);
    }

    #[test]
    fn test_read_lenenc_int_invalid_prefix() {
        let mut b = buf(&[0xFF, 0x00]);
        assert!(matches!(
            b.read_lenenc_int(),
            Err(Error::InvalidLengthPrefix { prefix: 0xFF })
        ));
        assert_eq!(b.position(), 0);
    }

    #[test]
    fn test_read_lenenc_int_truncated_payload() {
        let mut b = buf(&[0xFC, 0x01]);
        assert!(matches!(
            b.read_lenenc_int(),
            Err(Error::TruncatedPacket { .. })
        ));
        assert_eq!(b.position(), 0);
    }

    #[test]
    fn test_read_bytes_with_length() {
        let mut b = buf(&[0x03, b'd', b'e', b'f', 0x00, 0xFB]);
        assert_eq!(
            b.read_bytes_with_length().unwrap(),
            NullableBytes::from(&b"def"[..])
        );
        assert_eq!(b.read_bytes_with_length().unwrap(), NullableBytes::Absent);
        assert_eq!(b.read_bytes_with_length().unwrap(), NullableBytes::Absent);
        assert_eq!(b.remaining(), 0);
    }

    #[test]
    fn test_read_bytes_with_length_short_payload() {
        let mut b = buf(&[0x05, b'a', b'b']);
        let err = b.read_bytes_with_length().unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedPacket {
                needed: 5,
                available: 2,
                ..
            }
        ));
        assert_eq!(b.position(), 0);
    }
}
