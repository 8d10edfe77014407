//! MySQL packet header and single-packet framing.

use crate::error::{Error, Result};
use crate::protocol::buffer::ReadBuffer;
use crate::protocol::constants::*;
use crate::protocol::message::{Message, WriteExt};
use bytes::Bytes;

/// The 4-byte preamble common to every MySQL packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    /// Payload length (3 bytes on the wire).
    pub payload_length: u32,
    /// Sequence id.
    pub sequence_id: u8,
}

impl PacketHeader {
    /// Create a header, rejecting payloads that do not fit 3 bytes.
    pub fn new(payload_length: usize, sequence_id: u8) -> Result<Self> {
        if payload_length > MAX_PAYLOAD_LENGTH {
            return Err(Error::PacketTooLarge {
                length: payload_length,
                max: MAX_PAYLOAD_LENGTH,
            });
        }
        Ok(Self {
            payload_length: payload_length as u32,
            sequence_id,
        })
    }

    /// Read a header from the buffer.
    pub fn read(buf: &mut ReadBuffer) -> Result<Self> {
        let payload_length = buf.read_u24_le()?;
        let sequence_id = buf.read_u8()?;
        Ok(Self {
            payload_length,
            sequence_id,
        })
    }

    /// Write the header to the buffer.
    pub fn write(&self, buf: &mut Vec<u8>) {
        buf.write_u24_le(self.payload_length);
        buf.write_u8(self.sequence_id);
    }
}

/// A single MySQL packet.
#[derive(Debug, Clone)]
pub struct Packet {
    /// Sequence id from the header.
    pub sequence_id: u8,
    /// Packet payload (excluding header).
    pub payload: Bytes,
}

impl Packet {
    /// Create a new packet with the given sequence id and payload.
    pub fn new(sequence_id: u8, payload: Bytes) -> Self {
        Self {
            sequence_id,
            payload,
        }
    }

    /// Split one packet off the front of `data`.
    ///
    /// The declared payload must be fully present. Bytes after it are ignored.
    pub fn parse(data: Bytes) -> Result<Self> {
        let mut buf = ReadBuffer::new(data);
        let header = PacketHeader::read(&mut buf)?;
        let payload = buf.read_bytes(header.payload_length as usize)?;
        Ok(Self {
            sequence_id: header.sequence_id,
            payload,
        })
    }

    /// Get the total packet size (header + payload).
    pub fn total_size(&self) -> usize {
        PACKET_HEADER_SIZE + self.payload.len()
    }

    /// Serialize the packet to bytes.
    pub fn to_bytes(&self) -> Result<Bytes> {
        let header = PacketHeader::new(self.payload.len(), self.sequence_id)?;
        let mut buf = Vec::with_capacity(self.total_size());
        header.write(&mut buf);
        buf.write_bytes(&self.payload);
        Ok(Bytes::from(buf))
    }
}

/// Append header + message to `buf`, taking the declared length from `wire_size()`.
///
/// On error `buf` is left as it was on entry.
pub fn write_message<M: Message>(buf: &mut Vec<u8>, msg: &M, sequence_id: u8) -> Result<()> {
    let payload_size = msg.wire_size();
    let header = PacketHeader::new(payload_size, sequence_id)?;
    buf.reserve(PACKET_HEADER_SIZE + payload_size);
    let start = buf.len();
    header.write(buf);
    let body_start = buf.len();
    if let Err(e) = msg.write_to(buf) {
        buf.truncate(start);
        return Err(e);
    }
    let written = buf.len() - body_start;
    if written != payload_size {
        tracing::debug!(declared = payload_size, written, "message size disagrees with header");
        buf.truncate(start);
        return Err(Error::PacketLengthMismatch {
            declared: payload_size,
            actual: written,
        });
    }
    Ok(())
}

/// Serialize a message as a complete packet in a single allocation.
pub fn encode_message<M: Message>(msg: &M, sequence_id: u8) -> Result<Bytes> {
    let mut buf = Vec::new();
    write_message(&mut buf, msg, sequence_id)?;
    Ok(Bytes::from(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Raw(&'static [u8]);

    impl Message for Raw {
        fn wire_size(&self) -> usize {
            self.0.len()
        }

        fn write_to(&self, buf: &mut Vec<u8>) -> Result<()> {
            buf.write_bytes(self.0);
            Ok(())
        }
    }

    struct Liar;

    impl Message for Liar {
        fn wire_size(&self) -> usize {
            2
        }

        fn write_to(&self, buf: &mut Vec<u8>) -> Result<()> {
            buf.write_u8(0);
            Ok(())
        }
    }

    struct HalfWritten;

    impl Message for HalfWritten {
        fn wire_size(&self) -> usize {
            4
        }

        fn write_to(&self, buf: &mut Vec<u8>) -> Result<()> {
            buf.write_bytes(&[0xAA, 0xBB]);
            Err(Error::protocol("body failed midway"))
        }
    }

    #[test]
    fn test_header_roundtrip() {
        let mut buf = Vec::new();
        PacketHeader::new(0x01_0203, 7).unwrap().write(&mut buf);
        assert_eq!(buf, vec![0x03, 0x02, 0x01, 0x07]);

        let mut rb = ReadBuffer::new(Bytes::from(buf));
        let header = PacketHeader::read(&mut rb).unwrap();
        assert_eq!(header.payload_length, 0x01_0203);
        assert_eq!(header.sequence_id, 7);
    }

    #[test]
    fn test_header_rejects_oversized_payload() {
        assert!(matches!(
            PacketHeader::new(MAX_PAYLOAD_LENGTH + 1, 0),
            Err(Error::PacketTooLarge { .. })
        ));
        assert!(PacketHeader::new(MAX_PAYLOAD_LENGTH, 0).is_ok());
    }

    #[test]
    fn test_parse_packet() {
        let data = Bytes::from_static(&[0x02, 0x00, 0x00, 0x03, 0xAA, 0xBB, 0xCC]);
        let packet = Packet::parse(data).unwrap();
        assert_eq!(packet.sequence_id, 3);
        assert_eq!(&packet.payload[..], &[0xAA, 0xBB]);
        assert_eq!(packet.total_size(), 6);
    }

    #[test]
    fn test_parse_packet_truncated() {
        let data = Bytes::from_static(&[0x05, 0x00, 0x00, 0x01, 0xAA]);
        assert!(matches!(
            Packet::parse(data),
            Err(Error::TruncatedPacket {
                needed: 5,
                available: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_encode_message() {
        let bytes = encode_message(&Raw(b"abc"), 2).unwrap();
        assert_eq!(&bytes[..], &[0x03, 0x00, 0x00, 0x02, b'a', b'b', b'c']);

        let packet = Packet::new(2, Bytes::from_static(b"abc"));
        assert_eq!(packet.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_encode_message_size_mismatch() {
        assert!(matches!(
            encode_message(&Liar, 0),
            Err(Error::PacketLengthMismatch {
                declared: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_write_message_error_leaves_buffer_untouched() {
        let previous = [0x01, 0x00, 0x00, 0x00, 0xFE];
        let mut buf = previous.to_vec();

        assert!(matches!(
            write_message(&mut buf, &Liar, 1),
            Err(Error::PacketLengthMismatch { .. })
        ));
        assert_eq!(buf, previous);

        assert!(matches!(
            write_message(&mut buf, &HalfWritten, 1),
            Err(Error::Protocol { .. })
        ));
        assert_eq!(buf, previous);

        write_message(&mut buf, &Raw(b"ok"), 1).unwrap();
        assert_eq!(&buf[previous.len()..], &[0x02, 0x00, 0x00, 0x01, b'o', b'k']);
    }
}
