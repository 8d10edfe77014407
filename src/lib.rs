//! Codec for the MySQL column descriptor (field) packet.
//!
//! A result set announces each of its columns with one column descriptor
//! packet. This crate decodes and encodes that packet byte for byte, along
//! with the length-encoded integer/string primitives and the 4-byte packet
//! header it sits behind.
//!
//! # Example
//!
//! ```
//! use mysql_field_packet::{ColumnDescriptor, ColumnType, Message, Result};
//!
//! fn main() -> Result<()> {
//!     let column = ColumnDescriptor::builder()
//!         .with_schema("test")
//!         .with_table("t1")
//!         .with_original_table("t1")
//!         .with_name("id")
//!         .with_original_name("id")
//!         .with_charset_id(33)
//!         .with_column_length(11)
//!         .with_column_type(ColumnType::Long)
//!         .with_sequence_id(2)
//!         .build()?;
//!
//!     let packet = column.to_packet()?;
//!     assert_eq!(packet.len(), 4 + column.wire_size());
//!
//!     let decoded = ColumnDescriptor::read(packet)?;
//!     assert_eq!(decoded, column);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod protocol;

// Re-export main types
pub use error::{Error, Result};
pub use protocol::{
    ColumnDescriptor, ColumnDescriptorBuilder, ColumnFlags, ColumnType, Message, NullableBytes,
    Packet, PacketHeader, ReadBuffer,
};
