//! Column descriptor (field) packet.
//!
//! Sent by the server once per result-set column. Layout after the packet
//! header:
//!
//! ```text
//! lenenc str   catalog            (always "def" from real servers)
//! lenenc str   schema
//! lenenc str   table
//! lenenc str   original_table
//! lenenc str   name
//! lenenc str   original_name
//! 1            filler             (0x0C on write, ignored on read)
//! 2            charset_id
//! 4            column_length
//! 1            type_code
//! 2            flags
//! 1            decimals
//! 2            filler             (0x00 0x00)
//! lenenc str   default_value      (only if bytes remain)
//! ```
//!
//! Absent and empty strings are both written as a single `0x00` byte and both
//! decode to [`NullableBytes::Absent`]. The `0xFB` NULL marker is accepted on
//! read but never written.

use std::fmt;

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::protocol::buffer::ReadBuffer;
use crate::protocol::constants::*;
use crate::protocol::message::{Message, WriteExt};
use crate::protocol::packet::{encode_message, write_message, Packet, PacketHeader};
use crate::protocol::types::{ColumnFlags, ColumnType, NullableBytes};

/// Metadata for one result-set column.
///
/// Immutable once built; use [`ColumnDescriptor::builder`] or
/// [`ColumnDescriptor::to_builder`] to construct a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    catalog: NullableBytes,
    schema: NullableBytes,
    table: NullableBytes,
    original_table: NullableBytes,
    name: NullableBytes,
    original_name: NullableBytes,
    charset_id: u16,
    column_length: u32,
    type_code: u8,
    flags: u16,
    decimals: u8,
    default_value: NullableBytes,
    sequence_id: u8,
}

impl ColumnDescriptor {
    /// Start building a descriptor with the protocol defaults.
    pub fn builder() -> ColumnDescriptorBuilder {
        ColumnDescriptorBuilder::new()
    }

    /// Copy this descriptor's fields into a builder.
    pub fn to_builder(&self) -> ColumnDescriptorBuilder {
        ColumnDescriptorBuilder {
            inner: self.clone(),
        }
    }

    /// Decode a descriptor from a payload cursor.
    ///
    /// The packet header must already be consumed; its sequence id is passed
    /// in. Bytes after the default value are left unread.
    pub fn decode(buf: &mut ReadBuffer, sequence_id: u8) -> Result<Self> {
        let catalog = buf.read_bytes_with_length()?;
        let schema = buf.read_bytes_with_length()?;
        let table = buf.read_bytes_with_length()?;
        let original_table = buf.read_bytes_with_length()?;
        let name = buf.read_bytes_with_length()?;
        let original_name = buf.read_bytes_with_length()?;

        buf.skip(1)?;
        let charset_id = buf.read_u16_le()?;
        let column_length = buf.read_u32_le()?;
        let type_code = buf.read_u8()?;
        let flags = buf.read_u16_le()?;
        let decimals = buf.read_u8()?;
        buf.skip(FIELD_TRAILING_FILLER_SIZE)?;

        let default_value = if buf.has_remaining(1) {
            buf.read_bytes_with_length()?
        } else {
            NullableBytes::Absent
        };

        let descriptor = Self {
            catalog,
            schema,
            table,
            original_table,
            name,
            original_name,
            charset_id,
            column_length,
            type_code,
            flags,
            decimals,
            default_value,
            sequence_id,
        };
        tracing::trace!(
            name = %descriptor.name,
            type_code,
            sequence_id,
            "decoded column descriptor"
        );
        Ok(descriptor)
    }

    /// Decode a descriptor from a payload that has already been split off its header.
    pub fn from_payload(payload: Bytes, sequence_id: u8) -> Result<Self> {
        let mut buf = ReadBuffer::new(payload);
        Self::decode(&mut buf, sequence_id)
    }

    /// Decode a descriptor from a framed packet.
    pub fn from_packet(packet: &Packet) -> Result<Self> {
        Self::from_payload(packet.payload.clone(), packet.sequence_id)
    }

    /// Decode a complete packet: 4-byte header followed by the payload.
    ///
    /// The payload must be consumed exactly.
    pub fn read(data: Bytes) -> Result<Self> {
        let mut buf = ReadBuffer::new(data);
        let header = PacketHeader::read(&mut buf)?;
        let declared = header.payload_length as usize;
        let payload = buf.read_bytes(declared)?;

        let mut body = ReadBuffer::new(payload);
        let descriptor = Self::decode(&mut body, header.sequence_id)?;
        if body.remaining() != 0 {
            tracing::debug!(
                declared,
                unread = body.remaining(),
                "column descriptor did not consume its payload"
            );
            return Err(Error::PacketLengthMismatch {
                declared,
                actual: body.position(),
            });
        }
        Ok(descriptor)
    }

    /// Serialize the payload only (no header).
    pub fn encode(&self) -> Result<Bytes> {
        let mut buf = Vec::with_capacity(self.wire_size());
        self.write_to(&mut buf)?;
        Ok(Bytes::from(buf))
    }

    /// Serialize header and payload as one packet.
    pub fn to_packet(&self) -> Result<Bytes> {
        encode_message(self, self.sequence_id)
    }

    /// Append header and payload to `buf`.
    pub fn write_packet(&self, buf: &mut Vec<u8>) -> Result<()> {
        write_message(buf, self, self.sequence_id)
    }

    pub fn catalog(&self) -> &NullableBytes {
        &self.catalog
    }

    pub fn schema(&self) -> &NullableBytes {
        &self.schema
    }

    pub fn table(&self) -> &NullableBytes {
        &self.table
    }

    pub fn original_table(&self) -> &NullableBytes {
        &self.original_table
    }

    pub fn name(&self) -> &NullableBytes {
        &self.name
    }

    pub fn original_name(&self) -> &NullableBytes {
        &self.original_name
    }

    /// Character set / collation id.
    pub fn charset_id(&self) -> u16 {
        self.charset_id
    }

    /// Maximum display width in bytes.
    pub fn column_length(&self) -> u32 {
        self.column_length
    }

    /// Raw MySQL type code.
    pub fn type_code(&self) -> u8 {
        self.type_code
    }

    /// Typed view of the type code, `None` for codes this crate doesn't know.
    pub fn column_type(&self) -> Option<ColumnType> {
        ColumnType::from_code(self.type_code)
    }

    /// Raw flag bits, exactly as received or built.
    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn column_flags(&self) -> ColumnFlags {
        ColumnFlags::from_bits_retain(self.flags)
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn default_value(&self) -> &NullableBytes {
        &self.default_value
    }

    pub fn sequence_id(&self) -> u8 {
        self.sequence_id
    }

    pub fn packet_info(&self) -> &'static str {
        FIELD_PACKET_INFO
    }
}

fn write_field(buf: &mut Vec<u8>, field: &'static str, value: &NullableBytes) -> Result<()> {
    match value {
        NullableBytes::Absent | NullableBytes::Empty => {
            buf.write_u8(0);
            Ok(())
        }
        NullableBytes::Present(bytes) => {
            buf.write_bytes_with_length(bytes).map_err(|e| match e {
                Error::FieldTooLarge { length, .. } => Error::FieldTooLarge { field, length },
                other => other,
            })
        }
    }
}

impl Message for ColumnDescriptor {
    fn wire_size(&self) -> usize {
        let mut size = 0;

        size += self.catalog.wire_size();
        size += self.schema.wire_size();
        size += self.table.wire_size();
        size += self.original_table.wire_size();
        size += self.name.wire_size();
        size += self.original_name.wire_size();

        size += FIELD_FIXED_REGION_SIZE;

        if !self.default_value.is_absent() {
            size += self.default_value.wire_size();
        }

        size
    }

    fn write_to(&self, buf: &mut Vec<u8>) -> Result<()> {
        let start = buf.len();
        write_field(buf, "catalog", &self.catalog)?;
        write_field(buf, "schema", &self.schema)?;
        write_field(buf, "table", &self.table)?;
        write_field(buf, "original_table", &self.original_table)?;
        write_field(buf, "name", &self.name)?;
        write_field(buf, "original_name", &self.original_name)?;

        buf.write_u8(FIELD_FIXED_LENGTH_MARKER);
        buf.write_u16_le(self.charset_id);
        buf.write_u32_le(self.column_length);
        buf.write_u8(self.type_code);
        buf.write_u16_le(self.flags);
        buf.write_u8(self.decimals);
        buf.write_zeros(FIELD_TRAILING_FILLER_SIZE);

        // An absent default is omitted entirely, not written as a marker.
        if !self.default_value.is_absent() {
            write_field(buf, "default_value", &self.default_value)?;
        }

        tracing::trace!(
            name = %self.name,
            written = buf.len() - start,
            "encoded column descriptor"
        );
        Ok(())
    }
}

impl fmt::Display for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.schema.is_absent() {
            write!(f, "{}.", self.schema)?;
        }
        if !self.table.is_absent() {
            write!(f, "{}.", self.table)?;
        }
        write!(f, "{}", self.name)?;
        match self.column_type() {
            Some(ty) => write!(f, " {}({})", ty, self.column_length),
            None => write!(f, " type#{:#04x}({})", self.type_code, self.column_length),
        }
    }
}

/// Builder for [`ColumnDescriptor`].
///
/// Defaults: catalog `"def"`, every other string absent, numeric fields 0,
/// no default value, sequence id 0.
#[derive(Debug, Clone)]
pub struct ColumnDescriptorBuilder {
    inner: ColumnDescriptor,
}

impl ColumnDescriptorBuilder {
    pub fn new() -> Self {
        Self {
            inner: ColumnDescriptor {
                catalog: NullableBytes::new(Bytes::from_static(DEFAULT_CATALOG)),
                schema: NullableBytes::Absent,
                table: NullableBytes::Absent,
                original_table: NullableBytes::Absent,
                name: NullableBytes::Absent,
                original_name: NullableBytes::Absent,
                charset_id: 0,
                column_length: 0,
                type_code: 0,
                flags: 0,
                decimals: 0,
                default_value: NullableBytes::Absent,
                sequence_id: 0,
            },
        }
    }

    pub fn with_catalog(mut self, catalog: impl Into<NullableBytes>) -> Self {
        self.inner.catalog = catalog.into();
        self
    }

    pub fn with_schema(mut self, schema: impl Into<NullableBytes>) -> Self {
        self.inner.schema = schema.into();
        self
    }

    pub fn with_table(mut self, table: impl Into<NullableBytes>) -> Self {
        self.inner.table = table.into();
        self
    }

    pub fn with_original_table(mut self, original_table: impl Into<NullableBytes>) -> Self {
        self.inner.original_table = original_table.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<NullableBytes>) -> Self {
        self.inner.name = name.into();
        self
    }

    pub fn with_original_name(mut self, original_name: impl Into<NullableBytes>) -> Self {
        self.inner.original_name = original_name.into();
        self
    }

    pub fn with_charset_id(mut self, charset_id: u16) -> Self {
        self.inner.charset_id = charset_id;
        self
    }

    pub fn with_column_length(mut self, column_length: u32) -> Self {
        self.inner.column_length = column_length;
        self
    }

    pub fn with_type_code(mut self, type_code: u8) -> Self {
        self.inner.type_code = type_code;
        self
    }

    pub fn with_column_type(self, column_type: ColumnType) -> Self {
        self.with_type_code(column_type.code())
    }

    pub fn with_flags(mut self, flags: u16) -> Self {
        self.inner.flags = flags;
        self
    }

    pub fn with_column_flags(self, flags: ColumnFlags) -> Self {
        self.with_flags(flags.bits())
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.inner.decimals = decimals;
        self
    }

    pub fn with_default_value(mut self, default_value: impl Into<NullableBytes>) -> Self {
        self.inner.default_value = default_value.into();
        self
    }

    pub fn with_sequence_id(mut self, sequence_id: u8) -> Self {
        self.inner.sequence_id = sequence_id;
        self
    }

    /// Finish the descriptor.
    ///
    /// Fails with `PacketTooLarge` if the payload cannot be framed in a single packet.
    pub fn build(self) -> Result<ColumnDescriptor> {
        let size = self.inner.wire_size();
        if size > MAX_PAYLOAD_LENGTH {
            return Err(Error::PacketTooLarge {
                length: size,
                max: MAX_PAYLOAD_LENGTH,
            });
        }
        Ok(self.inner)
    }
}

impl Default for ColumnDescriptorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
