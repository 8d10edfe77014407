//! MySQL protocol constants used by the field packet codec.
//!
//! Values follow the MySQL client/server protocol documentation.

// Packet header
pub const PACKET_HEADER_SIZE: usize = 4;
pub const MAX_PAYLOAD_LENGTH: usize = 0xFF_FFFF;

// Length-encoded integer prefixes
pub const LENENC_NULL: u8 = 0xFB;
pub const LENENC_U16: u8 = 0xFC;
pub const LENENC_U24: u8 = 0xFD;
pub const LENENC_U64: u8 = 0xFE;
pub const LENENC_INVALID: u8 = 0xFF;
pub const LENENC_MAX_SINGLE_BYTE: u64 = 0xFA;

// Field packet layout
pub const DEFAULT_CATALOG: &[u8] = b"def";
pub const FIELD_FIXED_LENGTH_MARKER: u8 = 0x0C;
pub const FIELD_FIXED_REGION_SIZE: usize = 13; // 1 + 2 + 4 + 1 + 2 + 1 + 2
pub const FIELD_TRAILING_FILLER_SIZE: usize = 2;
pub const FIELD_PACKET_MIN_SIZE: usize = 6 + FIELD_FIXED_REGION_SIZE;
pub const FIELD_PACKET_INFO: &str = "MySQL Field Packet";

// Field types
pub const MYSQL_TYPE_DECIMAL: u8 = 0x00;
pub const MYSQL_TYPE_TINY: u8 = 0x01;
pub const MYSQL_TYPE_SHORT: u8 = 0x02;
pub const MYSQL_TYPE_LONG: u8 = 0x03;
pub const MYSQL_TYPE_FLOAT: u8 = 0x04;
pub const MYSQL_TYPE_DOUBLE: u8 = 0x05;
pub const MYSQL_TYPE_NULL: u8 = 0x06;
pub const MYSQL_TYPE_TIMESTAMP: u8 = 0x07;
pub const MYSQL_TYPE_LONGLONG: u8 = 0x08;
pub const MYSQL_TYPE_INT24: u8 = 0x09;
pub const MYSQL_TYPE_DATE: u8 = 0x0A;
pub const MYSQL_TYPE_TIME: u8 = 0x0B;
pub const MYSQL_TYPE_DATETIME: u8 = 0x0C;
pub const MYSQL_TYPE_YEAR: u8 = 0x0D;
pub const MYSQL_TYPE_NEWDATE: u8 = 0x0E;
pub const MYSQL_TYPE_VARCHAR: u8 = 0x0F;
pub const MYSQL_TYPE_BIT: u8 = 0x10;
pub const MYSQL_TYPE_JSON: u8 = 0xF5;
pub const MYSQL_TYPE_NEWDECIMAL: u8 = 0xF6;
pub const MYSQL_TYPE_ENUM: u8 = 0xF7;
pub const MYSQL_TYPE_SET: u8 = 0xF8;
pub const MYSQL_TYPE_TINY_BLOB: u8 = 0xF9;
pub const MYSQL_TYPE_MEDIUM_BLOB: u8 = 0xFA;
pub const MYSQL_TYPE_LONG_BLOB: u8 = 0xFB;
pub const MYSQL_TYPE_BLOB: u8 = 0xFC;
pub const MYSQL_TYPE_VAR_STRING: u8 = 0xFD;
pub const MYSQL_TYPE_STRING: u8 = 0xFE;
pub const MYSQL_TYPE_GEOMETRY: u8 = 0xFF;

// Character set / collation ids
pub const CHARSET_LATIN1_SWEDISH_CI: u16 = 8;
pub const CHARSET_UTF8_GENERAL_CI: u16 = 33;
pub const CHARSET_UTF8MB4_GENERAL_CI: u16 = 45;
pub const CHARSET_BINARY: u16 = 63;
pub const CHARSET_UTF8MB4_0900_AI_CI: u16 = 255;
