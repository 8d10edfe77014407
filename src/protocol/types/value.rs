//! Three-state byte string used for length-prefixed fields.

use crate::protocol::message::bytes_with_length_wire_size;
use bytes::Bytes;
use std::borrow::Cow;
use std::fmt;

/// A length-prefixed field value.
///
/// The in-memory model keeps absent and empty apart even though the wire
/// does not: both are written as a single `0x00` and both decode to `Absent`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NullableBytes {
    /// No value.
    #[default]
    Absent,
    /// A zero-length value.
    Empty,
    /// A non-empty value.
    Present(Bytes),
}

impl NullableBytes {
    /// Wrap bytes, mapping a zero-length input to `Empty`.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        if bytes.is_empty() {
            NullableBytes::Empty
        } else {
            NullableBytes::Present(bytes)
        }
    }

    /// Map `None` to `Absent` and `Some` through [`NullableBytes::new`].
    pub fn from_option<B: Into<Bytes>>(value: Option<B>) -> Self {
        value.map_or(NullableBytes::Absent, NullableBytes::new)
    }

    /// Check if the value is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, NullableBytes::Absent)
    }

    /// Get the raw bytes; `None` only when absent.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            NullableBytes::Absent => None,
            NullableBytes::Empty => Some(&[][..]),
            NullableBytes::Present(b) => Some(&b[..]),
        }
    }

    /// Number of payload bytes (0 when absent or empty).
    pub fn len(&self) -> usize {
        self.as_bytes().map_or(0, <[u8]>::len)
    }

    /// Check if there are no payload bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode as UTF-8, replacing invalid sequences.
    pub fn to_str_lossy(&self) -> Option<Cow<'_, str>> {
        self.as_bytes().map(String::from_utf8_lossy)
    }

    /// Bytes this value occupies as a length-prefixed field.
    ///
    /// An absent value costs one zero-length marker byte.
    pub fn wire_size(&self) -> usize {
        match self {
            NullableBytes::Absent => 1,
            NullableBytes::Empty => bytes_with_length_wire_size(0),
            NullableBytes::Present(b) => bytes_with_length_wire_size(b.len()),
        }
    }
}

impl From<Bytes> for NullableBytes {
    fn from(value: Bytes) -> Self {
        NullableBytes::new(value)
    }
}

impl From<Vec<u8>> for NullableBytes {
    fn from(value: Vec<u8>) -> Self {
        NullableBytes::new(value)
    }
}

impl From<&[u8]> for NullableBytes {
    fn from(value: &[u8]) -> Self {
        NullableBytes::new(Bytes::copy_from_slice(value))
    }
}

impl From<&str> for NullableBytes {
    fn from(value: &str) -> Self {
        NullableBytes::new(Bytes::copy_from_slice(value.as_bytes()))
    }
}

impl From<String> for NullableBytes {
    fn from(value: String) -> Self {
        NullableBytes::new(value.into_bytes())
    }
}

impl fmt::Display for NullableBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_str_lossy() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "NULL"),
        }
    }
}
