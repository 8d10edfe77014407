//! MySQL protocol primitives and the column descriptor codec.

pub mod buffer;
pub mod constants;
pub mod message;
pub mod messages;
pub mod packet;
pub mod types;

pub use buffer::ReadBuffer;
pub use message::{Message, WriteExt};
pub use messages::{ColumnDescriptor, ColumnDescriptorBuilder};
pub use packet::{Packet, PacketHeader};
pub use types::{ColumnFlags, ColumnType, NullableBytes};
