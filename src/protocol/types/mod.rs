//! Value types carried by MySQL column descriptors.

mod column_type;
mod flags;
mod value;

pub use column_type::ColumnType;
pub use flags::ColumnFlags;
pub use value::NullableBytes;
