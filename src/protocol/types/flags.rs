//! Column attribute flags.

bitflags::bitflags! {
    /// Column definition flags.
    ///
    /// The codec passes the raw `u16` through unchanged; this is only a view.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ColumnFlags: u16 {
        /// Field can't be `NULL`.
        const NOT_NULL = 1;
        /// Field is part of a primary key.
        const PRIMARY_KEY = 2;
        /// Field is part of a unique key.
        const UNIQUE_KEY = 4;
        /// Field is part of a multi-part unique or primary key.
        const MULTIPLE_KEY = 8;
        /// Field is a blob.
        const BLOB = 16;
        /// Field is unsigned.
        const UNSIGNED = 32;
        /// Field is zero filled.
        const ZEROFILL = 64;
        /// Field has a binary collation.
        const BINARY = 128;
        /// Field is an enumeration.
        const ENUM = 256;
        /// Field is an auto-increment field.
        const AUTO_INCREMENT = 512;
        /// Field is a timestamp.
        const TIMESTAMP = 1024;
        /// Field is a set.
        const SET = 2048;
        /// Field does not have a default value.
        const NO_DEFAULT_VALUE = 4096;
        /// Field is set to NOW on UPDATE.
        const ON_UPDATE_NOW = 8192;
        /// Field is part of some key.
        const PART_KEY = 16384;
        /// Field is a number.
        const NUM = 32768;
    }
}
