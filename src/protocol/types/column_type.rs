//! MySQL field type enum.
//!
//! The descriptor stores the raw type code; this enum is a typed view over
//! the codes the server documents.

use crate::protocol::constants::*;

/// MySQL column data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Decimal,
    Tiny,
    Short,
    Long,
    Float,
    Double,
    Null,
    Timestamp,
    LongLong,
    Int24,
    Date,
    Time,
    Datetime,
    Year,
    NewDate,
    Varchar,
    Bit,
    Json,
    NewDecimal,
    Enum,
    Set,
    TinyBlob,
    MediumBlob,
    LongBlob,
    Blob,
    VarString,
    String,
    Geometry,
}

impl ColumnType {
    /// Map a raw type code, returning `None` for unknown codes.
    pub fn from_code(code: u8) -> Option<Self> {
        let ty = match code {
            MYSQL_TYPE_DECIMAL => ColumnType::Decimal,
            MYSQL_TYPE_TINY => ColumnType::Tiny,
            MYSQL_TYPE_SHORT => ColumnType::Short,
            MYSQL_TYPE_LONG => ColumnType::Long,
            MYSQL_TYPE_FLOAT => ColumnType::Float,
            MYSQL_TYPE_DOUBLE => ColumnType::Double,
            MYSQL_TYPE_NULL => ColumnType::Null,
            MYSQL_TYPE_TIMESTAMP => ColumnType::Timestamp,
            MYSQL_TYPE_LONGLONG => ColumnType::LongLong,
            MYSQL_TYPE_INT24 => ColumnType::Int24,
            MYSQL_TYPE_DATE => ColumnType::Date,
            MYSQL_TYPE_TIME => ColumnType::Time,
            MYSQL_TYPE_DATETIME => ColumnType::Datetime,
            MYSQL_TYPE_YEAR => ColumnType::Year,
            MYSQL_TYPE_NEWDATE => ColumnType::NewDate,
            MYSQL_TYPE_VARCHAR => ColumnType::Varchar,
            MYSQL_TYPE_BIT => ColumnType::Bit,
            MYSQL_TYPE_JSON => ColumnType::Json,
            MYSQL_TYPE_NEWDECIMAL => ColumnType::NewDecimal,
            MYSQL_TYPE_ENUM => ColumnType::Enum,
            MYSQL_TYPE_SET => ColumnType::Set,
            MYSQL_TYPE_TINY_BLOB => ColumnType::TinyBlob,
            MYSQL_TYPE_MEDIUM_BLOB => ColumnType::MediumBlob,
            MYSQL_TYPE_LONG_BLOB => ColumnType::LongBlob,
            MYSQL_TYPE_BLOB => ColumnType::Blob,
            MYSQL_TYPE_VAR_STRING => ColumnType::VarString,
            MYSQL_TYPE_STRING => ColumnType::String,
            MYSQL_TYPE_GEOMETRY => ColumnType::Geometry,
            _ => return None,
        };
        Some(ty)
    }

    /// Get the raw type code.
    pub fn code(&self) -> u8 {
        match self {
            ColumnType::Decimal => MYSQL_TYPE_DECIMAL,
            ColumnType::Tiny => MYSQL_TYPE_TINY,
            ColumnType::Short => MYSQL_TYPE_SHORT,
            ColumnType::Long => MYSQL_TYPE_LONG,
            ColumnType::Float => MYSQL_TYPE_FLOAT,
            ColumnType::Double => MYSQL_TYPE_DOUBLE,
            ColumnType::Null => MYSQL_TYPE_NULL,
            ColumnType::Timestamp => MYSQL_TYPE_TIMESTAMP,
            ColumnType::LongLong => MYSQL_TYPE_LONGLONG,
            ColumnType::Int24 => MYSQL_TYPE_INT24,
            ColumnType::Date => MYSQL_TYPE_DATE,
            ColumnType::Time => MYSQL_TYPE_TIME,
            ColumnType::Datetime => MYSQL_TYPE_DATETIME,
            ColumnType::Year => MYSQL_TYPE_YEAR,
            ColumnType::NewDate => MYSQL_TYPE_NEWDATE,
            ColumnType::Varchar => MYSQL_TYPE_VARCHAR,
            ColumnType::Bit => MYSQL_TYPE_BIT,
            ColumnType::Json => MYSQL_TYPE_JSON,
            ColumnType::NewDecimal => MYSQL_TYPE_NEWDECIMAL,
            ColumnType::Enum => MYSQL_TYPE_ENUM,
            ColumnType::Set => MYSQL_TYPE_SET,
            ColumnType::TinyBlob => MYSQL_TYPE_TINY_BLOB,
            ColumnType::MediumBlob => MYSQL_TYPE_MEDIUM_BLOB,
            ColumnType::LongBlob => MYSQL_TYPE_LONG_BLOB,
            ColumnType::Blob => MYSQL_TYPE_BLOB,
            ColumnType::VarString => MYSQL_TYPE_VAR_STRING,
            ColumnType::String => MYSQL_TYPE_STRING,
            ColumnType::Geometry => MYSQL_TYPE_GEOMETRY,
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColumnType::Decimal | ColumnType::NewDecimal => "DECIMAL",
            ColumnType::Tiny => "TINYINT",
            ColumnType::Short => "SMALLINT",
            ColumnType::Long => "INT",
            ColumnType::Float => "FLOAT",
            ColumnType::Double => "DOUBLE",
            ColumnType::Null => "NULL",
            ColumnType::Timestamp => "TIMESTAMP",
            ColumnType::LongLong => "BIGINT",
            ColumnType::Int24 => "MEDIUMINT",
            ColumnType::Date | ColumnType::NewDate => "DATE",
            ColumnType::Time => "TIME",
            ColumnType::Datetime => "DATETIME",
            ColumnType::Year => "YEAR",
            ColumnType::Varchar | ColumnType::VarString => "VARCHAR",
            ColumnType::Bit => "BIT",
            ColumnType::Json => "JSON",
            ColumnType::Enum => "ENUM",
            ColumnType::Set => "SET",
            ColumnType::TinyBlob => "TINYBLOB",
            ColumnType::MediumBlob => "MEDIUMBLOB",
            ColumnType::LongBlob => "LONGBLOB",
            ColumnType::Blob => "BLOB",
            ColumnType::String => "CHAR",
            ColumnType::Geometry => "GEOMETRY",
        };
        f.write_str(name)
    }
}
