//! CCI data-type tags (`T_CCI_U_TYPE`).
//!
//! These are the tag values the native library reports in a column-info
//! struct's `ext_type` field. The mirror passes the raw tag through as
//! `type_code`; this enum is the classification layer consumers (result
//! decoding, parameter binding) use on top of it.

use std::fmt;

/// A recognized CCI column type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CciType {
    Null = 0,
    Char = 1,
    String = 2,
    Nchar = 3,
    Varnchar = 4,
    Bit = 5,
    Varbit = 6,
    Numeric = 7,
    Int = 8,
    Short = 9,
    Monetary = 10,
    Float = 11,
    Double = 12,
    Date = 13,
    Time = 14,
    Timestamp = 15,
    Set = 16,
    Multiset = 17,
    Sequence = 18,
    Object = 19,
    Resultset = 20,
    Bigint = 21,
    Datetime = 22,
    Blob = 23,
    Clob = 24,
    Enum = 25,
    Ushort = 26,
    Uint = 27,
    Ubigint = 28,
    Timestamptz = 29,
    Timestampltz = 30,
    Datetimetz = 31,
    Datetimeltz = 32,
    Json = 33,
}

impl CciType {
    /// Resolve a widened type code into a recognized tag.
    ///
    /// Returns `None` for codes this crate does not enumerate; an unknown
    /// tag is data to pass along, not an error.
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            0 => CciType::Null,
            1 => CciType::Char,
            2 => CciType::String,
            3 => CciType::Nchar,
            4 => CciType::Varnchar,
            5 => CciType::Bit,
            6 => CciType::Varbit,
            7 => CciType::Numeric,
            8 => CciType::Int,
            9 => CciType::Short,
            10 => CciType::Monetary,
            11 => CciType::Float,
            12 => CciType::Double,
            13 => CciType::Date,
            14 => CciType::Time,
            15 => CciType::Timestamp,
            16 => CciType::Set,
            17 => CciType::Multiset,
            18 => CciType::Sequence,
            19 => CciType::Object,
            20 => CciType::Resultset,
            21 => CciType::Bigint,
            22 => CciType::Datetime,
            23 => CciType::Blob,
            24 => CciType::Clob,
            25 => CciType::Enum,
            26 => CciType::Ushort,
            27 => CciType::Uint,
            28 => CciType::Ubigint,
            29 => CciType::Timestamptz,
            30 => CciType::Timestampltz,
            31 => CciType::Datetimetz,
            32 => CciType::Datetimeltz,
            33 => CciType::Json,
            _ => return None,
        })
    }

    /// The raw tag value.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Whether this is a large-object type fetched via LOB handles.
    pub fn is_lob(self) -> bool {
        matches!(self, CciType::Blob | CciType::Clob)
    }

    /// Whether this is a numeric type.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            CciType::Numeric
                | CciType::Int
                | CciType::Short
                | CciType::Monetary
                | CciType::Float
                | CciType::Double
                | CciType::Bigint
                | CciType::Ushort
                | CciType::Uint
                | CciType::Ubigint
        )
    }

    /// Whether this is a collection type (SET / MULTISET / SEQUENCE).
    pub fn is_collection(self) -> bool {
        matches!(self, CciType::Set | CciType::Multiset | CciType::Sequence)
    }
}

impl fmt::Display for CciType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CciType::Null => "NULL",
            CciType::Char => "CHAR",
            CciType::String => "VARCHAR",
            CciType::Nchar => "NCHAR",
            CciType::Varnchar => "NCHAR VARYING",
            CciType::Bit => "BIT",
            CciType::Varbit => "BIT VARYING",
            CciType::Numeric => "NUMERIC",
            CciType::Int => "INT",
            CciType::Short => "SHORT",
            CciType::Monetary => "MONETARY",
            CciType::Float => "FLOAT",
            CciType::Double => "DOUBLE",
            CciType::Date => "DATE",
            CciType::Time => "TIME",
            CciType::Timestamp => "TIMESTAMP",
            CciType::Set => "SET",
            CciType::Multiset => "MULTISET",
            CciType::Sequence => "SEQUENCE",
            CciType::Object => "OBJECT",
            CciType::Resultset => "RESULTSET",
            CciType::Bigint => "BIGINT",
            CciType::Datetime => "DATETIME",
            CciType::Blob => "BLOB",
            CciType::Clob => "CLOB",
            CciType::Enum => "ENUM",
            CciType::Ushort => "SHORT UNSIGNED",
            CciType::Uint => "INT UNSIGNED",
            CciType::Ubigint => "BIGINT UNSIGNED",
            CciType::Timestamptz => "TIMESTAMPTZ",
            CciType::Timestampltz => "TIMESTAMPLTZ",
            CciType::Datetimetz => "DATETIMETZ",
            CciType::Datetimeltz => "DATETIMELTZ",
            CciType::Json => "JSON",
        };
        f.write_str(name)
    }
}
