use crate::stmt::Type;

use std::fmt;

/// The SQL-level type category a field is stored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageClass {
    Integer,
    Real,
    Text,
    Blob,

    /// A vector of `n` 32-bit floats, stored as a blob.
    FixedVector(usize),
}

impl StorageClass {
    /// Default storage class for a native type.
    ///
    /// Vectors have no meaningful default size and map to `FixedVector(0)`,
    /// which mapping validation rejects until a size is declared.
    pub fn from_type(ty: Type) -> StorageClass {
        match ty {
            Type::Bool
            | Type::I8
            | Type::I16
            | Type::I32
            | Type::I64
            | Type::U8
            | Type::U16
            | Type::U32
            | Type::U64
            | Type::Timestamp => StorageClass::Integer,
            Type::F32 | Type::F64 => StorageClass::Real,
            Type::String => StorageClass::Text,
            Type::Bytes => StorageClass::Blob,
            Type::Vector => StorageClass::FixedVector(0),
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, StorageClass::Integer)
    }

    pub fn is_text(self) -> bool {
        matches!(self, StorageClass::Text)
    }
}

/// Renders the declared SQL type, as it appears in DDL.
impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageClass::Integer => "INTEGER".fmt(f),
            StorageClass::Real => "REAL".fmt(f),
            StorageClass::Text => "TEXT".fmt(f),
            StorageClass::Blob => "BLOB".fmt(f),
            StorageClass::FixedVector(size) => write!(f, "F32_BLOB({size})"),
        }
    }
}
