use struct2schema_core::Dialect;

use std::fmt;

/// Groups of source types that share a column type in every dialect.
///
/// Databases distinguish far fewer integer widths than Rust does, so the
/// grouping is lossy: signedness is dropped, and so is width under SQLite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    /// `i8`, `u8`
    Int8,

    /// `i16`, `u16`
    Int16,

    /// `i32`, `u32`, `char`, `isize`, `usize`
    Int32,

    /// `i64`, `u64`
    Int64,

    /// `f32`, `f64`
    Float,

    /// `String`, `str`
    Text,
}

impl TypeClass {
    pub fn from_source(ty: &str) -> Option<TypeClass> {
        Some(match ty {
            "i8" | "u8" => TypeClass::Int8,
            "i16" | "u16" => TypeClass::Int16,
            // Pointer-sized integers map like 32-bit ones
            "i32" | "u32" | "char" | "isize" | "usize" => TypeClass::Int32,
            "i64" | "u64" => TypeClass::Int64,
            "f32" | "f64" => TypeClass::Float,
            "String" | "str" => TypeClass::Text,
            _ => return None,
        })
    }
}

/// A column type as rendered in DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Integer,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Real,
    Float,
    Text,
    MediumText,
}

impl Type {
    /// Maps a source type name to its column type, `None` if it has none.
    pub fn from_source(ty: &str, dialect: Dialect) -> Option<Type> {
        TypeClass::from_source(ty).map(|class| Type::from_class(class, dialect))
    }

    pub fn from_class(class: TypeClass, dialect: Dialect) -> Type {
        match dialect {
            Dialect::Sqlite => match class {
                TypeClass::Int8 | TypeClass::Int16 | TypeClass::Int32 | TypeClass::Int64 => {
                    Type::Integer
                }
                TypeClass::Float => Type::Real,
                TypeClass::Text => Type::Text,
            },
            Dialect::Mysql => match class {
                TypeClass::Int8 => Type::TinyInt,
                TypeClass::Int16 => Type::SmallInt,
                TypeClass::Int32 => Type::Int,
                TypeClass::Int64 => Type::BigInt,
                TypeClass::Float => Type::Float,
                TypeClass::Text => Type::MediumText,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Type::Integer => "INTEGER",
            Type::TinyInt => "TINYINT",
            Type::SmallInt => "SMALLINT",
            Type::Int => "INT",
            Type::BigInt => "BIGINT",
            Type::Real => "REAL",
            Type::Float => "FLOAT",
            Type::Text => "TEXT",
            Type::MediumText => "MEDIUMTEXT",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
