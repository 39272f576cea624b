#[macro_use]
mod fmt;
use fmt::ToSql;

mod ident;
use ident::Ident;

// Fragment serializers
mod column_def;
mod statement;
mod ty;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string
///
/// Column types are resolved when the statement is built, so serialization
/// does not depend on the target dialect.
#[derive(Debug, Default, Clone)]
pub struct Serializer {}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer {}
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };

        stmt.to_sql(&mut fmt);

        ret
    }
}
