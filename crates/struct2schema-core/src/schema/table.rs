use super::Field;

/// Normalized description of one annotated struct.
///
/// A `Table` only exists for declarations that yielded a name. Fields keep
/// source declaration order, which becomes the column order of the rendered
/// statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Table name, taken from the type identifier
    pub name: String,

    /// Fields in declaration order
    pub fields: Vec<Field>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Table {
        Table {
            name: name.into(),
            fields: vec![],
        }
    }

    pub fn with_field(mut self, field: Field) -> Table {
        self.fields.push(field);
        self
    }
}
