use super::*;

use struct2schema_core::{schema::Table, Dialect};

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Emit `IF NOT EXISTS`
    pub if_not_exists: bool,
}

impl CreateTable {
    /// Builds the statement for `table`, mapping every field type for `dialect`.
    pub fn from_schema(table: &Table, dialect: Dialect) -> CreateTable {
        CreateTable {
            name: table.name.clone(),
            columns: table
                .fields
                .iter()
                .map(|field| ColumnDef::from_schema(field, dialect))
                .collect(),
            if_not_exists: true,
        }
    }

    /// Index of the last column; no comma is rendered after it.
    pub fn last_column_index(&self) -> Option<usize> {
        self.columns.len().checked_sub(1)
    }

    /// Columns whose source type has no column type in the statement's dialect.
    pub fn unmapped_columns(&self) -> impl Iterator<Item = &ColumnDef> + '_ {
        self.columns.iter().filter(|column| column.ty.is_none())
    }
}

impl Statement {
    pub fn create_table(table: &Table, dialect: Dialect) -> Self {
        CreateTable::from_schema(table, dialect).into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
