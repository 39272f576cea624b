use super::Type;

use struct2schema_core::{schema::Field, Dialect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,

    /// Type the column was derived from
    pub source_ty: String,

    /// `None` when the source type has no mapping
    pub ty: Option<Type>,
}

impl ColumnDef {
    pub fn from_schema(field: &Field, dialect: Dialect) -> ColumnDef {
        ColumnDef {
            name: field.name.clone(),
            source_ty: field.ty.clone(),
            ty: Type::from_source(&field.ty, dialect),
        }
    }
}
