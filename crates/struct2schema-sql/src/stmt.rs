mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod ty;
pub use ty::{Type, TypeClass};

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
}

