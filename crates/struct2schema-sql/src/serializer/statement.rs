use super::{Ident, ToSql};

use crate::stmt;

struct Columns<'a>(&'a stmt::CreateTable);

impl ToSql for Columns<'_> {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let Some(last) = self.0.last_column_index() else {
            fmt!(f, "\n");
            return;
        };

        for (index, column) in self.0.columns.iter().enumerate() {
            fmt!(f, "\n    " column);
            if index < last {
                fmt!(f, ",");
            }
        }

        fmt!(f, "\n");
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };
        let name = Ident(&self.name);
        let columns = Columns(self);

        fmt!(f, "CREATE TABLE " if_not_exists name " (" columns ")");
    }
}

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        match self {
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
        }
    }
}
