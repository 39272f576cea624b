use super::{Ident, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = Ident(&self.name);
        let ty = self.ty.as_ref().map(|ty| (" ", ty));

        fmt!(f, name ty);
    }
}
