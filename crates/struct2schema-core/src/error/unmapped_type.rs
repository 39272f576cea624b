use super::Error;
use crate::Dialect;

/// Error when a field's type has no column type in the active dialect.
///
/// Only raised when unmapped types are configured to be denied; otherwise the
/// column is rendered without a type.
#[derive(Debug)]
pub(super) struct UnmappedTypeError {
    table: Box<str>,
    field: Box<str>,
    ty: Box<str>,
    dialect: Dialect,
}

impl std::error::Error for UnmappedTypeError {}

impl core::fmt::Display for UnmappedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unmapped type: {}.{} has type `{}` with no {} column type",
            self.table, self.field, self.ty, self.dialect
        )
    }
}

impl Error {
    /// Creates an unmapped type error.
    pub fn unmapped_type(
        table: impl Into<String>,
        field: impl Into<String>,
        ty: impl Into<String>,
        dialect: Dialect,
    ) -> Error {
        Error::from(super::ErrorKind::UnmappedType(UnmappedTypeError {
            table: table.into().into(),
            field: field.into().into(),
            ty: ty.into().into(),
            dialect,
        }))
    }

    /// Returns `true` if the root cause of this error is an unmapped type error.
    pub fn is_unmapped_type(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::UnmappedType(_))
    }
}
