use super::Error;

/// Error when a field's type is not a simple type identifier.
///
/// This occurs for references, slices, arrays, tuples, pointers, qualified
/// paths (`std::string::String`) and generic types (`Vec<u8>`, `Option<i32>`).
/// Such fields are never guessed at; the run stops instead.
#[derive(Debug)]
pub(super) struct UnsupportedFieldTypeError {
    table: Box<str>,
    field: Box<str>,
    ty: Box<str>,
    line: usize,
}

impl std::error::Error for UnsupportedFieldTypeError {}

impl core::fmt::Display for UnsupportedFieldTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported field type: {}.{} has type `{}` (line {}); only simple type identifiers are supported",
            self.table, self.field, self.ty, self.line
        )
    }
}

impl Error {
    /// Creates an unsupported field type error.
    pub fn unsupported_field_type(
        table: impl Into<String>,
        field: impl Into<String>,
        ty: impl Into<String>,
        line: usize,
    ) -> Error {
        Error::from(super::ErrorKind::UnsupportedFieldType(
            UnsupportedFieldTypeError {
                table: table.into().into(),
                field: field.into().into(),
                ty: ty.into().into(),
                line,
            },
        ))
    }

    /// Returns `true` if the root cause of this error is an unsupported field type error.
    pub fn is_unsupported_field_type(&self) -> bool {
        matches!(
            self.root().kind(),
            super::ErrorKind::UnsupportedFieldType(_)
        )
    }
}
