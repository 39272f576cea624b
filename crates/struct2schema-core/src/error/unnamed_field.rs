use super::Error;

/// Error when an annotated struct has a field without an identifier.
///
/// Tuple struct fields cannot name a column.
#[derive(Debug)]
pub(super) struct UnnamedFieldError {
    table: Box<str>,
    position: usize,
}

impl std::error::Error for UnnamedFieldError {}

impl core::fmt::Display for UnnamedFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unnamed field: {} field #{} has no identifier",
            self.table, self.position
        )
    }
}

impl Error {
    /// Creates an unnamed field error. `position` is the field's 0-based index.
    pub fn unnamed_field(table: impl Into<String>, position: usize) -> Error {
        Error::from(super::ErrorKind::UnnamedField(UnnamedFieldError {
            table: table.into().into(),
            position,
        }))
    }

    /// Returns `true` if the root cause of this error is an unnamed field error.
    pub fn is_unnamed_field(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::UnnamedField(_))
    }
}
