use super::Error;
use crate::Dialect;

/// Error when a dialect name is not one of the supported dialects.
#[derive(Debug)]
pub(super) struct UnknownDialectError {
    name: Box<str>,
}

impl std::error::Error for UnknownDialectError {}

impl core::fmt::Display for UnknownDialectError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown dialect `{}`; expected one of: ", self.name)?;

        let mut s = "";
        for dialect in Dialect::ALL {
            write!(f, "{s}{dialect}")?;
            s = ", ";
        }

        Ok(())
    }
}

impl Error {
    /// Creates an unknown dialect error.
    pub fn unknown_dialect(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownDialect(UnknownDialectError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is an unknown dialect error.
    pub fn is_unknown_dialect(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::UnknownDialect(_))
    }
}
