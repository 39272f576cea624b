mod adhoc;
mod parse;
mod unknown_dialect;
mod unmapped_type;
mod unnamed_field;
mod unsupported_field_type;

use adhoc::AdhocError;
use parse::ParseError;
use unknown_dialect::UnknownDialectError;
use unmapped_type::UnmappedTypeError;
use unnamed_field::UnnamedFieldError;
use unsupported_field_type::UnsupportedFieldTypeError;

/// Creates an ad-hoc [`Error`] from a format string.
///
/// Mostly used to build context for [`Error::context`].
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while generating a schema.
pub struct Error {
    inner: Box<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, mut consequent: Error) -> Error {
        assert!(
            consequent.inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        consequent.inner.cause = Some(self);
        consequent
    }

    /// Creates an error from pre-formatted arguments.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args)))
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Parse(ParseError),
    UnknownDialect(UnknownDialectError),
    UnmappedType(UnmappedTypeError),
    UnnamedField(UnnamedFieldError),
    UnsupportedFieldType(UnsupportedFieldTypeError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Parse(err) => core::fmt::Display::fmt(err, f),
            UnknownDialect(err) => core::fmt::Display::fmt(err, f),
            UnmappedType(err) => core::fmt::Display::fmt(err, f),
            UnnamedField(err) => core::fmt::Display::fmt(err, f),
            UnsupportedFieldType(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Error>();
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = err!("root cause");
        let mid = err!("middle context");
        let top = err!("top context");

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn predicates_look_at_root_cause() {
        let err = Error::parse("expected `;`", 3, 7).context(err!("processing file src/lib.rs"));

        assert!(err.is_parse());
        assert_eq!(
            err.to_string(),
            "processing file src/lib.rs: parse error at 3:7: expected `;`"
        );
    }

    #[test]
    fn std_error_bridge() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let our_err: Error = io_err.into();
        assert!(our_err.to_string().contains("file not found"));
    }

    #[test]
    fn unsupported_field_type_display() {
        let err = Error::unsupported_field_type("User", "tags", "Vec < String >", 12);
        assert!(err.is_unsupported_field_type());
        assert_eq!(
            err.to_string(),
            "unsupported field type: User.tags has type `Vec < String >` (line 12); only simple type identifiers are supported"
        );
    }

    #[test]
    fn unnamed_field_display() {
        let err = Error::unnamed_field("Point", 1);
        assert!(err.is_unnamed_field());
        assert_eq!(
            err.to_string(),
            "unnamed field: Point field #1 has no identifier"
        );
    }

    #[test]
    fn unmapped_type_display() {
        let err = Error::unmapped_type("User", "active", "bool", crate::Dialect::Mysql);
        assert!(err.is_unmapped_type());
        assert_eq!(
            err.to_string(),
            "unmapped type: User.active has type `bool` with no mysql column type"
        );
    }
}
