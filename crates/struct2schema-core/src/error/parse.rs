use super::Error;

/// Error when a source file cannot be parsed.
///
/// The whole run stops on this error; there is no per-file recovery.
#[derive(Debug)]
pub(super) struct ParseError {
    message: Box<str>,
    line: usize,
    column: usize,
}

impl std::error::Error for ParseError {}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "parse error at {}:{}: {}",
            self.line, self.column, self.message
        )
    }
}

impl Error {
    /// Creates a parse error located at `line`:`column` (1-based line, 0-based column).
    pub fn parse(message: impl Into<String>, line: usize, column: usize) -> Error {
        Error::from(super::ErrorKind::Parse(ParseError {
            message: message.into().into(),
            line,
            column,
        }))
    }

    /// Returns `true` if the root cause of this error is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::Parse(_))
    }
}
