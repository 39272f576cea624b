use struct2schema_core::{err, Dialect, Error};

use std::{fmt, str::FromStr};

/// Configuration for a generation run
///
/// Built once before any file is processed and owned by the
/// [`Generator`](crate::Generator) for the rest of the run.
#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Target dialect for column types
    pub dialect: Dialect,

    /// What to do with fields whose type has no column type
    pub unmapped: UnmappedTypes,
}

/// Policy for fields whose type has no column type in the target dialect
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UnmappedTypes {
    /// Render the column without a type
    Allow,

    /// Log a warning, then render the column without a type
    #[default]
    Warn,

    /// Stop the run with an error
    Deny,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target dialect
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set the unmapped type policy
    pub fn unmapped(mut self, unmapped: UnmappedTypes) -> Self {
        self.unmapped = unmapped;
        self
    }
}

impl UnmappedTypes {
    pub fn name(self) -> &'static str {
        match self {
            UnmappedTypes::Allow => "allow",
            UnmappedTypes::Warn => "warn",
            UnmappedTypes::Deny => "deny",
        }
    }
}

impl fmt::Display for UnmappedTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnmappedTypes {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allow" => Ok(UnmappedTypes::Allow),
            "warn" => Ok(UnmappedTypes::Warn),
            "deny" => Ok(UnmappedTypes::Deny),
            _ => Err(err!(
                "unknown unmapped type policy `{s}`; expected one of: allow, warn, deny"
            )),
        }
    }
}
