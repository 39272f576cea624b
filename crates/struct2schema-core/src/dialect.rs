use crate::Error;

use std::{fmt, str::FromStr};

/// Target database flavor for generated DDL.
///
/// The dialect is picked once, before any file is processed, and handed to
/// the serializer by value. Only the column types of rendered statements
/// depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Embedded, file-based database
    #[default]
    Sqlite,

    /// Client-server database
    Mysql,
}

impl Dialect {
    /// All supported dialects, in the order they are listed to users.
    pub const ALL: [Dialect; 2] = [Dialect::Sqlite, Dialect::Mysql];

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Sqlite => "sqlite3",
            Dialect::Mysql => "mysql",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlite3" | "sqlite" => Ok(Dialect::Sqlite),
            "mysql" => Ok(Dialect::Mysql),
            _ => Err(Error::unknown_dialect(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("sqlite3".parse::<Dialect>().unwrap(), Dialect::Sqlite);
        assert_eq!("sqlite".parse::<Dialect>().unwrap(), Dialect::Sqlite);
        assert_eq!("mysql".parse::<Dialect>().unwrap(), Dialect::Mysql);
    }

    #[test]
    fn name_round_trips() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.name().parse::<Dialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "postgres".parse::<Dialect>().unwrap_err();
        assert!(err.is_unknown_dialect());
        assert_eq!(
            err.to_string(),
            "unknown dialect `postgres`; expected one of: sqlite3, mysql"
        );
    }

    #[test]
    fn default_is_sqlite() {
        assert_eq!(Dialect::default(), Dialect::Sqlite);
    }
}
