use anyhow::Result;
use clap::Parser;
use struct2schema::{Config, Dialect, Generator, UnmappedTypes};

use std::{io, path::PathBuf};

/// Generate `CREATE TABLE` statements from Rust structs whose doc comments
/// contain `@struct2schema`.
#[derive(Parser, Debug)]
#[command(name = "struct2schema")]
#[command(version)]
pub struct Cli {
    /// Rust source files to scan, processed in the order given
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Database used for the generated SQL: sqlite3 or mysql
    #[arg(
        long = "db-type",
        alias = "dbType",
        env = "STRUCT2SCHEMA_DB_TYPE",
        default_value_t = Dialect::Sqlite
    )]
    dialect: Dialect,

    /// What to do with fields whose type has no column type: allow, warn or deny
    #[arg(long, default_value_t = UnmappedTypes::Warn)]
    unmapped: UnmappedTypes,
}

impl Cli {
    /// Configuration described by the parsed arguments
    pub fn config(&self) -> Config {
        Config::new()
            .dialect(self.dialect)
            .unmapped(self.unmapped)
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Generates DDL for every file and writes it to `out`
    pub fn run(&self, out: &mut impl io::Write) -> Result<()> {
        let generator = Generator::new(self.config());

        generator.process_paths(&self.files, out)?;
        out.flush()?;

        Ok(())
    }
}
