use crate::{Config, UnmappedTypes};

use struct2schema_codegen::{self as codegen, Declaration};
use struct2schema_core::{err, schema::Table, Error, Result};
use struct2schema_sql::{stmt::CreateTable, Serializer, Statement};

use std::{fs, io, path::Path};

/// Turns annotated structs in Rust source files into `CREATE TABLE` statements.
///
/// Files are processed in the order given and declarations in source order.
/// Each statement is written as soon as it is rendered, so output produced
/// before a fatal error is kept.
///
/// Reading, parsing and extraction errors are fatal and returned. A failed
/// write only loses that one statement: it is logged and processing moves on.
#[derive(Debug)]
pub struct Generator {
    config: Config,
    serializer: Serializer,
}

impl Generator {
    pub fn new(config: Config) -> Generator {
        Generator {
            config,
            serializer: Serializer::new(),
        }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Processes every file in order, stopping at the first fatal error.
    pub fn process_paths<P: AsRef<Path>>(
        &self,
        paths: impl IntoIterator<Item = P>,
        out: &mut impl io::Write,
    ) -> Result<()> {
        for path in paths {
            self.process_file(path.as_ref(), out)?;
        }

        Ok(())
    }

    pub fn process_file(&self, path: &Path, out: &mut impl io::Write) -> Result<()> {
        log::info!("processing file {}", path.display());

        let src = fs::read_to_string(path)
            .map_err(|e| Error::from(e).context(err!("reading {}", path.display())))?;

        self.process_source(&src, out)
            .map_err(|e| e.context(err!("processing {}", path.display())))
    }

    pub fn process_source(&self, src: &str, out: &mut impl io::Write) -> Result<()> {
        let decls = codegen::parse_file(src)?;

        for decl in &decls {
            self.process_declaration(decl, out)?;
        }

        Ok(())
    }

    pub fn process_declaration(&self, decl: &Declaration, out: &mut impl io::Write) -> Result<()> {
        if !codegen::matches(decl) {
            return Ok(());
        }

        let Some(table) = codegen::extract(decl)? else {
            log::debug!("annotated declaration has no type name; skipping");
            return Ok(());
        };

        let sql = self.render(&table)?;

        if let Err(e) = out.write_all(format!("{sql}\n\n").as_bytes()) {
            log::error!("writing table {}: {e}", table.name);
        }

        Ok(())
    }

    /// Renders the `CREATE TABLE` statement for one table.
    pub fn render(&self, table: &Table) -> Result<String> {
        let create = CreateTable::from_schema(table, self.config.dialect);
        self.check_unmapped(table, &create)?;

        Ok(self.serializer.serialize(&Statement::from(create)))
    }

    fn check_unmapped(&self, table: &Table, create: &CreateTable) -> Result<()> {
        let dialect = self.config.dialect;

        for column in create.unmapped_columns() {
            match self.config.unmapped {
                UnmappedTypes::Allow => {}
                UnmappedTypes::Warn => log::warn!(
                    "{}.{}: no {dialect} column type for `{}`",
                    table.name,
                    column.name,
                    column.source_ty
                ),
                UnmappedTypes::Deny => {
                    return Err(Error::unmapped_type(
                        &table.name,
                        &column.name,
                        &column.source_ty,
                        dialect,
                    ))
                }
            }
        }

        Ok(())
    }
}
