mod decl;
pub use decl::{DeclKind, Declaration, TypeShape, TypeSpec};

mod extract;
pub use extract::extract;

mod matcher;
pub use matcher::{matches, MARKER};

use struct2schema_core::{Error, Result};

/// Parses Rust source into its top-level declarations, in source order.
pub fn parse_file(src: &str) -> Result<Vec<Declaration>> {
    let file = syn::parse_file(src).map_err(parse_error)?;

    Ok(file.items.iter().map(Declaration::from_item).collect())
}

fn parse_error(err: syn::Error) -> Error {
    let start = err.span().start();
    Error::parse(err.to_string(), start.line, start.column)
}
