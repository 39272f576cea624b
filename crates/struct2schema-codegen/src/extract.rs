use crate::{Declaration, TypeShape, TypeSpec};

use quote::ToTokens;
use struct2schema_core::{
    schema::{Field, Table},
    Error, Result,
};
use syn::{ext::IdentExt, spanned::Spanned};

/// Derives a [`Table`] from a matched declaration.
///
/// Returns `Ok(None)` when no table name can be derived. When a declaration
/// carries several type specifications, the last one wins: each spec replaces
/// the previous outcome entirely, name and fields alike.
///
/// Fields must be named and typed with a simple identifier; anything else is
/// an error rather than a guess.
pub fn extract(decl: &Declaration) -> Result<Option<Table>> {
    let mut table = None;

    for spec in &decl.specs {
        table = extract_spec(spec)?;
    }

    Ok(table)
}

fn extract_spec(spec: &TypeSpec) -> Result<Option<Table>> {
    let Some(name) = spec.name() else {
        return Ok(None);
    };

    let mut table = Table::new(name);

    if let TypeShape::Struct(fields) = &spec.shape {
        for (position, field) in fields.iter().enumerate() {
            let field = extract_field(&table.name, position, field)?;
            table.fields.push(field);
        }
    }

    Ok(Some(table))
}

fn extract_field(table: &str, position: usize, field: &syn::Field) -> Result<Field> {
    let Some(ident) = &field.ident else {
        return Err(Error::unnamed_field(table, position));
    };

    let name = ident.unraw().to_string();

    let Some(ty) = simple_ident(&field.ty) else {
        return Err(Error::unsupported_field_type(
            table,
            name,
            field.ty.to_token_stream().to_string(),
            field.ty.span().start().line,
        ));
    };

    Ok(Field::new(name, ty.unraw().to_string()))
}

/// Returns the identifier naming `ty` if it is a plain, single-segment path.
fn simple_ident(ty: &syn::Type) -> Option<&syn::Ident> {
    match ty {
        syn::Type::Path(syn::TypePath { qself: None, path }) => path.get_ident(),
        syn::Type::Paren(ty) => simple_ident(&ty.elem),
        syn::Type::Group(ty) => simple_ident(&ty.elem),
        _ => None,
    }
}
