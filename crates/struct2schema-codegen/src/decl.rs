use syn::ext::IdentExt;

/// The kind of a top-level item, as far as schema generation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// `struct`, `enum`, `union` or `type` alias
    Type,

    /// Free function
    Fn,

    /// `use` import
    Use,

    /// `const` or `static`
    Value,

    /// Anything else (modules, traits, impls, macros, ...)
    Other,
}

/// A top-level declaration together with its doc comments.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Item kind
    pub kind: DeclKind,

    /// Doc comment lines attached to the item, in order
    pub docs: Vec<String>,

    /// Type specifications introduced by the declaration
    pub specs: Vec<TypeSpec>,
}

/// A named type and its shape.
#[derive(Debug, Clone)]
pub struct TypeSpec {
    /// Type identifier
    pub ident: Option<syn::Ident>,

    /// Type shape
    pub shape: TypeShape,
}

#[derive(Debug, Clone)]
pub enum TypeShape {
    /// Struct with its fields
    Struct(syn::Fields),

    /// Any type that is not a field aggregate
    Other,
}

impl Declaration {
    pub fn new(kind: DeclKind, docs: Vec<String>, specs: Vec<TypeSpec>) -> Declaration {
        Declaration { kind, docs, specs }
    }

    pub fn from_item(item: &syn::Item) -> Declaration {
        match item {
            syn::Item::Struct(item) => {
                Declaration::type_decl(&item.attrs, TypeSpec::from_struct(item))
            }
            syn::Item::Enum(item) => {
                Declaration::type_decl(&item.attrs, TypeSpec::other(&item.ident))
            }
            syn::Item::Union(item) => {
                Declaration::type_decl(&item.attrs, TypeSpec::other(&item.ident))
            }
            syn::Item::Type(item) => {
                Declaration::type_decl(&item.attrs, TypeSpec::other(&item.ident))
            }
            syn::Item::Fn(item) => {
                Declaration::new(DeclKind::Fn, doc_lines(&item.attrs), vec![])
            }
            syn::Item::Use(item) => {
                Declaration::new(DeclKind::Use, doc_lines(&item.attrs), vec![])
            }
            syn::Item::Const(item) => {
                Declaration::new(DeclKind::Value, doc_lines(&item.attrs), vec![])
            }
            syn::Item::Static(item) => {
                Declaration::new(DeclKind::Value, doc_lines(&item.attrs), vec![])
            }
            _ => Declaration::new(DeclKind::Other, vec![], vec![]),
        }
    }

    fn type_decl(attrs: &[syn::Attribute], spec: TypeSpec) -> Declaration {
        Declaration::new(DeclKind::Type, doc_lines(attrs), vec![spec])
    }
}

impl TypeSpec {
    pub fn from_struct(item: &syn::ItemStruct) -> TypeSpec {
        TypeSpec {
            ident: Some(item.ident.clone()),
            shape: TypeShape::Struct(item.fields.clone()),
        }
    }

    pub fn other(ident: &syn::Ident) -> TypeSpec {
        TypeSpec {
            ident: Some(ident.clone()),
            shape: TypeShape::Other,
        }
    }

    /// Table name for this type: the unrawed identifier, if there is one.
    pub fn name(&self) -> Option<String> {
        self.ident
            .as_ref()
            .map(|ident| ident.unraw().to_string())
            .filter(|name| !name.is_empty())
    }
}

/// Collects the values of outer `#[doc = "..."]` attributes, which is what
/// `///` and `/** */` comments desugar to.
fn doc_lines(attrs: &[syn::Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| matches!(attr.style, syn::AttrStyle::Outer))
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(syn::MetaNameValue {
                value:
                    syn::Expr::Lit(syn::ExprLit {
                        lit: syn::Lit::Str(lit),
                        ..
                    }),
                ..
            }) => Some(lit.value()),
            _ => None,
        })
        .collect()
}
