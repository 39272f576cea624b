use struct2schema_codegen::{parse_file, DeclKind, TypeShape};

#[test]
fn declarations_in_source_order() {
    let decls = parse_file(
        r#"
use std::fmt;

/// @struct2schema
pub struct User {
    id: i32,
}

const LIMIT: usize = 10;

fn helper() {}

impl User {}

/// @struct2schema
enum Status {
    Active,
}
"#,
    )
    .unwrap();

    let kinds: Vec<_> = decls.iter().map(|decl| decl.kind).collect();
    assert_eq!(
        kinds,
        [
            DeclKind::Use,
            DeclKind::Type,
            DeclKind::Value,
            DeclKind::Fn,
            DeclKind::Other,
            DeclKind::Type,
        ]
    );

    assert_eq!(decls[1].docs, [" @struct2schema"]);
    assert_eq!(decls[1].specs.len(), 1);
    assert_eq!(decls[1].specs[0].name().as_deref(), Some("User"));
    assert!(matches!(decls[1].specs[0].shape, TypeShape::Struct(_)));
    assert!(matches!(decls[5].specs[0].shape, TypeShape::Other));
}

#[test]
fn empty_file_has_no_declarations() {
    assert!(parse_file("").unwrap().is_empty());
}

#[test]
fn syntax_error_is_a_parse_error() {
    let err = parse_file("struct User {\n    id: i32\n    name: String,\n}\n").unwrap_err();

    assert!(err.is_parse());
    assert!(err.to_string().starts_with("parse error at 3:"), "{err}");
}
