use crate::{DeclKind, Declaration};

/// Doc comment marker that opts a type declaration into schema generation.
pub const MARKER: &str = "@struct2schema";

/// Returns `true` if the declaration introduces a named type and one of its
/// doc comment lines contains [`MARKER`].
///
/// The check is a case-sensitive substring match, so the marker may share a
/// line with other text.
pub fn matches(decl: &Declaration) -> bool {
    if decl.kind != DeclKind::Type {
        return false;
    }

    decl.docs.iter().any(|line| line.contains(MARKER))
}
