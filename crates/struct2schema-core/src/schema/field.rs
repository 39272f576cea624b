/// A single column source, taken from one named struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field identifier as written in source, unrawed
    pub name: String,

    /// Identifier naming the field's type (e.g. `i64`, `String`)
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Field {
        Field {
            name: name.into(),
            ty: ty.into(),
        }
    }
}
