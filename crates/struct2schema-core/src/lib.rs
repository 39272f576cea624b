mod dialect;
pub use dialect::Dialect;

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Field, Table};

/// A Result type alias that uses struct2schema's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
