mod config;
pub use config::{Config, UnmappedTypes};

mod generator;
pub use generator::Generator;

pub use struct2schema_codegen as codegen;
pub use struct2schema_core::{err, schema, Dialect, Error, Result};
pub use struct2schema_sql as sql;
