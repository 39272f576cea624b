mod field;
pub use field::Field;

mod table;
pub use table::Table;
