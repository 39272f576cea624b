use std::collections::HashMap;

/// A registered user.
///
/// @struct2schema
pub struct User {
    pub ID: i32,
    pub Name: String,
}

/// Not persisted.
pub struct Session {
    pub token: String,
    pub claims: HashMap<String, String>,
}

/// @struct2schema: one row per order line
pub struct OrderLine {
    pub order_id: u64,
    pub quantity: u16,
    pub unit_price: f64,
    pub sku: String,
    pub flags: u8,
}

/// @struct2schema
pub fn not_a_table() {}

/// @struct2schema
pub enum Status {
    Active,
    Disabled,
}
