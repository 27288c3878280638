//! Catalog Records
//!
//! Derived from Clover inventory on every request; nothing here is stored.

use rust_decimal::Decimal;

/// A purchasable unit: one item variant, or an item without variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variation {
    pub id: String,
    pub name: String,

    /// Currency units with two decimal places.
    pub price: Decimal,
}

/// A Clover category and the variations filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub variations: Vec<Variation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifier {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierGroup {
    pub id: String,
    pub name: String,
    pub min_required: Option<u32>,
    pub max_allowed: Option<u32>,
    pub modifiers: Vec<Modifier>,
}

/// Convert Clover minor units (cents) to currency units.
#[must_use]
pub fn minor_units_to_price(minor_units: i64) -> Decimal {
    Decimal::new(minor_units, 2)
}
