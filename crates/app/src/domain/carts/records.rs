//! Cart Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    domain::{merchants::records::MerchantUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItemRecord>;

/// Cart Item Modifier UUID
pub type CartItemModifierUuid = TypedUuid<CartItemModifierRecord>;

/// Lifecycle state of a cart. Only `Active` carts are looked up by session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartStatus {
    Active,
    Closed,
    Abandoned,
}

impl CartStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
            Self::Abandoned => "abandoned",
        }
    }
}

impl fmt::Display for CartStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown cart status: {0}")]
pub struct UnknownCartStatus(String);

impl FromStr for CartStatus {
    type Err = UnknownCartStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "closed" => Ok(Self::Closed),
            "abandoned" => Ok(Self::Abandoned),
            other => Err(UnknownCartStatus(other.to_string())),
        }
    }
}

/// Cart Record
///
/// `subtotal` and `total` are minor units and only ever written by the
/// totals recalculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub merchant_uuid: MerchantUuid,
    pub session_id: Option<String>,
    pub customer_uuid: Option<UserUuid>,
    pub status: CartStatus,
    pub subtotal: u64,
    pub total: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Cart Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemRecord {
    pub uuid: CartItemUuid,
    pub cart_uuid: CartUuid,
    pub clover_item_id: String,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
    pub line_total: u64,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Cart Item Modifier Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemModifierRecord {
    pub uuid: CartItemModifierUuid,
    pub cart_item_uuid: CartItemUuid,
    pub clover_modifier_id: String,
    pub clover_modifier_group_id: String,
    pub name: String,
    pub price: u64,
    pub created_at: Timestamp,
}

/// An item together with its modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: CartItemRecord,
    pub modifiers: Vec<CartItemModifierRecord>,
}

/// Read-only projection of a cart and everything in it.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub cart: CartRecord,
    pub lines: Vec<CartLine>,
}

impl CartSummary {
    /// Attach each modifier to its item, keeping item order.
    #[must_use]
    pub fn assemble(
        cart: CartRecord,
        items: Vec<CartItemRecord>,
        modifiers: Vec<CartItemModifierRecord>,
    ) -> Self {
        let mut by_item: FxHashMap<CartItemUuid, Vec<CartItemModifierRecord>> =
            FxHashMap::default();

        for modifier in modifiers {
            by_item
                .entry(modifier.cart_item_uuid)
                .or_default()
                .push(modifier);
        }

        let lines = items
            .into_iter()
            .map(|item| CartLine {
                modifiers: by_item.remove(&item.uuid).unwrap_or_default(),
                item,
            })
            .collect();

        Self { cart, lines }
    }
}

/// Outcome of setting an item's quantity.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityUpdate {
    Updated(CartItemRecord),

    /// The quantity was zero or negative, so the item was deleted.
    Removed,
}
