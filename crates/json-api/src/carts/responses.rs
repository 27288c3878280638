//! Cart response bodies

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bitewise_app::domain::carts::records::{
    CartItemModifierRecord, CartItemRecord, CartLine, CartRecord, CartSummary,
};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub uuid: Uuid,

    /// The merchant the cart belongs to
    pub merchant_uuid: Uuid,

    /// The ordering session the cart was opened for
    pub session_id: Option<String>,

    /// The customer who owns the cart
    pub customer_uuid: Option<Uuid>,

    /// `active`, `closed` or `abandoned`
    pub status: String,

    /// Sum of line totals and modifiers, in cents
    pub subtotal: u64,

    /// Amount due, in cents
    pub total: u64,

    /// The date and time the cart was created
    pub created_at: String,

    /// The date and time the cart was last updated
    pub updated_at: String,

    /// Items in the order they were added
    pub items: Vec<CartItemResponse>,
}

/// A freshly created cart has no items yet.
impl From<CartRecord> for CartResponse {
    fn from(cart: CartRecord) -> Self {
        Self {
            uuid: cart.uuid.into(),
            merchant_uuid: cart.merchant_uuid.into(),
            session_id: cart.session_id,
            customer_uuid: cart.customer_uuid.map(Into::into),
            status: cart.status.to_string(),
            subtotal: cart.subtotal,
            total: cart.total,
            created_at: cart.created_at.to_string(),
            updated_at: cart.updated_at.to_string(),
            items: Vec::new(),
        }
    }
}

impl From<CartSummary> for CartResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            items: summary.lines.into_iter().map(Into::into).collect(),
            ..summary.cart.into()
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// The unique identifier of the cart item
    pub uuid: Uuid,

    /// The Clover item or variant id
    pub clover_item_id: String,

    pub name: String,

    /// Unit price in cents
    pub price: u64,

    pub quantity: u32,

    /// Unit price times quantity, in cents
    pub line_total: u64,

    pub notes: Option<String>,

    /// Modifiers attached to this item
    #[serde(default)]
    pub modifiers: Vec<CartItemModifierResponse>,
}

impl From<CartItemRecord> for CartItemResponse {
    fn from(item: CartItemRecord) -> Self {
        Self {
            uuid: item.uuid.into(),
            clover_item_id: item.clover_item_id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            line_total: item.line_total,
            notes: item.notes,
            modifiers: Vec::new(),
        }
    }
}

impl From<CartLine> for CartItemResponse {
    fn from(line: CartLine) -> Self {
        Self {
            modifiers: line.modifiers.into_iter().map(Into::into).collect(),
            ..line.item.into()
        }
    }
}

/// Cart Item Modifier Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemModifierResponse {
    /// The unique identifier of the modifier
    pub uuid: Uuid,

    pub clover_modifier_id: String,

    pub clover_modifier_group_id: String,

    pub name: String,

    /// Price in cents, charged once per unit of the item
    pub price: u64,
}

impl From<CartItemModifierRecord> for CartItemModifierResponse {
    fn from(modifier: CartItemModifierRecord) -> Self {
        Self {
            uuid: modifier.uuid.into(),
            clover_modifier_id: modifier.clover_modifier_id,
            clover_modifier_group_id: modifier.clover_modifier_group_id,
            name: modifier.name,
            price: modifier.price,
        }
    }
}
