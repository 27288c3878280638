//! Carts Data

use crate::domain::{
    carts::records::{CartItemModifierUuid, CartItemUuid, CartUuid},
    merchants::records::MerchantUuid,
    users::records::UserUuid,
};

/// New Cart Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCart {
    pub uuid: CartUuid,
    pub merchant_uuid: MerchantUuid,
    pub session_id: Option<String>,
    pub customer_uuid: Option<UserUuid>,
}

/// New Cart Item Data
///
/// When the cart already holds `clover_item_id`, only `quantity` is used: it
/// is added to the existing line.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub uuid: CartItemUuid,
    pub clover_item_id: String,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
    pub notes: Option<String>,
}

/// New Cart Item Modifier Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItemModifier {
    pub uuid: CartItemModifierUuid,
    pub clover_modifier_id: String,
    pub clover_modifier_group_id: String,
    pub name: String,
    pub price: u64,
}
