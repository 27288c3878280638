//! Cart totals

use rustc_hash::FxHashMap;

use crate::domain::carts::{
    errors::CartsServiceError,
    records::{CartItemModifierRecord, CartItemRecord, CartItemUuid},
};

/// Tax applied on top of the subtotal. Not charged yet.
const TAX: u64 = 0;

/// Discount taken off the subtotal. Not offered yet.
const DISCOUNT: u64 = 0;

/// Largest amount a `BIGINT` column can hold.
const MAX_AMOUNT: u64 = i64::MAX.unsigned_abs();

/// Derived cart amounts, in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartTotals {
    pub subtotal: u64,
    pub tax: u64,
    pub discount: u64,
    pub total: u64,
}

impl CartTotals {
    /// Sum every item's contribution: its line total plus each modifier's
    /// price multiplied by the item quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::AmountOverflow`] when any amount leaves
    /// the storable range.
    pub fn calculate(
        items: &[CartItemRecord],
        modifiers: &[CartItemModifierRecord],
    ) -> Result<Self, CartsServiceError> {
        let mut modifier_prices: FxHashMap<CartItemUuid, u64> = FxHashMap::default();

        for modifier in modifiers {
            let sum = modifier_prices.entry(modifier.cart_item_uuid).or_default();
            *sum = checked_amount(sum.checked_add(modifier.price))?;
        }

        let subtotal = items.iter().try_fold(0_u64, |subtotal, item| {
            let per_unit = modifier_prices.get(&item.uuid).copied().unwrap_or_default();
            let modifiers_total = checked_amount(per_unit.checked_mul(u64::from(item.quantity)))?;
            let contribution = checked_amount(item.line_total.checked_add(modifiers_total))?;

            checked_amount(subtotal.checked_add(contribution))
        })?;

        let total = checked_amount(
            subtotal
                .checked_add(TAX)
                .and_then(|amount| amount.checked_sub(DISCOUNT)),
        )?;

        Ok(Self {
            subtotal,
            tax: TAX,
            discount: DISCOUNT,
            total,
        })
    }
}

/// Unit price multiplied by quantity.
///
/// # Errors
///
/// Returns [`CartsServiceError::AmountOverflow`] when the product is not
/// storable.
pub fn line_total(price: u64, quantity: u32) -> Result<u64, CartsServiceError> {
    checked_amount(price.checked_mul(u64::from(quantity)))
}

/// Checks that a single amount fits the storable range.
///
/// # Errors
///
/// Returns [`CartsServiceError::AmountOverflow`] when it does not.
pub fn storable_amount(amount: u64) -> Result<u64, CartsServiceError> {
    checked_amount(Some(amount))
}

fn checked_amount(amount: Option<u64>) -> Result<u64, CartsServiceError> {
    amount
        .filter(|amount| *amount <= MAX_AMOUNT)
        .ok_or(CartsServiceError::AmountOverflow)
}
