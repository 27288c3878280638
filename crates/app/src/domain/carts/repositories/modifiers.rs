//! Cart Item Modifiers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::{to_db_amount, try_get_amount},
    domain::carts::{
        data::NewCartItemModifier,
        records::{CartItemModifierRecord, CartItemModifierUuid, CartItemUuid, CartUuid},
    },
};

const CREATE_CART_ITEM_MODIFIER_SQL: &str = include_str!("../sql/create_cart_item_modifier.sql");
const LIST_CART_ITEM_MODIFIERS_SQL: &str = include_str!("../sql/list_cart_item_modifiers.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemModifiersRepository;

impl PgCartItemModifiersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_modifier(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: CartItemUuid,
        modifier: NewCartItemModifier,
    ) -> Result<CartItemModifierRecord, sqlx::Error> {
        query_as::<Postgres, CartItemModifierRecord>(CREATE_CART_ITEM_MODIFIER_SQL)
            .bind(modifier.uuid.into_uuid())
            .bind(item.into_uuid())
            .bind(modifier.clover_modifier_id)
            .bind(modifier.clover_modifier_group_id)
            .bind(modifier.name)
            .bind(to_db_amount(modifier.price)?)
            .fetch_one(&mut **tx)
            .await
    }

    /// Every modifier on every item of the cart.
    pub(crate) async fn list_cart_modifiers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<CartItemModifierRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemModifierRecord>(LIST_CART_ITEM_MODIFIERS_SQL)
            .bind(cart.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CartItemModifierRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartItemModifierUuid::from_uuid(row.try_get("uuid")?),
            cart_item_uuid: CartItemUuid::from_uuid(row.try_get("cart_item_uuid")?),
            clover_modifier_id: row.try_get("clover_modifier_id")?,
            clover_modifier_group_id: row.try_get("clover_modifier_group_id")?,
            name: row.try_get("name")?,
            price: try_get_amount(row, "price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
