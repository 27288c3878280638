//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::{to_db_amount, try_get_amount},
    domain::{
        carts::{
            data::NewCart,
            records::{CartItemUuid, CartRecord, CartStatus, CartUuid},
            totals::CartTotals,
        },
        merchants::records::MerchantUuid,
        users::records::UserUuid,
    },
};

const CREATE_CART_SQL: &str = include_str!("../sql/create_cart.sql");
const GET_CART_SQL: &str = include_str!("../sql/get_cart.sql");
const LOCK_CART_SQL: &str = include_str!("../sql/lock_cart.sql");
const LOCK_CART_FOR_ITEM_SQL: &str = include_str!("../sql/lock_cart_for_item.sql");
const GET_ACTIVE_CART_FOR_SESSION_SQL: &str =
    include_str!("../sql/get_active_cart_for_session.sql");
const LIST_CUSTOMER_CARTS_SQL: &str = include_str!("../sql/list_customer_carts.sql");
const UPDATE_CART_TOTALS_SQL: &str = include_str!("../sql/update_cart_totals.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: NewCart,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(CREATE_CART_SQL)
            .bind(cart.uuid.into_uuid())
            .bind(cart.merchant_uuid.into_uuid())
            .bind(cart.session_id)
            .bind(cart.customer_uuid.map(UserUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(GET_CART_SQL)
            .bind(cart.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Row-lock the cart until the transaction ends, serialising writers.
    pub(crate) async fn lock_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(LOCK_CART_SQL)
            .bind(cart.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Row-lock the cart that owns `item`.
    pub(crate) async fn lock_cart_for_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: CartItemUuid,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(LOCK_CART_FOR_ITEM_SQL)
            .bind(item.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_active_cart_for_session(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        session_id: &str,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(GET_ACTIVE_CART_FOR_SESSION_SQL)
            .bind(session_id)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_customer_carts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: UserUuid,
    ) -> Result<Vec<CartRecord>, sqlx::Error> {
        query_as::<Postgres, CartRecord>(LIST_CUSTOMER_CARTS_SQL)
            .bind(customer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_cart_totals(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        totals: CartTotals,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(UPDATE_CART_TOTALS_SQL)
            .bind(cart.into_uuid())
            .bind(to_db_amount(totals.subtotal)?)
            .bind(to_db_amount(totals.total)?)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CartRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<CartStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            merchant_uuid: MerchantUuid::from_uuid(row.try_get("merchant_uuid")?),
            session_id: row.try_get("session_id")?,
            customer_uuid: row
                .try_get::<Option<uuid::Uuid>, _>("customer_uuid")?
                .map(UserUuid::from_uuid),
            status,
            subtotal: try_get_amount(row, "subtotal")?,
            total: try_get_amount(row, "total")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
