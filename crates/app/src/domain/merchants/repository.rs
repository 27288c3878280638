//! Merchants Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    clover::AccessToken,
    domain::merchants::{
        data::NewMerchant,
        records::{MerchantRecord, MerchantUuid},
    },
};

const CREATE_MERCHANT_SQL: &str = include_str!("sql/create_merchant.sql");
const LIST_MERCHANTS_SQL: &str = include_str!("sql/list_merchants.sql");
const GET_MERCHANT_SQL: &str = include_str!("sql/get_merchant.sql");
const GET_MERCHANT_BY_CLOVER_ID_SQL: &str = include_str!("sql/get_merchant_by_clover_id.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgMerchantsRepository;

impl PgMerchantsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_merchant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        merchant: NewMerchant,
    ) -> Result<MerchantRecord, sqlx::Error> {
        query_as::<Postgres, MerchantRecord>(CREATE_MERCHANT_SQL)
            .bind(merchant.uuid.into_uuid())
            .bind(merchant.clover_merchant_id)
            .bind(merchant.name)
            .bind(merchant.access_token.expose())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_merchants(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<MerchantRecord>, sqlx::Error> {
        query_as::<Postgres, MerchantRecord>(LIST_MERCHANTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_merchant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        merchant: MerchantUuid,
    ) -> Result<MerchantRecord, sqlx::Error> {
        query_as::<Postgres, MerchantRecord>(GET_MERCHANT_SQL)
            .bind(merchant.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_merchant_by_clover_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        clover_merchant_id: &str,
    ) -> Result<MerchantRecord, sqlx::Error> {
        query_as::<Postgres, MerchantRecord>(GET_MERCHANT_BY_CLOVER_ID_SQL)
            .bind(clover_merchant_id)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for MerchantRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: MerchantUuid::from_uuid(row.try_get("uuid")?),
            clover_merchant_id: row.try_get("clover_merchant_id")?,
            name: row.try_get("name")?,
            access_token: AccessToken::new(row.try_get::<String, _>("access_token")?),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
