//! Merchant Records

use jiff::Timestamp;

use crate::{clover::AccessToken, uuids::TypedUuid};

/// Merchant UUID
pub type MerchantUuid = TypedUuid<MerchantRecord>;

/// Merchant Record
#[derive(Debug, Clone)]
pub struct MerchantRecord {
    pub uuid: MerchantUuid,
    pub clover_merchant_id: String,
    pub name: String,
    pub access_token: AccessToken,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
