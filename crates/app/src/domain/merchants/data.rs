//! Merchants Data

use crate::{clover::AccessToken, domain::merchants::records::MerchantUuid};

/// New Merchant Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewMerchant {
    pub uuid: MerchantUuid,
    pub clover_merchant_id: String,
    pub name: String,
    pub access_token: AccessToken,
}
