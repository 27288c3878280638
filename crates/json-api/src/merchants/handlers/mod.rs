//! Merchant Handlers

pub(crate) mod categories;
pub(crate) mod create;
pub(crate) mod index;
pub(crate) mod modifier_groups;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use bitewise_app::{
        clover::AccessToken,
        domain::merchants::records::{MerchantRecord, MerchantUuid},
    };

    pub(super) fn make_merchant(uuid: MerchantUuid) -> MerchantRecord {
        MerchantRecord {
            uuid,
            clover_merchant_id: "MERCHANT1".to_string(),
            name: "Slice House".to_string(),
            access_token: AccessToken::new("secret-token"),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
