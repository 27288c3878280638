//! User Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User Record
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub mobile_number: String,
    pub name: Option<String>,
    pub is_guest: bool,
    pub preferences: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
