//! Users Data

use crate::domain::users::records::UserUuid;

/// New User Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub mobile_number: String,
    pub name: Option<String>,
    pub is_guest: bool,
}
