use serde::{Deserialize, Serialize};

use crate::util::{Sensitive, Timestamp};

/// An account profile as exchanged with the account-management service.
///
/// Uniqueness of `id` and `username`, the representation of `password`
/// (hashed or otherwise) and the vocabulary of `status` are all owned by
/// that service; this type carries whatever it says, with every field
/// always present on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Credential material, opaque to this crate.
    pub password: Sensitive<String>,
    pub email: String,
    pub phone: String,
    pub firstname: String,
    pub lastname: String,
    pub email_verified: bool,
    pub date_created: Timestamp,
    /// Account status label; the enumeration lives server-side.
    pub status: String,
    pub last_login: Timestamp,
}

crate::should_impl_data_traits!(User);
