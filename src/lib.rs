#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Shared wire types for the Chorus music-streaming API.
//!
//! This crate declares the JSON records exchanged with the authentication
//! service (which issues a [`LoginResult`] for valid credentials) and the
//! account-management service (which owns [`User`] records, including
//! `date_created`/`last_login` maintenance and `status`/`email_verified`
//! transitions). It is data only: no validation, no persistence and no
//! transport live here.
//!
//! Every field is always present in serialized form; zero and empty values
//! are real values, not markers for absence. Malformed or mistyped input
//! surfaces as [`serde_json::Error`] (or the equivalent of whatever serde
//! format the caller picked) and never yields a partial record.

pub mod login;
pub mod user;
pub mod util;

pub use self::login::LoginResult;
pub use self::user::User;
pub use self::util::{Sensitive, Timestamp};

/// Asserts that a wire type stays usable as a plain value: printable,
/// cloneable, comparable and safe to move across threads.
#[doc(hidden)]
#[macro_export]
macro_rules! should_impl_data_traits {
    ($type:ty) => {
        static_assertions::assert_impl_all!(
            $type: std::fmt::Debug,
            Clone,
            PartialEq,
            Send,
            Sync
        );
    };
}
