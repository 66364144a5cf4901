use serde::{Deserialize, Serialize};

use crate::util::Sensitive;

/// The outcome of a successful authentication, produced by the
/// authentication service and handed back to the client.
///
/// All five fields are always present on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoginResult {
    /// Identifies the authenticated user.
    pub id: i64,
    pub username: String,
    /// Opaque bearer credential.
    pub token: Sensitive<String>,
    /// Scheme label for the token, e.g. `Bearer`.
    pub token_type: String,
    /// Token lifetime as issued by the authentication service. The unit
    /// is the issuer's business; it is carried verbatim.
    pub expiration: i64,
}

crate::should_impl_data_traits!(LoginResult);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::Token;

    fn sample() -> LoginResult {
        LoginResult {
            id: 1,
            username: "alice".into(),
            token: Sensitive::new("abc123".into()),
            token_type: "Bearer".into(),
            expiration: 3600,
        }
    }

    #[test]
    fn test_serde_impl() {
        serde_test::assert_tokens(
            &sample(),
            &[
                Token::Struct { name: "LoginResult", len: 5 },
                Token::Str("id"),
                Token::I64(1),
                Token::Str("username"),
                Token::Str("alice"),
                Token::Str("token"),
                Token::Str("abc123"),
                Token::Str("token_type"),
                Token::Str("Bearer"),
                Token::Str("expiration"),
                Token::I64(3600),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_wire_format() {
        let encoded = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            r#"{"id":1,"username":"alice","token":"abc123","token_type":"Bearer","expiration":3600}"#,
            encoded
        );

        let decoded: LoginResult = serde_json::from_str(&encoded).unwrap();
        assert_eq!(sample(), decoded);
    }

    #[test]
    fn test_zero_values_are_not_absent() {
        let result = LoginResult::default();
        let encoded = serde_json::to_string(&result).unwrap();
        assert_eq!(
            r#"{"id":0,"username":"","token":"","token_type":"","expiration":0}"#,
            encoded
        );
        assert_eq!(result, serde_json::from_str::<LoginResult>(&encoded).unwrap());
    }

    #[test]
    fn test_rejects_mistyped_id() {
        let input = r#"{"id":"1","username":"alice","token":"abc123","token_type":"Bearer","expiration":3600}"#;
        assert!(serde_json::from_str::<LoginResult>(input).is_err());
    }
}
