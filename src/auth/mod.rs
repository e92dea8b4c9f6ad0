use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod password;

/// Purpose tag carried by every session token and by every stored token
/// sequence entry.
pub const AUTH_ACCESS: &str = "auth";

/// Request and response header carrying the session token. Not a cookie and
/// not the Authorization header.
pub const SESSION_TOKEN_HEADER: &str = "x-auth";

/// Payload of a signed session token.
///
/// `jti` is a fresh random id per issuance, so two logins for the same user
/// always produce distinct token strings even within the same second.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub access: String,
    pub iat: i64,
    pub jti: Uuid,
}

impl Claims {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            sub: user_id,
            access: AUTH_ACCESS.to_string(),
            iat: Utc::now().timestamp(),
            jti: Uuid::new_v4(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token generation error: {0}")]
    Generation(String),

    #[error("Token secret is not configured")]
    MissingSecret,

    #[error("Invalid session token")]
    Invalid,
}

/// Sign a session token for the given user with the process-wide secret.
pub fn sign_token(secret: &str, user_id: Uuid) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let claims = Claims::new(user_id);
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| TokenError::Generation(e.to_string()))
}

/// Cryptographically validate a session token and return the owning user id.
///
/// Rejects when the signature does not verify, the payload is malformed, or
/// the access purpose is not "auth". Tokens carry no expiry; revocation via
/// the stored sequence is the only invalidation path, and presence in that
/// sequence is checked separately by the authentication gate.
pub fn verify_token(secret: &str, token: &str) -> Result<Uuid, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let data =
        decode::<Claims>(token, &decoding_key, &validation).map_err(|_| TokenError::Invalid)?;

    if data.claims.access != AUTH_ACCESS {
        return Err(TokenError::Invalid);
    }

    Ok(data.claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn token_round_trips_to_user_id() {
        let user_id = Uuid::new_v4();
        let token = sign_token(SECRET, user_id).unwrap();
        assert_eq!(verify_token(SECRET, &token).unwrap(), user_id);
    }

    #[test]
    fn issued_tokens_are_distinct_strings() {
        let user_id = Uuid::new_v4();
        let first = sign_token(SECRET, user_id).unwrap();
        let second = sign_token(SECRET, user_id).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = sign_token(SECRET, Uuid::new_v4()).unwrap();
        assert!(matches!(
            verify_token("other-secret", &token),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn rejects_tampered_token() {
        let token = sign_token(SECRET, Uuid::new_v4()).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        assert!(verify_token(SECRET, &tampered).is_err());
        assert!(verify_token(SECRET, "not-a-token").is_err());
    }

    #[test]
    fn rejects_wrong_access_purpose() {
        let claims = Claims {
            sub: Uuid::new_v4(),
            access: "refresh".to_string(),
            iat: Utc::now().timestamp(),
            jti: Uuid::new_v4(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert!(matches!(
            verify_token(SECRET, &token),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn empty_secret_is_refused() {
        assert!(matches!(
            sign_token("", Uuid::new_v4()),
            Err(TokenError::MissingSecret)
        ));
    }
}
