//! Session token signing and verification
//!
//! Tokens are HS256 JWTs whose claims are the caller's payload object plus
//! `iat` and `exp`.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AuthError;

/// JWT claims: the payload's fields flattened next to the registered ones
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(flatten)]
    pub payload: Map<String, Value>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signs and verifies session tokens with one process-wide secret
#[derive(Clone)]
pub struct SessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl SessionCodec {
    /// Create a codec whose tokens live for `expiry_days`
    pub fn new(secret: &str, expiry_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime: Duration::try_days(expiry_days).unwrap_or(Duration::MAX),
        }
    }

    /// Sign `payload` as of now
    pub fn sign(&self, payload: Map<String, Value>) -> Result<String, AuthError> {
        self.sign_at(payload, Utc::now())
    }

    /// Sign `payload` as if issued at `issued_at`.
    ///
    /// `iat`/`exp` keys in the payload are replaced by the codec's own.
    pub fn sign_at(
        &self,
        mut payload: Map<String, Value>,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        payload.remove("iat");
        payload.remove("exp");

        let Some(expires_at) = issued_at.checked_add_signed(self.lifetime) else {
            tracing::error!("Session lifetime overflows the clock");
            return Err(AuthError::Invalid);
        };

        let claims = SessionClaims {
            payload,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign session token: {}", e);
            AuthError::Invalid
        })
    }

    /// Verify `token` as of now and return its payload
    pub fn verify(&self, token: &str) -> Result<Map<String, Value>, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify `token` against the clock reading `now`.
    ///
    /// A token is expired from the second its `exp` is reached.
    pub fn verify_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Map<String, Value>, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        let claims = decode::<SessionClaims>(token, &self.decoding_key, &validation)?.claims;

        if now.timestamp() >= claims.exp {
            return Err(AuthError::Expired);
        }

        Ok(claims.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SECRET: &str = "test_secret_key_for_testing_only";

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_sign_then_verify_returns_payload() {
        let codec = SessionCodec::new(SECRET, 7);
        let original = payload(json!({ "email": "a@x.com", "roles": ["student"] }));

        let token = codec.sign(original.clone()).unwrap();
        assert_eq!(codec.verify(&token).unwrap(), original);
    }

    #[test]
    fn test_expires_after_seven_days() {
        let codec = SessionCodec::new(SECRET, 7);
        let issued_at = Utc::now();
        let token = codec
            .sign_at(payload(json!({ "email": "a@x.com" })), issued_at)
            .unwrap();

        let almost = issued_at + Duration::days(7) - Duration::seconds(1);
        assert!(codec.verify_at(&token, almost).is_ok());

        let later = issued_at + Duration::days(7);
        assert_eq!(codec.verify_at(&token, later), Err(AuthError::Expired));

        let much_later = issued_at + Duration::days(30);
        assert_eq!(codec.verify_at(&token, much_later), Err(AuthError::Expired));
    }

    #[test]
    fn test_oversized_lifetime_fails_without_panicking() {
        for days in [100_000_000, i64::MAX] {
            let codec = SessionCodec::new(SECRET, days);
            assert_eq!(
                codec.sign(payload(json!({ "email": "a@x.com" }))),
                Err(AuthError::Invalid)
            );
        }
    }

    #[test]
    fn test_deterministic_for_same_issue_time() {
        let codec = SessionCodec::new(SECRET, 7);
        let issued_at = Utc::now();
        let p = payload(json!({ "b": 2, "a": 1 }));

        assert_eq!(
            codec.sign_at(p.clone(), issued_at).unwrap(),
            codec.sign_at(p, issued_at).unwrap()
        );
    }

    #[test]
    fn test_payload_cannot_override_expiry() {
        let codec = SessionCodec::new(SECRET, 7);
        let issued_at = Utc::now();
        let far_future = (issued_at + Duration::days(3650)).timestamp();

        let token = codec
            .sign_at(payload(json!({ "email": "a@x.com", "exp": far_future })), issued_at)
            .unwrap();

        let verified = codec.verify_at(&token, issued_at).unwrap();
        assert_eq!(verified, payload(json!({ "email": "a@x.com" })));
        assert_eq!(
            codec.verify_at(&token, issued_at + Duration::days(8)),
            Err(AuthError::Expired)
        );
    }

    #[test]
    fn test_malformed_tokens_are_invalid() {
        let codec = SessionCodec::new(SECRET, 7);

        for token in ["", "garbage", "a.b.c", "eyJhbGciOiJIUzI1NiJ9..."] {
            assert_eq!(codec.verify(token), Err(AuthError::Invalid), "token {token:?}");
        }
    }

    #[test]
    fn test_foreign_secret_is_invalid() {
        let ours = SessionCodec::new(SECRET, 7);
        let theirs = SessionCodec::new("someone_elses_secret", 7);

        let token = theirs.sign(payload(json!({ "email": "a@x.com" }))).unwrap();
        assert_eq!(ours.verify(&token), Err(AuthError::Invalid));
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let codec = SessionCodec::new(SECRET, 7);
        let token = codec.sign(payload(json!({ "email": "a@x.com" }))).unwrap();

        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = codec.sign(payload(json!({ "email": "admin@x.com" }))).unwrap();
        let forged_claims = forged.split('.').nth(1).unwrap().to_string();
        parts[1] = &forged_claims;
        let tampered = parts.join(".");

        // Signature from the first token no longer covers the swapped claims
        assert_eq!(codec.verify(&tampered), Err(AuthError::Invalid));
    }
}
