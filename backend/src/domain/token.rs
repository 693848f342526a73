//! Session token issuing and verification.
//!
//! Tokens are stateless HS256 JWTs binding a user id to an expiry. The
//! signing secret is process-wide configuration injected at construction;
//! rotating it invalidates every outstanding token, which is acceptable
//! because expiry is the only termination mechanism anyway.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use super::error::Error;
use super::user::UserId;

/// Default token lifetime: 7 days.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Message returned for every verification failure so callers cannot tell
/// a tampered token from an expired one.
const VERIFY_FAILED: &str = "please sign in";

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Issues and verifies signed session tokens.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Build a service around the process-wide signing secret with the
    /// default 7-day lifetime.
    pub fn new(secret: &[u8]) -> Self {
        Self::with_ttl(secret, Duration::days(TOKEN_TTL_DAYS))
    }

    /// Build a service with an explicit token lifetime.
    pub fn with_ttl(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue a signed token asserting `user_id` until the lifetime elapses.
    pub fn issue(&self, user_id: &UserId) -> Result<String, Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|err| Error::internal(format!("token encode failed: {err}")))
    }

    /// Verify a presented token and extract the user id it asserts.
    ///
    /// Structural corruption, a signature mismatch, and an elapsed expiry
    /// all collapse into one unauthorized error.
    pub fn verify(&self, token: &str) -> Result<UserId, Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| Error::unauthorized(VERIFY_FAILED))?;
        UserId::parse(&data.claims.sub).map_err(|_| Error::unauthorized(VERIFY_FAILED))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    const SECRET: &[u8] = b"test-signing-secret";

    #[test]
    fn issued_tokens_verify_to_the_same_user() {
        let service = TokenService::new(SECRET);
        let user_id = UserId::random();
        let token = service.issue(&user_id).expect("token issued");
        assert_eq!(service.verify(&token).expect("token verifies"), user_id);
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let service = TokenService::with_ttl(SECRET, Duration::seconds(-120));
        let token = service.issue(&UserId::random()).expect("token issued");
        let err = service.verify(&token).expect_err("expired token fails");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), "please sign in");
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let issuer = TokenService::new(b"other-secret");
        let verifier = TokenService::new(SECRET);
        let token = issuer.issue(&UserId::random()).expect("token issued");
        let err = verifier.verify(&token).expect_err("foreign signature fails");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[test]
    fn single_byte_tampering_is_rejected() {
        let service = TokenService::new(SECRET);
        let token = service.issue(&UserId::random()).expect("token issued");
        let flipped = {
            let mut chars: Vec<char> = token.chars().collect();
            let last = chars.last_mut().expect("non-empty token");
            *last = if *last == 'A' { 'B' } else { 'A' };
            chars.into_iter().collect::<String>()
        };
        let err = service.verify(&flipped).expect_err("tampered token fails");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), "please sign in");
    }

    #[rstest]
    #[case("")]
    #[case("not-a-jwt")]
    #[case("a.b")]
    #[case("a.b.c")]
    fn structurally_broken_tokens_are_rejected(#[case] token: &str) {
        let service = TokenService::new(SECRET);
        let err = service.verify(token).expect_err("broken token fails");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }
}
