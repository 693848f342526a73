//! One-way password hashing via bcrypt.
//!
//! The stored hash never leaves the persistence boundary: [`PasswordHash`]
//! is not serializable and its `Debug` output is redacted.

use std::fmt;

use super::error::Error;

/// bcrypt cost factor.
const BCRYPT_COST: u32 = 10;

/// Minimum accepted password length at signup.
pub const PASSWORD_MIN: usize = 8;

/// One-way hash of a user's password.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a plaintext password.
    pub fn from_plaintext(password: &str) -> Result<Self, Error> {
        let hashed = bcrypt::hash(password, BCRYPT_COST)
            .map_err(|err| Error::internal(format!("bcrypt hash failed: {err}")))?;
        Ok(Self(hashed))
    }

    /// Verify a candidate password against the stored hash using bcrypt's
    /// own verification routine, never string equality of secrets.
    pub fn verify(&self, candidate: &str) -> Result<bool, Error> {
        bcrypt::verify(candidate, &self.0)
            .map_err(|err| Error::internal(format!("bcrypt verify failed: {err}")))
    }

    /// Wrap an already-hashed value loaded from storage.
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Stored form handed to the persistence adapter.
    pub fn as_stored(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = PasswordHash::from_plaintext("pw123456").expect("hashing succeeds");
        assert!(hash.verify("pw123456").expect("verify succeeds"));
        assert!(!hash.verify("pw1234567").expect("verify succeeds"));
    }

    #[test]
    fn hash_is_salted_and_never_the_plaintext() {
        let first = PasswordHash::from_plaintext("pw123456").expect("hashing succeeds");
        let second = PasswordHash::from_plaintext("pw123456").expect("hashing succeeds");
        assert_ne!(first.as_stored(), "pw123456");
        assert_ne!(first.as_stored(), second.as_stored());
    }

    #[test]
    fn debug_output_is_redacted() {
        let hash = PasswordHash::from_plaintext("pw123456").expect("hashing succeeds");
        assert_eq!(format!("{hash:?}"), "PasswordHash(..)");
    }
}
