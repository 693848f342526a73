//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::password::PasswordHash;
use crate::domain::user::{About, AvatarUrl, Email, User, UserId, UserName};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another user already registered this email.
        DuplicateEmail => "email is already registered",
    }
}

impl From<UserPersistenceError> for Error {
    fn from(value: UserPersistenceError) -> Self {
        match value {
            UserPersistenceError::DuplicateEmail => Self::conflict("email already in use"),
            other => Self::internal(other.to_string()),
        }
    }
}

/// Profile plus the stored credential, as held by the persistence layer.
///
/// Only the credential-verification path ever sees this shape; handlers
/// receive the [`User`] inside and never the hash.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: User,
    pub password_hash: PasswordHash,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user with their credential.
    ///
    /// Fails with [`UserPersistenceError::DuplicateEmail`] when the email is
    /// already registered.
    async fn create(&self, record: &StoredUser) -> Result<(), UserPersistenceError>;

    /// Fetch a profile by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a profile and its credential by exact email match.
    async fn find_by_email(&self, email: &Email)
    -> Result<Option<StoredUser>, UserPersistenceError>;

    /// List every profile.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Replace the name and about text, returning the updated profile or
    /// `None` when the id does not resolve.
    async fn update_profile(
        &self,
        id: &UserId,
        name: UserName,
        about: About,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Replace the avatar, returning the updated profile or `None` when the
    /// id does not resolve.
    async fn update_avatar(
        &self,
        id: &UserId,
        avatar: AvatarUrl,
    ) -> Result<Option<User>, UserPersistenceError>;
}
