//! Credential verification and account creation.
//!
//! The verifier fails with one message for "no such email" and "wrong
//! password" so responses cannot be used to enumerate accounts.

use std::sync::Arc;

use crate::domain::auth::{LoginCredentials, NewUser};
use crate::domain::error::Error;
use crate::domain::password::PasswordHash;
use crate::domain::ports::{StoredUser, UserRepository};
use crate::domain::user::{User, UserId};

/// Shared unauthorized message for every credential failure.
const BAD_CREDENTIALS: &str = "incorrect email or password";

/// Authentication use-cases over a [`UserRepository`].
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    /// Create a service backed by the given repository.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Register a new user, storing a one-way hash of the password.
    ///
    /// Returns the created profile; the credential never leaves the
    /// persistence boundary.
    pub async fn signup(&self, new_user: NewUser) -> Result<User, Error> {
        let password_hash = PasswordHash::from_plaintext(new_user.password())?;
        let (email, name, about, avatar) = new_user.into_profile();
        let user = User::new(UserId::random(), email, name, about, avatar);
        self.users
            .create(&StoredUser {
                user: user.clone(),
                password_hash,
            })
            .await?;
        Ok(user)
    }

    /// Validate credentials and return the authenticated profile.
    ///
    /// An unknown email and a wrong password fail with the same
    /// unauthorized kind and message.
    pub async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let Some(stored) = self.users.find_by_email(credentials.email()).await? else {
            return Err(Error::unauthorized(BAD_CREDENTIALS));
        };
        if !stored.password_hash.verify(credentials.password())? {
            return Err(Error::unauthorized(BAD_CREDENTIALS));
        }
        Ok(stored.user)
    }
}
