//! Authentication primitives such as login credentials.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use super::password::PASSWORD_MIN;
use super::user::{About, AvatarUrl, Email, UserName, UserValidationError};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or not structurally valid.
    InvalidEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "email must be a valid address"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by the credential verifier.
///
/// ## Invariants
/// - `email` is trimmed and structurally valid.
/// - `password` is non-empty but otherwise untouched, so whitespace a user
///   actually typed still participates in the comparison. The buffer is
///   zeroed on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: Email,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let email = Email::new(email).map_err(|_| LoginValidationError::InvalidEmail)?;
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used for the credential lookup.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validation errors raised while assembling a signup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewUserValidationError {
    /// A profile or email field failed validation.
    Profile(UserValidationError),
    /// Password shorter than [`PASSWORD_MIN`] characters.
    PasswordTooShort { min: usize },
}

impl fmt::Display for NewUserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile(inner) => inner.fmt(f),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
        }
    }
}

impl std::error::Error for NewUserValidationError {}

impl From<UserValidationError> for NewUserValidationError {
    fn from(value: UserValidationError) -> Self {
        Self::Profile(value)
    }
}

/// Validated signup payload: the profile fields plus the plaintext password
/// awaiting hashing. The password buffer is zeroed on drop.
#[derive(Debug, Clone)]
pub struct NewUser {
    email: Email,
    name: UserName,
    about: About,
    avatar: AvatarUrl,
    password: Zeroizing<String>,
}

impl NewUser {
    /// Construct a signup payload from raw string inputs.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        name: &str,
        about: &str,
        avatar: &str,
    ) -> Result<Self, NewUserValidationError> {
        let email = Email::new(email)?;
        let name = UserName::new(name)?;
        let about = About::new(about)?;
        let avatar = AvatarUrl::new(avatar)?;
        if password.chars().count() < PASSWORD_MIN {
            return Err(NewUserValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        Ok(Self {
            email,
            name,
            about,
            avatar,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email to register.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Profile display name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Profile biography text.
    pub fn about(&self) -> &About {
        &self.about
    }

    /// Profile picture URL.
    pub fn avatar(&self) -> &AvatarUrl {
        &self.avatar
    }

    /// Plaintext password awaiting hashing.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Split into the validated profile parts, dropping the password.
    pub fn into_profile(self) -> (Email, UserName, About, AvatarUrl) {
        let Self {
            email,
            name,
            about,
            avatar,
            password: _,
        } = self;
        (email, name, about, avatar)
    }
}
