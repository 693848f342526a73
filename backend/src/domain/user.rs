//! User data model.
//!
//! Purpose: validated profile types used by the API and persistence layers.
//! The stored password hash lives in [`crate::domain::password`] and is
//! deliberately absent here so a serialized `User` can never leak it.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    InvalidId,
    InvalidEmail,
    NameLength { min: usize, max: usize },
    AboutLength { min: usize, max: usize },
    InvalidAvatarUrl,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::InvalidEmail => write!(f, "email must be a valid address"),
            Self::NameLength { min, max } => {
                write!(f, "name must be between {min} and {max} characters")
            }
            Self::AboutLength { min, max } => {
                write!(f, "about must be between {min} and {max} characters")
            }
            Self::InvalidAvatarUrl => write!(f, "avatar must be an absolute http(s) URL"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from string input.
    pub fn parse(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let parsed = Uuid::parse_str(id.as_ref().trim()).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed))
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Unique email address used for login and enforced unique by persistence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`] from string input.
    ///
    /// Structural check only: one `@` separating a non-empty local part
    /// from a domain containing a dot. Deliverability is not our concern.
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        let trimmed = email.trim();
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(UserValidationError::InvalidEmail);
        };
        if local.is_empty()
            || domain.is_empty()
            || !domain.contains('.')
            || domain.starts_with('.')
            || domain.ends_with('.')
            || trimmed.contains(char::is_whitespace)
        {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Minimum allowed length for a user name.
pub const USER_NAME_MIN: usize = 2;
/// Maximum allowed length for a user name.
pub const USER_NAME_MAX: usize = 30;

/// Display name shown on the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        let length = name.chars().count();
        if length < USER_NAME_MIN || length > USER_NAME_MAX {
            return Err(UserValidationError::NameLength {
                min: USER_NAME_MIN,
                max: USER_NAME_MAX,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Minimum allowed length for the about text.
pub const ABOUT_MIN: usize = 2;
/// Maximum allowed length for the about text.
pub const ABOUT_MAX: usize = 200;

/// Short biography text shown on the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct About(String);

impl About {
    /// Validate and construct an [`About`] from owned input.
    pub fn new(about: impl Into<String>) -> Result<Self, UserValidationError> {
        let about = about.into();
        let length = about.chars().count();
        if length < ABOUT_MIN || length > ABOUT_MAX {
            return Err(UserValidationError::AboutLength {
                min: ABOUT_MIN,
                max: ABOUT_MAX,
            });
        }
        Ok(Self(about))
    }
}

impl AsRef<str> for About {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<About> for String {
    fn from(value: About) -> Self {
        value.0
    }
}

impl TryFrom<String> for About {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Absolute http(s) URL pointing at the profile picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AvatarUrl(Url);

impl AvatarUrl {
    /// Validate and construct an [`AvatarUrl`] from string input.
    pub fn new(avatar: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let url = Url::parse(avatar.as_ref()).map_err(|_| UserValidationError::InvalidAvatarUrl)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(UserValidationError::InvalidAvatarUrl);
        }
        Ok(Self(url))
    }
}

impl AsRef<str> for AvatarUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<AvatarUrl> for String {
    fn from(value: AvatarUrl) -> Self {
        value.0.into()
    }
}

impl TryFrom<String> for AvatarUrl {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Application user profile.
///
/// ## Invariants
/// - `email` is unique across users; uniqueness is enforced by the
///   persistence layer and surfaced as a conflict.
/// - Serialization never includes credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct User {
    id: UserId,
    email: Email,
    name: UserName,
    about: About,
    avatar: AvatarUrl,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(id: UserId, email: Email, name: UserName, about: About, avatar: AvatarUrl) -> Self {
        Self {
            id,
            email,
            name,
            about,
            avatar,
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Login email address.
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

    /// Replace the profile name and about text.
    pub fn with_profile(mut self, name: UserName, about: About) -> Self {
        self.name = name;
        self.about = about;
        self
    }

    /// Replace the profile picture URL.
    pub fn with_avatar(mut self, avatar: AvatarUrl) -> Self {
        self.avatar = avatar;
        self
    }
}

#[cfg(test)]
mod tests;
