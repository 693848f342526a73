//! Card data model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::user::UserId;

/// Validation errors returned by the card constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardValidationError {
    InvalidId,
    NameLength { min: usize, max: usize },
    InvalidLink,
}

impl fmt::Display for CardValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "card id must be a valid UUID"),
            Self::NameLength { min, max } => {
                write!(f, "card name must be between {min} and {max} characters")
            }
            Self::InvalidLink => write!(f, "card link must be an absolute http(s) URL"),
        }
    }
}

impl std::error::Error for CardValidationError {}

/// Stable card identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId(Uuid);

impl CardId {
    /// Validate and construct a [`CardId`] from string input.
    pub fn parse(id: impl AsRef<str>) -> Result<Self, CardValidationError> {
        let parsed = Uuid::parse_str(id.as_ref().trim()).map_err(|_| CardValidationError::InvalidId)?;
        Ok(Self(parsed))
    }

    /// Generate a new random [`CardId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<CardId> for String {
    fn from(value: CardId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CardId {
    type Error = CardValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Minimum allowed length for a card name.
pub const CARD_NAME_MIN: usize = 2;
/// Maximum allowed length for a card name.
pub const CARD_NAME_MAX: usize = 30;

/// Caption shown under the card image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardName(String);

impl CardName {
    /// Validate and construct a [`CardName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, CardValidationError> {
        let name = name.into();
        let length = name.chars().count();
        if length < CARD_NAME_MIN || length > CARD_NAME_MAX {
            return Err(CardValidationError::NameLength {
                min: CARD_NAME_MIN,
                max: CARD_NAME_MAX,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for CardName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<CardName> for String {
    fn from(value: CardName) -> Self {
        value.0
    }
}

impl TryFrom<String> for CardName {
    type Error = CardValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Absolute http(s) URL pointing at the card image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardLink(Url);

impl CardLink {
    /// Validate and construct a [`CardLink`] from string input.
    pub fn new(link: impl AsRef<str>) -> Result<Self, CardValidationError> {
        let url = Url::parse(link.as_ref()).map_err(|_| CardValidationError::InvalidLink)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CardValidationError::InvalidLink);
        }
        Ok(Self(url))
    }
}

impl AsRef<str> for CardLink {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<CardLink> for String {
    fn from(value: CardLink) -> Self {
        value.0.into()
    }
}

impl TryFrom<String> for CardLink {
    type Error = CardValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Photo card posted by a user.
///
/// ## Invariants
/// - `likes` behaves as a set: a user appears at most once.
/// - `owner` never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Card {
    id: CardId,
    name: CardName,
    link: CardLink,
    owner: UserId,
    likes: Vec<UserId>,
    created_at: DateTime<Utc>,
}

impl Card {
    /// Create a fresh card owned by `owner` with no likes.
    pub fn new(name: CardName, link: CardLink, owner: UserId) -> Self {
        Self {
            id: CardId::random(),
            name,
            link,
            owner,
            likes: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Stable card identifier.
    pub fn id(&self) -> &CardId {
        &self.id
    }

    /// Card caption.
    pub fn name(&self) -> &CardName {
        &self.name
    }

    /// Card image URL.
    pub fn link(&self) -> &CardLink {
        &self.link
    }

    /// Identifier of the user who posted the card.
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Users who liked the card.
    pub fn likes(&self) -> &[UserId] {
        &self.likes
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Record a like from `user`. Idempotent.
    pub fn add_like(&mut self, user: UserId) {
        if !self.likes.contains(&user) {
            self.likes.push(user);
        }
    }

    /// Withdraw a like from `user`. Idempotent.
    pub fn remove_like(&mut self, user: &UserId) {
        self.likes.retain(|liker| liker != user);
    }
}

#[cfg(test)]
mod tests;
