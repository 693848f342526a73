//! Port abstraction for card persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::card::{Card, CardId};
use crate::domain::error::Error;
use crate::domain::user::UserId;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by card repository adapters.
    pub enum CardPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "card repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "card repository query failed: {message}",
    }
}

impl From<CardPersistenceError> for Error {
    fn from(value: CardPersistenceError) -> Self {
        Self::internal(value.to_string())
    }
}

#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Insert a new card.
    async fn create(&self, card: &Card) -> Result<(), CardPersistenceError>;

    /// List every card.
    async fn list(&self) -> Result<Vec<Card>, CardPersistenceError>;

    /// Fetch a card by identifier.
    async fn find_by_id(&self, id: &CardId) -> Result<Option<Card>, CardPersistenceError>;

    /// Delete a card, returning the removed card or `None` on a miss.
    async fn delete_by_id(&self, id: &CardId) -> Result<Option<Card>, CardPersistenceError>;

    /// Add `user` to the card's likes (set semantics), returning the
    /// updated card or `None` on a miss.
    async fn add_like(
        &self,
        id: &CardId,
        user: &UserId,
    ) -> Result<Option<Card>, CardPersistenceError>;

    /// Remove `user` from the card's likes, returning the updated card or
    /// `None` on a miss.
    async fn remove_like(
        &self,
        id: &CardId,
        user: &UserId,
    ) -> Result<Option<Card>, CardPersistenceError>;
}
