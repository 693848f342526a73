//! In-memory repository adapters.
//!
//! Writes are serialized per store through an `RwLock`, matching the
//! contract expected of the real document store. Lock poisoning is
//! surfaced as a query error rather than a panic.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::card::{Card, CardId};
use crate::domain::ports::{
    CardPersistenceError, CardRepository, StoredUser, UserPersistenceError, UserRepository,
};
use crate::domain::user::{About, AvatarUrl, Email, User, UserId, UserName};

/// In-memory [`UserRepository`] adapter.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, StoredUser>>,
}

impl InMemoryUserRepository {
    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<UserId, StoredUser>>, UserPersistenceError>
    {
        self.users
            .read()
            .map_err(|_| UserPersistenceError::query("user store lock poisoned"))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<UserId, StoredUser>>, UserPersistenceError>
    {
        self.users
            .write()
            .map_err(|_| UserPersistenceError::query("user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, record: &StoredUser) -> Result<(), UserPersistenceError> {
        let mut users = self.write()?;
        if users
            .values()
            .any(|stored| stored.user.email() == record.user.email())
        {
            return Err(UserPersistenceError::duplicate_email());
        }
        users.insert(*record.user.id(), record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.read()?.get(id).map(|stored| stored.user.clone()))
    }

    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<StoredUser>, UserPersistenceError> {
        Ok(self
            .read()?
            .values()
            .find(|stored| stored.user.email() == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self
            .read()?
            .values()
            .map(|stored| stored.user.clone())
            .collect())
    }

    async fn update_profile(
        &self,
        id: &UserId,
        name: UserName,
        about: About,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut users = self.write()?;
        let Some(stored) = users.get_mut(id) else {
            return Ok(None);
        };
        stored.user = stored.user.clone().with_profile(name, about);
        Ok(Some(stored.user.clone()))
    }

    async fn update_avatar(
        &self,
        id: &UserId,
        avatar: AvatarUrl,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut users = self.write()?;
        let Some(stored) = users.get_mut(id) else {
            return Ok(None);
        };
        stored.user = stored.user.clone().with_avatar(avatar);
        Ok(Some(stored.user.clone()))
    }
}

/// In-memory [`CardRepository`] adapter.
#[derive(Default)]
pub struct InMemoryCardRepository {
    cards: RwLock<HashMap<CardId, Card>>,
}

impl InMemoryCardRepository {
    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<CardId, Card>>, CardPersistenceError> {
        self.cards
            .read()
            .map_err(|_| CardPersistenceError::query("card store lock poisoned"))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<CardId, Card>>, CardPersistenceError> {
        self.cards
            .write()
            .map_err(|_| CardPersistenceError::query("card store lock poisoned"))
    }
}

#[async_trait]
impl CardRepository for InMemoryCardRepository {
    async fn create(&self, card: &Card) -> Result<(), CardPersistenceError> {
        self.write()?.insert(*card.id(), card.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Card>, CardPersistenceError> {
        let mut cards: Vec<Card> = self.read()?.values().cloned().collect();
        cards.sort_by_key(Card::created_at);
        Ok(cards)
    }

    async fn find_by_id(&self, id: &CardId) -> Result<Option<Card>, CardPersistenceError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &CardId) -> Result<Option<Card>, CardPersistenceError> {
        Ok(self.write()?.remove(id))
    }

    async fn add_like(
        &self,
        id: &CardId,
        user: &UserId,
    ) -> Result<Option<Card>, CardPersistenceError> {
        let mut cards = self.write()?;
        let Some(card) = cards.get_mut(id) else {
            return Ok(None);
        };
        card.add_like(*user);
        Ok(Some(card.clone()))
    }

    async fn remove_like(
        &self,
        id: &CardId,
        user: &UserId,
    ) -> Result<Option<Card>, CardPersistenceError> {
        let mut cards = self.write()?;
        let Some(card) = cards.get_mut(id) else {
            return Ok(None);
        };
        card.remove_like(user);
        Ok(Some(card.clone()))
    }
}
