//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod card_repository;
mod user_repository;

pub use card_repository::{CardPersistenceError, CardRepository};
pub use user_repository::{StoredUser, UserPersistenceError, UserRepository};
