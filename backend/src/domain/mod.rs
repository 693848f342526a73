//! Domain primitives, aggregates, and use-case services.
//!
//! Purpose: define strongly typed entities and the authentication core
//! independent of any transport. Keep types immutable where practical and
//! document invariants and serialisation contracts in each type's Rustdoc.
//!
//! Public surface:
//! - `Error` / `ErrorCode` — the closed failure taxonomy.
//! - `User`, `Card` — validated aggregates.
//! - `LoginCredentials`, `NewUser` — validated inbound payloads.
//! - `TokenService` — stateless session tokens.
//! - `AuthService` — credential verification and signup.

pub mod auth;
pub mod auth_service;
pub mod card;
pub mod error;
pub mod password;
pub mod ports;
pub mod token;
pub mod user;

pub use self::auth::{LoginCredentials, LoginValidationError, NewUser, NewUserValidationError};
pub use self::auth_service::AuthService;
pub use self::card::{Card, CardId, CardLink, CardName, CardValidationError};
pub use self::error::{Error, ErrorCode, INTERNAL_ERROR_MESSAGE};
pub use self::password::PasswordHash;
pub use self::token::TokenService;
pub use self::user::{About, AvatarUrl, Email, User, UserId, UserName, UserValidationError};

/// Convenient result alias for fallible domain operations.
pub type DomainResult<T> = Result<T, Error>;
