//! Persistence adapters.
//!
//! The document store behind the ports is an external collaborator; the
//! in-memory adapters here satisfy the same contracts for the bundled
//! server binary and for tests.

mod memory;

pub use memory::{InMemoryCardRepository, InMemoryUserRepository};
