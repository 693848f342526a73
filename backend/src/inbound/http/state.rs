//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and services, and remain testable without I/O.
//! The token service is read-only after startup; concurrent requests share
//! it through the `Arc`.

use std::sync::Arc;

use crate::domain::ports::{CardRepository, UserRepository};
use crate::domain::{AuthService, TokenService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: AuthService,
    pub tokens: Arc<TokenService>,
    pub users: Arc<dyn UserRepository>,
    pub cards: Arc<dyn CardRepository>,
}

impl HttpState {
    /// Assemble handler state from a token service and repositories.
    pub fn new(
        tokens: TokenService,
        users: Arc<dyn UserRepository>,
        cards: Arc<dyn CardRepository>,
    ) -> Self {
        Self {
            auth: AuthService::new(users.clone()),
            tokens: Arc::new(tokens),
            users,
            cards,
        }
    }
}
