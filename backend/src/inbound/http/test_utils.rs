//! Shared helpers for HTTP adapter unit tests.

use std::sync::Arc;

use actix_web::web;

use crate::domain::TokenService;
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{InMemoryCardRepository, InMemoryUserRepository};

/// Signing secret shared by adapter unit tests.
pub const TEST_SECRET: &[u8] = b"unit-test-signing-secret";

/// Fresh handler state over empty in-memory repositories.
pub fn test_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        TokenService::new(TEST_SECRET),
        Arc::new(InMemoryUserRepository::default()),
        Arc::new(InMemoryCardRepository::default()),
    ))
}

/// `Authorization` header value carrying a freshly issued token for `state`.
pub fn bearer_for(state: &web::Data<HttpState>, user_id: &crate::domain::UserId) -> String {
    let token = state.tokens.issue(user_id).expect("token issued");
    format!("Bearer {token}")
}
