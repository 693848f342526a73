//! Bearer-token gate for protected routes.
//!
//! `CurrentUser` is an extractor: handlers that take it only run once the
//! `Authorization: Bearer <token>` header has been verified, and the
//! resolved user id travels with the handler invocation instead of being
//! mutated onto shared request state. A failed extraction short-circuits
//! straight to the error translator with a 401.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};

use crate::domain::{Error, UserId};

use super::state::HttpState;

const BEARER_PREFIX: &str = "Bearer ";

/// Identity resolved by the gate for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

impl CurrentUser {
    /// The authenticated user's identifier.
    pub fn id(&self) -> &UserId {
        &self.0
    }
}

/// Extract and verify the bearer token carried by `req`.
fn authenticate(req: &HttpRequest) -> Result<CurrentUser, Error> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| Error::unauthorized("authentication required"))?;
    let token = header_value
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| Error::unauthorized("authentication required"))?;

    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("HttpState missing from app data"))?;
    let user_id = state.tokens.verify(token)?;
    Ok(CurrentUser(user_id))
}

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}
