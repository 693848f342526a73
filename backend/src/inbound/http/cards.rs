//! Cards API handlers. Every route requires a bearer token.
//!
//! ```text
//! GET /cards
//! POST /cards {"name":"Lake","link":"https://x/l.jpg"}
//! DELETE /cards/{card_id}
//! PUT /cards/{card_id}/likes
//! DELETE /cards/{card_id}/likes
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Card, CardId, CardLink, CardName, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::CurrentUser;
use crate::inbound::http::state::HttpState;

/// Card creation body for `POST /cards`.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateCardRequest {
    pub name: String,
    pub link: String,
}

const CARD_NOT_FOUND: &str = "card not found";

fn parse_card_id(raw: String) -> Result<CardId, Error> {
    CardId::parse(raw).map_err(|err| Error::invalid_request(err.to_string()))
}

/// List every card, oldest first.
#[get("/cards")]
pub async fn list_cards(
    state: web::Data<HttpState>,
    _user: CurrentUser,
) -> ApiResult<web::Json<Vec<Card>>> {
    let cards = state.cards.list().await?;
    Ok(web::Json(cards))
}

/// Post a new card owned by the authenticated user.
#[post("/cards")]
pub async fn create_card(
    state: web::Data<HttpState>,
    user: CurrentUser,
    payload: web::Json<CreateCardRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let name =
        CardName::new(payload.name).map_err(|err| Error::invalid_request(err.to_string()))?;
    let link =
        CardLink::new(&payload.link).map_err(|err| Error::invalid_request(err.to_string()))?;

    let card = Card::new(name, link, *user.id());
    state.cards.create(&card).await?;
    tracing::info!(card_id = %card.id(), owner = %card.owner(), "card created");
    Ok(HttpResponse::Created().json(card))
}

/// Delete a card. Only the owner may delete it; ownership is checked
/// before anything is removed.
#[delete("/cards/{card_id}")]
pub async fn delete_card(
    state: web::Data<HttpState>,
    user: CurrentUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<Card>> {
    let id = parse_card_id(path.into_inner())?;
    let card = state
        .cards
        .find_by_id(&id)
        .await?
        .ok_or_else(|| Error::not_found(CARD_NOT_FOUND))?;
    if card.owner() != user.id() {
        return Err(Error::forbidden("only the owner may delete a card"));
    }
    let removed = state
        .cards
        .delete_by_id(&id)
        .await?
        .ok_or_else(|| Error::not_found(CARD_NOT_FOUND))?;
    Ok(web::Json(removed))
}

/// Like a card on behalf of the authenticated user. Idempotent.
#[put("/cards/{card_id}/likes")]
pub async fn like_card(
    state: web::Data<HttpState>,
    user: CurrentUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<Card>> {
    let id = parse_card_id(path.into_inner())?;
    let card = state
        .cards
        .add_like(&id, user.id())
        .await?
        .ok_or_else(|| Error::not_found(CARD_NOT_FOUND))?;
    Ok(web::Json(card))
}

/// Withdraw the authenticated user's like. Idempotent.
#[delete("/cards/{card_id}/likes")]
pub async fn dislike_card(
    state: web::Data<HttpState>,
    user: CurrentUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<Card>> {
    let id = parse_card_id(path.into_inner())?;
    let card = state
        .cards
        .remove_like(&id, user.id())
        .await?
        .ok_or_else(|| Error::not_found(CARD_NOT_FOUND))?;
    Ok(web::Json(card))
}

#[cfg(test)]
mod tests;
