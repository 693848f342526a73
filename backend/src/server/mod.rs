//! HTTP server assembly: route registration and startup.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::{App, HttpServer, web};

use crate::domain::{Error, TokenService};
use crate::inbound::http::cards::{create_card, delete_card, dislike_card, like_card, list_cards};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{
    current_user, list_users, signin, signup, update_avatar, update_profile, user_by_id,
};
use crate::outbound::persistence::{InMemoryCardRepository, InMemoryUserRepository};

/// Register every route and shared state item on an Actix service config.
///
/// Kept as a free function so integration tests assemble exactly the app
/// the binary runs: signup/signin and the health probes are public, every
/// other route sits behind the bearer-token gate, and unmatched paths fall
/// through to a JSON 404.
pub fn configure_app(
    cfg: &mut web::ServiceConfig,
    state: web::Data<HttpState>,
    health: web::Data<HealthState>,
) {
    // Malformed JSON bodies should use the same envelope as domain errors.
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| Error::invalid_request(err.to_string()).into());

    cfg.app_data(state)
        .app_data(health)
        .app_data(json_config)
        .service(signup)
        .service(signin)
        .service(ready)
        .service(live)
        .service(list_users)
        // `/users/me` must register before `/users/{user_id}` so the
        // literal segment wins route matching.
        .service(current_user)
        .service(user_by_id)
        .service(update_profile)
        .service(update_avatar)
        .service(list_cards)
        .service(create_card)
        .service(delete_card)
        .service(like_card)
        .service(dislike_card)
        .default_service(web::route().to(not_found));
}

async fn not_found() -> Result<actix_web::HttpResponse, Error> {
    Err(Error::not_found("page not found"))
}

/// Fresh in-memory handler state for the bundled binary.
#[must_use]
pub fn in_memory_state(tokens: TokenService) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        tokens,
        Arc::new(InMemoryUserRepository::default()),
        Arc::new(InMemoryCardRepository::default()),
    ))
}

/// Bind and run the HTTP server until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let state = in_memory_state(TokenService::new(&config.token_secret));
    let health = web::Data::new(HealthState::new());
    let server_health = health.clone();

    let server = HttpServer::new(move || {
        let state = state.clone();
        let health = server_health.clone();
        App::new().configure(move |cfg| configure_app(cfg, state, health))
    })
    .bind(config.bind_addr)?;

    health.mark_ready();
    server.run().await
}
