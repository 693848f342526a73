//! Users API handlers.
//!
//! ```text
//! POST /signup {"name":"A","about":"B","avatar":"http://x","email":"a@b.com","password":"pw123456"}
//! POST /signin {"email":"a@b.com","password":"pw123456"}
//! GET /users            (bearer)
//! GET /users/me         (bearer)
//! GET /users/{user_id}  (bearer)
//! PATCH /users/me       (bearer)
//! PATCH /users/me/avatar (bearer)
//! ```

use actix_web::cookie::Cookie;
use actix_web::{HttpResponse, get, patch, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{
    About, AvatarUrl, Email, Error, LoginCredentials, NewUser, User, UserId, UserName,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::CurrentUser;
use crate::inbound::http::state::HttpState;

/// Cookie carrying the issued session token after login.
pub const TOKEN_COOKIE: &str = "jwt";

/// Signup request body for `POST /signup`.
#[derive(Debug, Deserialize, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub about: String,
    pub avatar: String,
    pub email: String,
    pub password: String,
}

/// Minimal projection returned by signup: never the hash, never the
/// plaintext.
#[derive(Debug, Deserialize, Serialize)]
pub struct SignupResponse {
    pub id: UserId,
    pub email: Email,
}

/// Login request body for `POST /signin`.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Acknowledgment body for a successful login.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginResponse {
    pub message: String,
}

/// Profile update body for `PATCH /users/me`.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub about: String,
}

/// Avatar update body for `PATCH /users/me/avatar`.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateAvatarRequest {
    pub avatar: String,
}

const USER_NOT_FOUND: &str = "user not found";

/// Register a new user. Public route.
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let new_user = NewUser::try_from_parts(
        &payload.email,
        &payload.password,
        &payload.name,
        &payload.about,
        &payload.avatar,
    )
    .map_err(|err| Error::invalid_request(err.to_string()))?;

    let user = state.auth.signup(new_user).await?;
    tracing::info!(user_id = %user.id(), "user registered");
    Ok(HttpResponse::Created().json(SignupResponse {
        id: *user.id(),
        email: user.email().clone(),
    }))
}

/// Authenticate and issue a session token. Public route.
///
/// The token is returned in an HTTP-only cookie so scripts cannot read it;
/// clients present it back as `Authorization: Bearer <token>`.
#[post("/signin")]
pub async fn signin(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = LoginCredentials::try_from_parts(&payload.email, &payload.password)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let user = state.auth.authenticate(&credentials).await?;
    let token = state.tokens.issue(user.id())?;

    let cookie = Cookie::build(TOKEN_COOKIE, token)
        .path("/")
        .http_only(true)
        .finish();
    Ok(HttpResponse::Ok().cookie(cookie).json(LoginResponse {
        message: "signed in".to_owned(),
    }))
}

/// List every user profile.
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    _user: CurrentUser,
) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(web::Json(users))
}

/// Fetch the authenticated user's own profile.
#[get("/users/me")]
pub async fn current_user(
    state: web::Data<HttpState>,
    user: CurrentUser,
) -> ApiResult<web::Json<User>> {
    let found = state
        .users
        .find_by_id(user.id())
        .await?
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;
    Ok(web::Json(found))
}

/// Fetch a user profile by id.
#[get("/users/{user_id}")]
pub async fn user_by_id(
    state: web::Data<HttpState>,
    _user: CurrentUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::parse(path.into_inner())
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    let found = state
        .users
        .find_by_id(&id)
        .await?
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;
    Ok(web::Json(found))
}

/// Update the authenticated user's name and about text.
#[patch("/users/me")]
pub async fn update_profile(
    state: web::Data<HttpState>,
    user: CurrentUser,
    payload: web::Json<UpdateProfileRequest>,
) -> ApiResult<web::Json<User>> {
    let payload = payload.into_inner();
    let name =
        UserName::new(payload.name).map_err(|err| Error::invalid_request(err.to_string()))?;
    let about = About::new(payload.about).map_err(|err| Error::invalid_request(err.to_string()))?;
    let updated = state
        .users
        .update_profile(user.id(), name, about)
        .await?
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;
    Ok(web::Json(updated))
}

/// Update the authenticated user's avatar.
#[patch("/users/me/avatar")]
pub async fn update_avatar(
    state: web::Data<HttpState>,
    user: CurrentUser,
    payload: web::Json<UpdateAvatarRequest>,
) -> ApiResult<web::Json<User>> {
    let avatar =
        AvatarUrl::new(&payload.avatar).map_err(|err| Error::invalid_request(err.to_string()))?;
    let updated = state
        .users
        .update_avatar(user.id(), avatar)
        .await?
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;
    Ok(web::Json(updated))
}
