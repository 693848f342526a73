//! Regression coverage for this module.

use super::*;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test as actix_test};
use serde_json::{Value, json};

use crate::domain::UserId;
use crate::inbound::http::test_utils::{bearer_for, test_state};

fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
> {
    App::new()
        .app_data(state)
        .service(list_cards)
        .service(create_card)
        .service(delete_card)
        .service(like_card)
        .service(dislike_card)
}

fn create_request(auth: &str) -> actix_http::Request {
    actix_test::TestRequest::post()
        .uri("/cards")
        .insert_header((header::AUTHORIZATION, auth))
        .set_json(json!({"name": "Lake view", "link": "https://x.io/lake.jpg"}))
        .to_request()
}

#[actix_web::test]
async fn card_routes_require_a_bearer_token() {
    let app = actix_test::init_service(test_app(test_state())).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/cards").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn created_cards_belong_to_the_requester() {
    let state = test_state();
    let app = actix_test::init_service(test_app(state.clone())).await;
    let owner = UserId::random();
    let auth = bearer_for(&state, &owner);

    let response = actix_test::call_service(&app, create_request(&auth)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("owner").and_then(Value::as_str),
        Some(owner.to_string().as_str())
    );
    assert_eq!(
        body.get("likes").and_then(Value::as_array).map(Vec::len),
        Some(0)
    );
}

#[actix_web::test]
async fn create_rejects_invalid_payloads() {
    let state = test_state();
    let app = actix_test::init_service(test_app(state.clone())).await;
    let auth = bearer_for(&state, &UserId::random());

    let request = actix_test::TestRequest::post()
        .uri("/cards")
        .insert_header((header::AUTHORIZATION, auth))
        .set_json(json!({"name": "L", "link": "https://x.io/lake.jpg"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn only_the_owner_may_delete_and_the_card_survives_the_attempt() {
    let state = test_state();
    let app = actix_test::init_service(test_app(state.clone())).await;
    let owner = UserId::random();
    let intruder = UserId::random();

    let created: Value =
        actix_test::read_body_json(actix_test::call_service(&app, create_request(&bearer_for(&state, &owner))).await)
            .await;
    let card_id = created.get("id").and_then(Value::as_str).expect("card id");

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/cards/{card_id}"))
        .insert_header((header::AUTHORIZATION, bearer_for(&state, &intruder)))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The card must still exist for its owner.
    let request = actix_test::TestRequest::delete()
        .uri(&format!("/cards/{card_id}"))
        .insert_header((header::AUTHORIZATION, bearer_for(&state, &owner)))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn delete_distinguishes_malformed_and_missing_ids() {
    let state = test_state();
    let app = actix_test::init_service(test_app(state.clone())).await;
    let auth = bearer_for(&state, &UserId::random());

    let request = actix_test::TestRequest::delete()
        .uri("/cards/not-a-uuid")
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/cards/{}", crate::domain::CardId::random()))
        .insert_header((header::AUTHORIZATION, auth))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn like_then_dislike_round_trip() {
    let state = test_state();
    let app = actix_test::init_service(test_app(state.clone())).await;
    let owner = UserId::random();
    let liker = UserId::random();

    let created: Value =
        actix_test::read_body_json(actix_test::call_service(&app, create_request(&bearer_for(&state, &owner))).await)
            .await;
    let card_id = created.get("id").and_then(Value::as_str).expect("card id");
    let auth = bearer_for(&state, &liker);

    let request = actix_test::TestRequest::put()
        .uri(&format!("/cards/{card_id}/likes"))
        .insert_header((header::AUTHORIZATION, auth.clone()))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("likes").and_then(Value::as_array).map(Vec::len),
        Some(1)
    );

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/cards/{card_id}/likes"))
        .insert_header((header::AUTHORIZATION, auth))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("likes").and_then(Value::as_array).map(Vec::len),
        Some(0)
    );
}
