#![allow(dead_code)]

//! Request builders for the games API.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, Error};
use serde_json::{json, Value};

pub fn create_request(body: Value) -> Request {
    test::TestRequest::post()
        .uri("/api/games")
        .set_json(body)
        .to_request()
}

pub fn join_request(id: u64, name: &str) -> Request {
    test::TestRequest::patch()
        .uri(&format!("/api/games/{id}/join"))
        .set_json(json!({ "id": id, "name": name }))
        .to_request()
}

pub fn move_request(id: u64, name: &str, mv: &str) -> Request {
    test::TestRequest::post()
        .uri(&format!("/api/games/{id}/move"))
        .set_json(json!({ "id": id, "name": name, "move": mv }))
        .to_request()
}

/// GET with the id in the body, as existing clients send it.
pub fn query_request(id: u64) -> Request {
    test::TestRequest::get()
        .uri(&format!("/api/games/{id}"))
        .set_json(json!({ "id": id }))
        .to_request()
}

/// Create a game and return its id, asserting the 201 contract.
pub async fn create_game<S>(app: &S, name: &str) -> u64
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = test::call_service(app, create_request(json!({ "name": name }))).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    body["gameId"].as_u64().expect("gameId should be a number")
}

/// Call and return `(status, json body)`.
pub async fn call_json<S>(app: &S, req: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}
