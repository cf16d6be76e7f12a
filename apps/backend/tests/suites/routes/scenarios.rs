//! Whole games played over HTTP.

use actix_web::http::StatusCode;
use actix_web::test;
use rps_backend::build_state;
use serde_json::json;

use crate::common::assert_error_body;
use crate::support::create_test_app;
use crate::support::game_requests::{
    call_json, create_game, join_request, move_request, query_request,
};

#[actix_web::test]
async fn rock_beats_scissors() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let id = create_game(&app, "Alice").await;
    assert_eq!(id, 1);

    let (status, body) = call_json(&app, join_request(id, "Bob")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Player Bob joined game 1");

    let (_, body) = call_json(&app, move_request(id, "Alice", "rock")).await;
    assert_eq!(body["message"], "Move recorded. Waiting for other player.");
    let (_, body) = call_json(&app, move_request(id, "Bob", "scissors")).await;
    assert_eq!(body["message"], "Move recorded.");

    let (status, body) = call_json(&app, query_request(id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "winner": { "name": "Alice", "move": "rock" } }));

    Ok(())
}

#[actix_web::test]
async fn matching_moves_tie() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let id = create_game(&app, "Alice").await;
    test::call_service(&app, join_request(id, "Bob")).await;
    test::call_service(&app, move_request(id, "Alice", "paper")).await;
    test::call_service(&app, move_request(id, "Bob", "paper")).await;

    let (_, body) = call_json(&app, query_request(id)).await;
    assert_eq!(body, json!({ "message": "It's a tie." }));

    Ok(())
}

#[actix_web::test]
async fn second_seat_can_win() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let id = create_game(&app, "Alice").await;
    test::call_service(&app, join_request(id, "Bob")).await;
    test::call_service(&app, move_request(id, "Bob", "scissors")).await;
    test::call_service(&app, move_request(id, "Alice", "paper")).await;

    let (_, body) = call_json(&app, query_request(id)).await;
    assert_eq!(body, json!({ "winner": { "name": "Bob", "move": "scissors" } }));

    Ok(())
}

#[actix_web::test]
async fn moving_before_opponent_joins_waits() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let id = create_game(&app, "Alice").await;
    let (status, body) = call_json(&app, move_request(id, "Alice", "rock")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Move recorded. Waiting for other player.");

    let (_, body) = call_json(&app, query_request(id)).await;
    assert_eq!(body["message"], "Waiting for another player to join.");

    test::call_service(&app, join_request(id, "Bob")).await;
    let (_, body) = call_json(&app, move_request(id, "Bob", "paper")).await;
    assert_eq!(body["message"], "Move recorded.");

    let (_, body) = call_json(&app, query_request(id)).await;
    assert_eq!(body["winner"]["name"], "Bob");

    Ok(())
}

#[actix_web::test]
async fn games_do_not_interfere() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let first = create_game(&app, "Alice").await;
    let second = create_game(&app, "Carol").await;
    test::call_service(&app, join_request(first, "Bob")).await;

    // Bob is seated in the first game only.
    let resp = test::call_service(&app, move_request(second, "Bob", "rock")).await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "PLAYER_NOT_FOUND", "").await;

    let (_, body) = call_json(&app, query_request(second)).await;
    assert_eq!(body["message"], "Waiting for another player to join.");

    Ok(())
}
