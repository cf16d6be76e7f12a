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
async fn views_follow_the_game_through_its_phases() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let id = create_game(&app, "Alice").await;
    let (status, body) = call_json(&app, query_request(id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "Waiting for another player to join." })
    );

    test::call_service(&app, join_request(id, "Bob")).await;
    let (_, body) = call_json(&app, query_request(id)).await;
    assert_eq!(
        body,
        json!({ "message": "Both players have not yet made their moves." })
    );

    test::call_service(&app, move_request(id, "Bob", "paper")).await;
    let (_, body) = call_json(&app, query_request(id)).await;
    assert_eq!(
        body,
        json!({ "message": "Both players have not yet made their moves." })
    );

    test::call_service(&app, move_request(id, "Alice", "scissors")).await;
    let (status, body) = call_json(&app, query_request(id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "winner": { "name": "Alice", "move": "scissors" } })
    );

    Ok(())
}

#[actix_web::test]
async fn requery_is_stable() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let id = create_game(&app, "Alice").await;
    test::call_service(&app, join_request(id, "Bob")).await;
    test::call_service(&app, move_request(id, "Alice", "rock")).await;
    test::call_service(&app, move_request(id, "Bob", "rock")).await;

    let (_, first) = call_json(&app, query_request(id)).await;
    let (_, second) = call_json(&app, query_request(id)).await;
    assert_eq!(first, json!({ "message": "It's a tie." }));
    assert_eq!(first, second);

    Ok(())
}

#[actix_web::test]
async fn unknown_game_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let resp = test::call_service(&app, query_request(5)).await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "GAME_NOT_FOUND", "Game not found.").await;

    let req = test::TestRequest::get().uri("/api/games/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(resp, StatusCode::NOT_FOUND, "GAME_NOT_FOUND", "Game not found.").await;

    Ok(())
}

#[actix_web::test]
async fn bodyless_get_uses_the_path_id() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let id = create_game(&app, "Alice").await;
    let req = test::TestRequest::get()
        .uri(&format!("/api/games/{id}"))
        .to_request();
    let (status, body) = call_json(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Waiting for another player to join.");

    Ok(())
}

#[actix_web::test]
async fn non_integer_body_id_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let id = create_game(&app, "Alice").await;
    for bad in [json!(1.0), json!(u64::MAX), json!(-1), json!({ "id": 1 })] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/games/{id}"))
            .set_json(json!({ "id": bad }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_body(resp, StatusCode::NOT_FOUND, "GAME_NOT_FOUND", "Game not found.").await;
    }

    Ok(())
}
