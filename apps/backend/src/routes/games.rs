//! Game-related HTTP routes.
//!
//! Handlers only bind the request shape; every rule lives in
//! `GameService` and the domain. The game id comes from the body when the
//! client sends one and from the path otherwise.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::domain::game::{GAME_FULL_OR_NOT_FOUND, GAME_NOT_FOUND};
use crate::domain::{GameId, GameView, MoveOutcome, Player};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::extractors::game_id::{resolve_game_id, GameIdParam};
use crate::extractors::validated_json::ValidatedJson;
use crate::services::games::GameService;
use crate::state::app_state::AppState;

const WAITING_FOR_OPPONENT: &str = "Waiting for another player to join.";
const MOVES_PENDING: &str = "Both players have not yet made their moves.";
const TIE: &str = "It's a tie.";
const MOVE_RECORDED: &str = "Move recorded.";
const MOVE_RECORDED_WAITING: &str = "Move recorded. Waiting for other player.";

#[derive(Debug, Deserialize)]
struct CreateGameRequest {
    name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateGameResponse {
    game_id: GameId,
}

#[derive(Debug, Deserialize)]
struct JoinGameRequest {
    id: Option<GameIdParam>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubmitMoveRequest {
    id: Option<GameIdParam>,
    name: Option<String>,
    #[serde(rename = "move")]
    choice: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GameQueryRequest {
    id: Option<GameIdParam>,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GameViewResponse {
    Message { message: &'static str },
    Winner { winner: Player },
}

impl From<GameView> for GameViewResponse {
    fn from(view: GameView) -> Self {
        match view {
            GameView::WaitingForOpponent => Self::Message {
                message: WAITING_FOR_OPPONENT,
            },
            GameView::MovesPending => Self::Message {
                message: MOVES_PENDING,
            },
            GameView::Winner(winner) => Self::Winner { winner },
            GameView::Tie => Self::Message { message: TIE },
        }
    }
}

/// POST /api/games
///
/// Creates a game seating the caller; responds 201 with `{gameId}`.
async fn create_game(
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let name = body.name.as_deref().unwrap_or_default();
    let game_id = GameService::new(app_state.store()).create_game(name)?;

    Ok(HttpResponse::Created().json(CreateGameResponse { game_id }))
}

/// PATCH /api/games/{id}/join
async fn join_game(
    path: web::Path<String>,
    body: ValidatedJson<JoinGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let game_id = resolve_game_id(body.id.as_ref(), &path)
        .ok_or_else(|| DomainError::game_full_or_not_found(GAME_FULL_OR_NOT_FOUND))?;
    let name = body.name.unwrap_or_default();

    GameService::new(app_state.store()).join_game(game_id, &name)?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "Player {name} joined game {game_id}"
    ))))
}

/// POST /api/games/{id}/move
///
/// Two success messages: one when the move completed the game, one while
/// the opponent is still missing or has not moved.
async fn submit_move(
    path: web::Path<String>,
    body: ValidatedJson<SubmitMoveRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let game_id = resolve_game_id(body.id.as_ref(), &path)
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, GAME_NOT_FOUND))?;
    let name = body.name.unwrap_or_default();
    let choice = body.choice.unwrap_or_default();

    let outcome = GameService::new(app_state.store()).submit_move(game_id, &name, &choice)?;

    let message = match outcome {
        MoveOutcome::Resolved => MOVE_RECORDED,
        MoveOutcome::Waiting => MOVE_RECORDED_WAITING,
    };
    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}

/// GET /api/games/{id}
///
/// Read-only. Clients historically send `{id}` in the body of this GET.
async fn get_game(
    path: web::Path<String>,
    body: ValidatedJson<GameQueryRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = resolve_game_id(body.id.as_ref(), &path)
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, GAME_NOT_FOUND))?;

    let view = GameService::new(app_state.store()).game_view(game_id)?;

    Ok(HttpResponse::Ok().json(GameViewResponse::from(view)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)));
    cfg.service(web::resource("/{id}").route(web::get().to(get_game)));
    cfg.service(web::resource("/{id}/join").route(web::patch().to(join_game)));
    cfg.service(web::resource("/{id}/move").route(web::post().to(submit_move)));
}
