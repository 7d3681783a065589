//! HTTP API endpoint handlers.
//!
//! Request-style operations fail loud with a generic message and no retry;
//! the caller re-issues the request. Status codes follow the original API
//! surface: 404 for missing required fields and unknown rooms, 500 for
//! backend failures.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    domain::RoomCode,
    infrastructure::dto::http::{
        CreateRoomRequest, ErrorResponse, JoinRoomRequest, SaveChatRequest, SaveChatResponse,
        SessionResponse,
    },
    ui::state::AppState,
    usecase::{
        CreateRoomError, CreateRoomUseCase, JoinRoomError, JoinRoomUseCase, SaveChatError,
        SaveChatUseCase,
    },
};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `POST /api/create-room` — allocate a fresh room bound to the caller's name
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateRoomRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let usecase = CreateRoomUseCase::new(state.store.clone());
    let name = req.name.unwrap_or_default();

    match usecase.execute(&name).await {
        Ok(binding) => Ok(Json(SessionResponse {
            room: binding.room.into_string(),
            name: binding.name.into_string(),
        })),
        Err(CreateRoomError::NameRequired) => {
            Err(api_error(StatusCode::NOT_FOUND, "Name is required"))
        }
        Err(e) => {
            tracing::error!("create-room failed: {}", e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create room",
            ))
        }
    }
}

/// `POST /api/join-room` — bind the caller's name to an existing room
pub async fn join_room(
    State(state): State<Arc<AppState>>,
    Json(req): Json<JoinRoomRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let usecase = JoinRoomUseCase::new(state.store.clone());
    let name = req.name.unwrap_or_default();
    let code = req.code.unwrap_or_default();

    match usecase.execute(&name, &code).await {
        Ok(binding) => Ok(Json(SessionResponse {
            room: binding.room.into_string(),
            name: binding.name.into_string(),
        })),
        Err(JoinRoomError::NameRequired) => {
            Err(api_error(StatusCode::NOT_FOUND, "Name is required"))
        }
        Err(JoinRoomError::RoomNotFound) => {
            Err(api_error(StatusCode::NOT_FOUND, "Room does not exist"))
        }
        Err(e) => {
            tracing::error!("join-room failed: {}", e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to join room",
            ))
        }
    }
}

/// `POST /api/save-chat` — archive the room's transcript
pub async fn save_chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveChatRequest>,
) -> Result<Json<SaveChatResponse>, ApiError> {
    let room = match req.room {
        Some(room) if !room.is_empty() => room,
        _ => return Err(api_error(StatusCode::NOT_FOUND, "Room ID is required")),
    };
    // A malformed code cannot be allocated, so it reads as an unknown room.
    let code = RoomCode::new(room)
        .map_err(|_| api_error(StatusCode::NOT_FOUND, "Room does not exist"))?;

    let usecase = SaveChatUseCase::new(state.store.clone(), state.archive.clone());
    match usecase.execute(&code).await {
        Ok(_) => Ok(Json(SaveChatResponse {
            message: "Chat saved successfully".to_string(),
        })),
        Err(SaveChatError::RoomNotFound) => {
            Err(api_error(StatusCode::NOT_FOUND, "Room does not exist"))
        }
        Err(e) => {
            tracing::error!("save-chat failed: {}", e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save chat",
            ))
        }
    }
}
