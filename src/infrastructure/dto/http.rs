//! HTTP API request/response DTOs.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/create-room`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoomRequest {
    pub name: Option<String>,
}

/// Body of `POST /api/join-room`
#[derive(Debug, Clone, Deserialize)]
pub struct JoinRoomRequest {
    pub name: Option<String>,
    pub code: Option<String>,
}

/// Body of `POST /api/save-chat`
#[derive(Debug, Clone, Deserialize)]
pub struct SaveChatRequest {
    pub room: Option<String>,
}

/// Session binding returned by create-room and join-room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub room: String,
    pub name: String,
}

/// Confirmation returned by save-chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveChatResponse {
    pub message: String,
}

/// Generic error body for all request-style failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
