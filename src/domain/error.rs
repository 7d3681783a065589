//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// DisplayName validation error
    #[error("DisplayName cannot be empty")]
    DisplayNameEmpty,

    /// RoomCode invalid format error
    #[error("RoomCode must be 6 ASCII uppercase letters (got: {code})")]
    RoomCodeInvalid { code: String },
}

/// Errors surfaced by the room state store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Referenced room code is not allocated
    #[error("room '{0}' does not exist")]
    RoomNotFound(String),

    /// Underlying store operation failed
    #[error("room store backend failure: {0}")]
    Backend(String),
}

/// Errors surfaced by the long-term archive store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArchiveError {
    /// Underlying archive write failed
    #[error("archive store backend failure: {0}")]
    Backend(String),
}
