//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Number of characters in a room code.
pub const ROOM_CODE_LENGTH: usize = 6;

/// Room code value object.
///
/// A short identifier naming one chat room: exactly [`ROOM_CODE_LENGTH`]
/// ASCII uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomCode(String);

impl RoomCode {
    /// Create a new RoomCode.
    ///
    /// # Returns
    ///
    /// A Result containing the RoomCode or an error if validation fails
    pub fn new(code: String) -> Result<Self, ValueObjectError> {
        if code.len() != ROOM_CODE_LENGTH || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValueObjectError::RoomCodeInvalid { code });
        }
        Ok(Self(code))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name value object.
///
/// A client-asserted identity string, scoped to one room. Names are not
/// authenticated and nothing prevents two sessions from claiming the same
/// name; the only requirement is that a name is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a new DisplayName.
    ///
    /// # Returns
    ///
    /// A Result containing the DisplayName or an error if the name is empty
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        if name.is_empty() {
            return Err(ValueObjectError::DisplayNameEmpty);
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message body value object.
///
/// Arbitrary client-supplied text. The body is deliberately unvalidated:
/// empty strings and any content are accepted as-is, nothing is sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody(String);

impl MessageBody {
    /// Create a new MessageBody. Never fails; any string is a valid body.
    pub fn new(body: String) -> Self {
        Self(body)
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Unix timestamp in seconds, recorded at server receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from unix seconds.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connection identifier value object.
///
/// Handle for one live realtime connection, used as the delivery-group
/// registry key. Generated by `ConnectionIdFactory`, never client-supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Create a new ConnectionId.
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Archive record identifier value object.
///
/// Identifies one persisted transcript snapshot in the archive store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArchiveId(String);

impl ArchiveId {
    /// Create a new ArchiveId.
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArchiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session binding value object.
///
/// The `(room code, display name)` pair resolved once when a realtime
/// channel opens, and passed explicitly to every presence and message
/// operation. No operation re-derives it from ambient per-request context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionBinding {
    /// Room the session is bound to
    pub room: RoomCode,
    /// Display name the session asserted at create/join time
    pub name: DisplayName,
}

impl SessionBinding {
    /// Create a new SessionBinding.
    pub fn new(room: RoomCode, name: DisplayName) -> Self {
        Self { room, name }
    }
}
