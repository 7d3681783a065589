//! Collaborator traits owned by the domain layer.
//!
//! The room state store, the archive sink and the delivery capability are
//! external collaborators. The domain defines their contracts here and the
//! infrastructure layer provides implementations (依存性の逆転); usecases
//! depend on these traits only, so tests can substitute in-memory fakes.

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use super::{
    entity::{ArchiveRecord, ChatMessage, Members},
    error::{ArchiveError, StoreError},
    value_object::{ArchiveId, ConnectionId, RoomCode},
};

/// Shared per-room state store.
///
/// Each room holds two independently addressable fields, `members` and
/// `messages`. Every method is atomic with respect to a single field of a
/// single room at the store-call level; callers that read a field, modify
/// it in process and write it back get no cross-call atomicity beyond that.
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Allocate a room if the code is free, initializing both fields empty.
    ///
    /// Returns `true` when the room was created, `false` when the code was
    /// already allocated. Check and insert are a single atomic step.
    async fn create_room(&self, code: &RoomCode) -> Result<bool, StoreError>;

    /// Whether the code is currently allocated. No side effect.
    async fn exists(&self, code: &RoomCode) -> Result<bool, StoreError>;

    /// Read the member map of an existing room.
    async fn get_members(&self, code: &RoomCode) -> Result<Members, StoreError>;

    /// Overwrite the member map of an existing room.
    async fn set_members(&self, code: &RoomCode, members: Members) -> Result<(), StoreError>;

    /// Read the full ordered message log of an existing room.
    async fn get_messages(&self, code: &RoomCode) -> Result<Vec<ChatMessage>, StoreError>;

    /// Overwrite the message log of an existing room.
    async fn set_messages(
        &self,
        code: &RoomCode,
        messages: Vec<ChatMessage>,
    ) -> Result<(), StoreError>;
}

/// Write-only long-term transcript sink.
///
/// One operation: persist a snapshot. Each call stores an independent
/// record; the sink never updates or deduplicates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// Persist one archive record, returning its generated identifier.
    async fn persist(&self, record: ArchiveRecord) -> Result<ArchiveId, ArchiveError>;
}

/// Fan-out capability over live realtime connections.
///
/// A room-to-connection-set registry decoupled from the transport: the
/// presence manager and message router only ever ask to deliver an event
/// to a whole room or to exactly one connection. Events are pre-serialized
/// frames; delivery failures are logged by implementations, not surfaced.
#[async_trait]
pub trait DeliveryGroup: Send + Sync {
    /// Register a connection as a member of a room's delivery group.
    async fn join(&self, room: &RoomCode, conn: &ConnectionId, sender: UnboundedSender<String>);

    /// Remove a connection from the registry (no-op if unknown).
    async fn leave(&self, conn: &ConnectionId);

    /// Deliver an event to every connection currently in the room's group.
    async fn deliver_to_room(&self, room: &RoomCode, event: String);

    /// Deliver an event to exactly one connection.
    async fn deliver_to_connection(&self, conn: &ConnectionId, event: String);
}
