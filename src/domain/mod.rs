//! Domain layer for the chat room engine.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::{ArchiveRecord, ChatMessage, Members};
pub use error::{ArchiveError, StoreError, ValueObjectError};
pub use factory::{ArchiveIdFactory, ConnectionIdFactory, RoomCodeFactory};
pub use repository::{ArchiveStore, DeliveryGroup, RoomStore};
pub use value_object::{
    ArchiveId, ConnectionId, DisplayName, MessageBody, ROOM_CODE_LENGTH, RoomCode, SessionBinding,
    Timestamp,
};
