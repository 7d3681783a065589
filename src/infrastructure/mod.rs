//! Infrastructure layer: concrete implementations of the collaborator
//! traits defined by the domain, plus the DTOs exchanged at the edges.

pub mod delivery;
pub mod dto;
pub mod repository;

pub use delivery::ChannelDeliveryGroup;
pub use repository::{InMemoryArchiveStore, InMemoryRoomStore};
