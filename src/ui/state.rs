//! Server state and connection query types.

use serde::Deserialize;
use std::sync::Arc;

use crate::{
    domain::{ArchiveStore, DeliveryGroup, DisplayName, RoomCode, RoomStore, SessionBinding},
    infrastructure::{ChannelDeliveryGroup, InMemoryArchiveStore, InMemoryRoomStore},
};

/// Query parameters for the WebSocket endpoint.
///
/// Both parameters are optional on purpose: a connection with an absent or
/// invalid binding is still accepted, it just never gains presence.
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    pub room: Option<String>,
    pub name: Option<String>,
}

impl ConnectQuery {
    /// Resolve the session binding once, at connection-open time.
    pub fn into_binding(self) -> Option<SessionBinding> {
        let room = RoomCode::new(self.room?).ok()?;
        let name = DisplayName::new(self.name?).ok()?;
        Some(SessionBinding::new(room, name))
    }
}

/// Shared application state
pub struct AppState {
    /// 共有ルームステート（データアクセス層の抽象化）
    pub store: Arc<dyn RoomStore>,
    /// 長期保存ストア（書き込み専用シンク）
    pub archive: Arc<dyn ArchiveStore>,
    /// 配信グループのレジストリ
    pub delivery: Arc<dyn DeliveryGroup>,
}

impl AppState {
    /// Wire the state with the in-memory implementations.
    pub fn new_in_memory() -> Self {
        Self {
            store: Arc::new(InMemoryRoomStore::new()),
            archive: Arc::new(InMemoryArchiveStore::new()),
            delivery: Arc::new(ChannelDeliveryGroup::new()),
        }
    }
}
