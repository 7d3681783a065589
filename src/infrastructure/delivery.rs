//! 配信グループのレジストリ実装
//!
//! ルームと接続中コネクションの対応表を保持し、ドメイン層が定義する
//! DeliveryGroup trait（「ルーム全体へ配信」「特定コネクションへ配信」）を
//! 実装します。イベントは接続ごとの unbounded チャンネル経由で WebSocket
//! 送信タスクへ渡されます。

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};

use crate::domain::{ConnectionId, DeliveryGroup, RoomCode};

struct ConnectionEntry {
    room: String,
    sender: UnboundedSender<String>,
}

#[derive(Default)]
struct Registry {
    /// コネクション ID -> 所属ルームと送信チャンネル
    connections: HashMap<String, ConnectionEntry>,
    /// ルームコード -> 所属コネクション ID の集合
    rooms: HashMap<String, HashSet<String>>,
}

/// チャンネルベースの DeliveryGroup 実装
///
/// 送信に失敗したコネクション（受信側がすでに閉じている場合）は warn ログを
/// 残してスキップし、残りへの配信を続行する。
#[derive(Default)]
pub struct ChannelDeliveryGroup {
    registry: Mutex<Registry>,
}

impl ChannelDeliveryGroup {
    /// 新しい ChannelDeliveryGroup を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeliveryGroup for ChannelDeliveryGroup {
    async fn join(&self, room: &RoomCode, conn: &ConnectionId, sender: UnboundedSender<String>) {
        let mut registry = self.registry.lock().await;
        registry.connections.insert(
            conn.as_str().to_string(),
            ConnectionEntry {
                room: room.as_str().to_string(),
                sender,
            },
        );
        registry
            .rooms
            .entry(room.as_str().to_string())
            .or_default()
            .insert(conn.as_str().to_string());
    }

    async fn leave(&self, conn: &ConnectionId) {
        let mut registry = self.registry.lock().await;
        if let Some(entry) = registry.connections.remove(conn.as_str())
            && let Some(group) = registry.rooms.get_mut(&entry.room)
        {
            group.remove(conn.as_str());
            if group.is_empty() {
                registry.rooms.remove(&entry.room);
            }
        }
    }

    async fn deliver_to_room(&self, room: &RoomCode, event: String) {
        let registry = self.registry.lock().await;
        let Some(group) = registry.rooms.get(room.as_str()) else {
            return;
        };
        for conn_id in group {
            if let Some(entry) = registry.connections.get(conn_id)
                && entry.sender.send(event.clone()).is_err()
            {
                tracing::warn!("failed to deliver event to connection '{}'", conn_id);
            }
        }
    }

    async fn deliver_to_connection(&self, conn: &ConnectionId, event: String) {
        let registry = self.registry.lock().await;
        match registry.connections.get(conn.as_str()) {
            Some(entry) => {
                if entry.sender.send(event).is_err() {
                    tracing::warn!("failed to deliver event to connection '{}'", conn);
                }
            }
            None => {
                tracing::debug!("connection '{}' is not registered, event dropped", conn);
            }
        }
    }
}
