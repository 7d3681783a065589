//! InMemory Room Store 実装
//!
//! ドメイン層が定義する RoomStore trait の具体的な実装。
//! HashMap をインメモリ共有ストアとして使用します。
//!
//! 本番では Redis のような共有 KV ストアに差し替えることを想定しており、
//! trait の各メソッドがストア呼び出し 1 回（= フィールド単位の原子操作）に
//! 対応します。呼び出し側の read-modify-write は呼び出しをまたいだ
//! 原子性を持ちません。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatMessage, Members, RoomCode, RoomStore, StoreError};

/// 1 ルーム分の状態。ルーム作成時に両フィールドとも空で初期化され、
/// 部分的に作成されることはない。
#[derive(Debug, Clone, Default)]
struct RoomRecord {
    members: Members,
    messages: Vec<ChatMessage>,
}

/// インメモリ Room Store 実装
///
/// ルームコードをキーとする HashMap を単一の Mutex で保護する。
/// ロックは各メソッド内でのみ保持されるため、メソッド単位の原子性が
/// そのままストア呼び出し単位の原子性になる。
#[derive(Default)]
pub struct InMemoryRoomStore {
    rooms: Mutex<HashMap<String, RoomRecord>>,
}

impl InMemoryRoomStore {
    /// 新しい InMemoryRoomStore を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn create_room(&self, code: &RoomCode) -> Result<bool, StoreError> {
        let mut rooms = self.rooms.lock().await;
        if rooms.contains_key(code.as_str()) {
            return Ok(false);
        }
        rooms.insert(code.as_str().to_string(), RoomRecord::default());
        Ok(true)
    }

    async fn exists(&self, code: &RoomCode) -> Result<bool, StoreError> {
        let rooms = self.rooms.lock().await;
        Ok(rooms.contains_key(code.as_str()))
    }

    async fn get_members(&self, code: &RoomCode) -> Result<Members, StoreError> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(code.as_str())
            .map(|record| record.members.clone())
            .ok_or_else(|| StoreError::RoomNotFound(code.as_str().to_string()))
    }

    async fn set_members(&self, code: &RoomCode, members: Members) -> Result<(), StoreError> {
        let mut rooms = self.rooms.lock().await;
        let record = rooms
            .get_mut(code.as_str())
            .ok_or_else(|| StoreError::RoomNotFound(code.as_str().to_string()))?;
        record.members = members;
        Ok(())
    }

    async fn get_messages(&self, code: &RoomCode) -> Result<Vec<ChatMessage>, StoreError> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(code.as_str())
            .map(|record| record.messages.clone())
            .ok_or_else(|| StoreError::RoomNotFound(code.as_str().to_string()))
    }

    async fn set_messages(
        &self,
        code: &RoomCode,
        messages: Vec<ChatMessage>,
    ) -> Result<(), StoreError> {
        let mut rooms = self.rooms.lock().await;
        let record = rooms
            .get_mut(code.as_str())
            .ok_or_else(|| StoreError::RoomNotFound(code.as_str().to_string()))?;
        record.messages = messages;
        Ok(())
    }
}
