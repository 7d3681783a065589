//! InMemory Archive Store 実装
//!
//! ドメイン層が定義する ArchiveStore trait の具体的な実装。
//! 追記専用の Vec を長期保存ストアの代わりに使用します。
//! 本番ではドキュメント DB（MongoDB など）への insert に対応します。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ArchiveError, ArchiveId, ArchiveIdFactory, ArchiveRecord, ArchiveStore};

/// インメモリ Archive Store 実装
///
/// persist のたびに新しい ID を採番してレコードを追記する。
/// 同じルームを複数回アーカイブすると独立したレコードが並ぶ（更新はしない）。
#[derive(Default)]
pub struct InMemoryArchiveStore {
    records: Mutex<Vec<(ArchiveId, ArchiveRecord)>>,
}

impl InMemoryArchiveStore {
    /// 新しい InMemoryArchiveStore を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存済みレコードのスナップショットを挿入順で返す（テスト用途）
    pub async fn records(&self) -> Vec<(ArchiveId, ArchiveRecord)> {
        let records = self.records.lock().await;
        records.clone()
    }
}

#[async_trait]
impl ArchiveStore for InMemoryArchiveStore {
    async fn persist(&self, record: ArchiveRecord) -> Result<ArchiveId, ArchiveError> {
        let id = ArchiveIdFactory::generate();
        let mut records = self.records.lock().await;
        records.push((id.clone(), record));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChatMessage, DisplayName, MessageBody, Timestamp};

    fn record(room: &str, bodies: &[&str]) -> ArchiveRecord {
        let messages = bodies
            .iter()
            .enumerate()
            .map(|(i, body)| {
                ChatMessage::new(
                    DisplayName::new("alice".to_string()).unwrap(),
                    MessageBody::new(body.to_string()),
                    Timestamp::new(i as i64),
                )
            })
            .collect();
        ArchiveRecord::new(room.to_string(), messages)
    }

    #[tokio::test]
    async fn test_persist_appends_record() {
        // テスト項目: persist したレコードが挿入順で保存される
        // given (前提条件):
        let store = InMemoryArchiveStore::new();

        // when (操作):
        let id = store.persist(record("ABCDEF", &["hi"])).await.unwrap();

        // then (期待する結果):
        let records = store.records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, id);
        assert_eq!(records[0].1.room_id, "ABCDEF");
        assert_eq!(records[0].1.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_persist_twice_stores_independent_records() {
        // テスト項目: 同じ内容を二度 persist すると別 ID の独立レコードが 2 件並ぶ
        // given (前提条件):
        let store = InMemoryArchiveStore::new();

        // when (操作):
        let id1 = store.persist(record("ABCDEF", &["hi"])).await.unwrap();
        let id2 = store.persist(record("ABCDEF", &["hi"])).await.unwrap();

        // then (期待する結果):
        assert_ne!(id1, id2);
        assert_eq!(store.records().await.len(), 2);
    }
}
