//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - メッセージ送信処理（ルーム全体へのブロードキャスト、ログへの追記）
//!
//! ### なぜこのテストが必要か
//! - ブロードキャストが送信者本人を含むルーム全体に届くことを保証
//! - ログがちょうど 1 件伸び、末尾がブロードキャスト内容と一致することを確認
//! - 未割り当てルームへの送信が完全な no-op であることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系: メッセージ送信とブロードキャスト
//! - エッジケース: 空文字メッセージ（検証なしでそのまま通る）
//! - 異常系: 未割り当てルームへの送信（黙って無視）

use std::sync::Arc;

use crate::{
    common::time::unix_timestamp,
    domain::{
        ChatMessage, DeliveryGroup, MessageBody, RoomCode, RoomStore, SessionBinding, StoreError,
        Timestamp,
    },
    infrastructure::dto::websocket::ChatEvent,
};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Store（データアクセス層の抽象化）
    store: Arc<dyn RoomStore>,
    /// 配信グループ（トランスポートの抽象化）
    delivery: Arc<dyn DeliveryGroup>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(store: Arc<dyn RoomStore>, delivery: Arc<dyn DeliveryGroup>) -> Self {
        Self { store, delivery }
    }

    /// メッセージ送信を実行
    ///
    /// 配信遅延をストア書き込みに依存させないため、ブロードキャストが先、
    /// ログへの追記が後。本文は一切検証しない（空文字も通す）。
    ///
    /// # Arguments
    ///
    /// * `binding` - 送信元セッションのバインディング
    /// * `text` - 受信した本文（生文字列）
    pub async fn execute(&self, binding: &SessionBinding, text: String) -> Result<(), StoreError> {
        if !self.store.exists(&binding.room).await? {
            tracing::debug!(
                "message from '{}' ignored: room '{}' does not exist",
                binding.name,
                binding.room
            );
            return Ok(());
        }

        let message = ChatMessage::new(
            binding.name.clone(),
            MessageBody::new(text),
            Timestamp::new(unix_timestamp()),
        );

        // 1. ルーム全体（送信者本人を含む）へブロードキャスト
        let event = serde_json::to_string(&ChatEvent::from(&message)).unwrap();
        self.delivery.deliver_to_room(&binding.room, event).await;

        // 2. ログへ追記。ブロードキャスト済みなので、ここで失敗すると配信内容と
        //    ログが食い違う。その場合は warn を残す（送信者には返さない）。
        if let Err(e) = self.append_to_log(&binding.room, message).await {
            tracing::warn!(
                "message from '{}' was broadcast to room '{}' but the log append failed: {}",
                binding.name,
                binding.room,
                e
            );
            return Err(e);
        }

        Ok(())
    }

    /// read-modify-write でログ末尾に追記する
    async fn append_to_log(&self, room: &RoomCode, message: ChatMessage) -> Result<(), StoreError> {
        let mut messages = self.store.get_messages(room).await?;
        messages.push(message);
        self.store.set_messages(room, messages).await
    }
}
