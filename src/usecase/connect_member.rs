//! UseCase: メンバー接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectMemberUseCase::execute() メソッド
//! - 接続時のプレゼンス反映（配信グループ参加、メンバーマップ更新、イベント配信）
//!
//! ### なぜこのテストが必要か
//! - 本人宛のメンバーリストとルーム全体へのブロードキャストが、参加反映
//!   「後」の同一スナップショットから作られることを保証する
//! - 新規接続者にメッセージ履歴（previous-messages）が届くことを確認
//! - 存在しないルームへの接続が完全な no-op であることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系: 最初のメンバーの接続、2 人目以降の接続
//! - エッジケース: 履歴のあるルームへの接続
//! - 異常系: 未割り当てルームへの接続（黙って無視）

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::{
    domain::{ConnectionId, DeliveryGroup, RoomStore, SessionBinding, StoreError},
    infrastructure::dto::websocket::{
        ChatMessageDto, EventType, MembersEvent, PreviousMessagesEvent,
    },
};

/// メンバー接続のユースケース
pub struct ConnectMemberUseCase {
    /// Store（データアクセス層の抽象化）
    store: Arc<dyn RoomStore>,
    /// 配信グループ（トランスポートの抽象化）
    delivery: Arc<dyn DeliveryGroup>,
}

impl ConnectMemberUseCase {
    /// 新しい ConnectMemberUseCase を作成
    pub fn new(store: Arc<dyn RoomStore>, delivery: Arc<dyn DeliveryGroup>) -> Self {
        Self { store, delivery }
    }

    /// メンバー接続を実行
    ///
    /// ルームが存在しない場合は何も起こさない（リアルタイム系の
    /// fail closed, fail quiet ポリシー）。
    ///
    /// # Arguments
    ///
    /// * `binding` - 接続開設時に解決済みのセッションバインディング
    /// * `conn` - この接続のハンドル
    /// * `sender` - この接続へのイベント送信チャンネル
    pub async fn execute(
        &self,
        binding: &SessionBinding,
        conn: &ConnectionId,
        sender: UnboundedSender<String>,
    ) -> Result<(), StoreError> {
        if !self.store.exists(&binding.room).await? {
            tracing::debug!(
                "connect for '{}' ignored: room '{}' does not exist",
                binding.name,
                binding.room
            );
            return Ok(());
        }

        // 1. 配信グループに参加（以後のブロードキャストが届くようになる）
        self.delivery.join(&binding.room, conn, sender).await;

        // 2. メンバーマップへ参加を反映
        let mut members = self.store.get_members(&binding.room).await?;
        members.join(&binding.name);
        self.store
            .set_members(&binding.room, members.clone())
            .await?;

        // 3. 本人宛リストとブロードキャストは、参加反映後の同一スナップショット
        //    から作る（読み直さない）
        let event = serde_json::to_string(&MembersEvent {
            r#type: EventType::Members,
            members: members.names(),
        })
        .unwrap();
        self.delivery.deliver_to_connection(conn, event.clone()).await;
        self.delivery.deliver_to_room(&binding.room, event).await;

        // 4. メッセージ履歴を本人にのみ配信
        let messages = self.store.get_messages(&binding.room).await?;
        let history = serde_json::to_string(&PreviousMessagesEvent {
            r#type: EventType::PreviousMessages,
            messages: messages.iter().map(ChatMessageDto::from).collect(),
        })
        .unwrap();
        self.delivery.deliver_to_connection(conn, history).await;

        tracing::info!("'{}' connected to room '{}'", binding.name, binding.room);
        Ok(())
    }
}
