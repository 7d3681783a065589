//! UseCase: メンバー切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectMemberUseCase::execute() メソッド
//! - 切断時のプレゼンス反映（メンバーマップからの削除、残存メンバーへの通知）
//!
//! ### なぜこのテストが必要か
//! - 残存メンバーに更新後のリストがブロードキャストされることを保証
//! - 名前が元々存在しない場合は書き込みも通知も起こさないことを確認
//!   （同名 2 セッションの 2 回目の切断がこのケースになる）
//!
//! ### どのような状況を想定しているか
//! - 正常系: メンバーの切断と残存者への通知
//! - エッジケース: 最後のメンバーの切断、同名セッションの二重切断
//! - 異常系: 未割り当てルームに対する切断（黙って無視）

use std::sync::Arc;

use crate::{
    domain::{DeliveryGroup, RoomStore, SessionBinding, StoreError},
    infrastructure::dto::websocket::{EventType, MembersEvent},
};

/// メンバー切断のユースケース
pub struct DisconnectMemberUseCase {
    /// Store（データアクセス層の抽象化）
    store: Arc<dyn RoomStore>,
    /// 配信グループ（トランスポートの抽象化）
    delivery: Arc<dyn DeliveryGroup>,
}

impl DisconnectMemberUseCase {
    /// 新しい DisconnectMemberUseCase を作成
    pub fn new(store: Arc<dyn RoomStore>, delivery: Arc<dyn DeliveryGroup>) -> Self {
        Self { store, delivery }
    }

    /// メンバー切断を実行
    ///
    /// 呼び出し側は先に配信グループから接続を抜いておくこと。ブロードキャスト
    /// は残存メンバーにのみ届く。ルームが存在しない、または名前がメンバーに
    /// 含まれていない場合は何も起こさない。
    pub async fn execute(&self, binding: &SessionBinding) -> Result<(), StoreError> {
        if !self.store.exists(&binding.room).await? {
            tracing::debug!(
                "disconnect for '{}' ignored: room '{}' does not exist",
                binding.name,
                binding.room
            );
            return Ok(());
        }

        let mut members = self.store.get_members(&binding.room).await?;
        if !members.leave(&binding.name) {
            tracing::debug!(
                "disconnect for '{}' ignored: not present in room '{}'",
                binding.name,
                binding.room
            );
            return Ok(());
        }
        self.store
            .set_members(&binding.room, members.clone())
            .await?;

        let event = serde_json::to_string(&MembersEvent {
            r#type: EventType::Members,
            members: members.names(),
        })
        .unwrap();
        self.delivery.deliver_to_room(&binding.room, event).await;

        tracing::info!(
            "'{}' disconnected from room '{}'",
            binding.name,
            binding.room
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ConnectionIdFactory, DisplayName, RoomCode, RoomCodeFactory},
        infrastructure::{delivery::ChannelDeliveryGroup, repository::InMemoryRoomStore},
        usecase::connect_member::ConnectMemberUseCase,
    };
    use tokio::sync::mpsc;

    fn create_test_store() -> Arc<InMemoryRoomStore> {
        Arc::new(InMemoryRoomStore::new())
    }

    fn create_test_delivery() -> Arc<ChannelDeliveryGroup> {
        Arc::new(ChannelDeliveryGroup::new())
    }

    async fn create_test_room(store: &Arc<InMemoryRoomStore>) -> RoomCode {
        let code = RoomCodeFactory::generate();
        store.create_room(&code).await.unwrap();
        code
    }

    fn binding(room: &RoomCode, name: &str) -> SessionBinding {
        SessionBinding::new(
            room.clone(),
            DisplayName::new(name.to_string()).unwrap(),
        )
    }

    fn parse(event: String) -> serde_json::Value {
        serde_json::from_str(&event).unwrap()
    }

    #[tokio::test]
    async fn test_disconnect_broadcasts_remaining_members() {
        // テスト項目: alice, bob 接続後に alice が切断すると、bob に ["bob"] が届く
        // given (前提条件):
        let store = create_test_store();
        let delivery = create_test_delivery();
        let room = create_test_room(&store).await;
        let connect = ConnectMemberUseCase::new(store.clone(), delivery.clone());
        let disconnect = DisconnectMemberUseCase::new(store.clone(), delivery.clone());

        let conn_alice = ConnectionIdFactory::generate();
        let conn_bob = ConnectionIdFactory::generate();
        let (tx_alice, mut rx_alice) = mpsc::unbounded_channel();
        let (tx_bob, mut rx_bob) = mpsc::unbounded_channel();
        connect
            .execute(&binding(&room, "alice"), &conn_alice, tx_alice)
            .await
            .unwrap();
        connect
            .execute(&binding(&room, "bob"), &conn_bob, tx_bob)
            .await
            .unwrap();
        while rx_alice.try_recv().is_ok() {}
        while rx_bob.try_recv().is_ok() {}

        // when (操作): alice の接続がグループから抜け、切断処理が走る
        delivery.leave(&conn_alice).await;
        disconnect.execute(&binding(&room, "alice")).await.unwrap();

        // then (期待する結果):
        let event = parse(rx_bob.try_recv().unwrap());
        assert_eq!(event["type"], "members");
        assert_eq!(event["members"], serde_json::json!(["bob"]));
        assert!(rx_alice.try_recv().is_err());

        let members = store.get_members(&room).await.unwrap();
        assert_eq!(members.names(), vec!["bob".to_string()]);
    }

    #[tokio::test]
    async fn test_disconnect_last_member_writes_back_empty_map() {
        // テスト項目: 最後のメンバーの切断でメンバーマップが空になる
        // given (前提条件):
        let store = create_test_store();
        let delivery = create_test_delivery();
        let room = create_test_room(&store).await;
        let connect = ConnectMemberUseCase::new(store.clone(), delivery.clone());
        let disconnect = DisconnectMemberUseCase::new(store.clone(), delivery.clone());

        let conn = ConnectionIdFactory::generate();
        let (tx, _rx) = mpsc::unbounded_channel();
        connect
            .execute(&binding(&room, "alice"), &conn, tx)
            .await
            .unwrap();

        // when (操作):
        delivery.leave(&conn).await;
        disconnect.execute(&binding(&room, "alice")).await.unwrap();

        // then (期待する結果):
        assert!(store.get_members(&room).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_disconnect_absent_name_is_silent() {
        // テスト項目: メンバーに存在しない名前の切断は書き込みも通知も起こさない
        // given (前提条件):
        let store = create_test_store();
        let delivery = create_test_delivery();
        let room = create_test_room(&store).await;
        let connect = ConnectMemberUseCase::new(store.clone(), delivery.clone());
        let disconnect = DisconnectMemberUseCase::new(store.clone(), delivery.clone());

        let conn_alice = ConnectionIdFactory::generate();
        let (tx_alice, mut rx_alice) = mpsc::unbounded_channel();
        connect
            .execute(&binding(&room, "alice"), &conn_alice, tx_alice)
            .await
            .unwrap();
        while rx_alice.try_recv().is_ok() {}

        // when (操作): 参加していない bob の切断
        let result = disconnect.execute(&binding(&room, "bob")).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(rx_alice.try_recv().is_err());
        assert_eq!(
            store.get_members(&room).await.unwrap().names(),
            vec!["alice".to_string()]
        );
    }

    #[tokio::test]
    async fn test_disconnect_duplicate_name_second_time_is_silent() {
        // テスト項目: 同名 2 セッションの切断は、1 回目で名前が消えて通知され、
        //             2 回目は黙って no-op になる
        // given (前提条件):
        let store = create_test_store();
        let delivery = create_test_delivery();
        let room = create_test_room(&store).await;
        let connect = ConnectMemberUseCase::new(store.clone(), delivery.clone());
        let disconnect = DisconnectMemberUseCase::new(store.clone(), delivery.clone());

        let conn1 = ConnectionIdFactory::generate();
        let conn2 = ConnectionIdFactory::generate();
        let conn_bob = ConnectionIdFactory::generate();
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();
        let (tx_bob, mut rx_bob) = mpsc::unbounded_channel();
        connect
            .execute(&binding(&room, "alice"), &conn1, tx1)
            .await
            .unwrap();
        connect
            .execute(&binding(&room, "alice"), &conn2, tx2)
            .await
            .unwrap();
        connect
            .execute(&binding(&room, "bob"), &conn_bob, tx_bob)
            .await
            .unwrap();
        while rx_bob.try_recv().is_ok() {}

        // when (操作): alice の 1 つ目のセッションが切断
        delivery.leave(&conn1).await;
        disconnect.execute(&binding(&room, "alice")).await.unwrap();

        // then (期待する結果): bob に ["bob"] が届く（alice は名前ごと消える）
        let event = parse(rx_bob.try_recv().unwrap());
        assert_eq!(event["members"], serde_json::json!(["bob"]));

        // when (操作): alice の 2 つ目のセッションも切断
        delivery.leave(&conn2).await;
        disconnect.execute(&binding(&room, "alice")).await.unwrap();

        // then (期待する結果): 2 回目の通知は発生しない
        assert!(rx_bob.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_disconnect_missing_room_is_noop() {
        // テスト項目: 未割り当てルームに対する切断は何も起こさない
        // given (前提条件):
        let store = create_test_store();
        let delivery = create_test_delivery();
        let disconnect = DisconnectMemberUseCase::new(store.clone(), delivery.clone());
        let ghost_room = RoomCode::new("ZZZZZZ".to_string()).unwrap();

        // when (操作):
        let result = disconnect.execute(&binding(&ghost_room, "alice")).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(!store.exists(&ghost_room).await.unwrap());
    }
}
