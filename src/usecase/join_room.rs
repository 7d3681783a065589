//! UseCase: ルーム参加処理
//!
//! 表示名とルームコードを検証してセッションバインディングを返すだけで、
//! ストアへの書き込みは行わない。メンバーシップへの反映はリアルタイム
//! チャンネル接続時（connect_member）に行われる。

use std::sync::Arc;

use crate::domain::{DisplayName, RoomCode, RoomStore, SessionBinding};

use super::error::JoinRoomError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    /// Store（データアクセス層の抽象化）
    store: Arc<dyn RoomStore>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(store: Arc<dyn RoomStore>) -> Self {
        Self { store }
    }

    /// ルーム参加を実行
    ///
    /// 形式不正なコードは割り当てられようがないため、未指定・不正・未割り当て
    /// はすべて RoomNotFound に畳み込まれる。
    pub async fn execute(&self, name: &str, code: &str) -> Result<SessionBinding, JoinRoomError> {
        let name =
            DisplayName::new(name.to_string()).map_err(|_| JoinRoomError::NameRequired)?;
        let code =
            RoomCode::new(code.to_string()).map_err(|_| JoinRoomError::RoomNotFound)?;

        if !self.store.exists(&code).await? {
            return Err(JoinRoomError::RoomNotFound);
        }

        tracing::info!("'{}' joined room '{}'", name, code);
        Ok(SessionBinding::new(code, name))
    }
}
