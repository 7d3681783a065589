//! UseCase: トランスクリプト保存処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SaveChatUseCase::execute() メソッド
//! - ルームのメッセージログ全件を長期保存ストアへスナップショットする処理
//!
//! ### なぜこのテストが必要か
//! - レコードがログ全件を追記順で含むことを保証
//! - 保存がルームの生きた状態を一切変更しないことを確認
//! - 繰り返し保存すると独立したレコードが増える（更新ではない）ことを保証
//! - 長期保存ストアの書き込み失敗が SaveChatError として表面化することを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系: ログ付きルームの保存、二重保存
//! - 異常系: 未割り当てルームの保存、長期保存ストアの障害

use std::sync::Arc;

use crate::domain::{ArchiveId, ArchiveRecord, ArchiveStore, RoomCode, RoomStore};

use super::error::SaveChatError;

/// トランスクリプト保存のユースケース
pub struct SaveChatUseCase {
    /// Store（データアクセス層の抽象化）
    store: Arc<dyn RoomStore>,
    /// 長期保存ストア（書き込み専用シンク）
    archive: Arc<dyn ArchiveStore>,
}

impl SaveChatUseCase {
    /// 新しい SaveChatUseCase を作成
    pub fn new(store: Arc<dyn RoomStore>, archive: Arc<dyn ArchiveStore>) -> Self {
        Self { store, archive }
    }

    /// トランスクリプト保存を実行
    ///
    /// 保存はスナップショットであり、ルームの members / messages には触れない。
    /// 何度でも呼び出せて、そのたびに独立したレコードが 1 件できる。
    pub async fn execute(&self, code: &RoomCode) -> Result<ArchiveId, SaveChatError> {
        if !self.store.exists(code).await? {
            return Err(SaveChatError::RoomNotFound);
        }

        let messages = self.store.get_messages(code).await?;
        let record = ArchiveRecord::new(code.as_str().to_string(), messages);
        let id = self.archive.persist(record).await?;

        tracing::info!("room '{}' transcript archived as '{}'", code, id);
        Ok(id)
    }
}
