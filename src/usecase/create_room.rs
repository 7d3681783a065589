//! UseCase: ルーム作成処理
//!
//! ランダムなルームコードを生成し、未割り当てであればその場で確保する。
//! コードの生成と割り当ては store の create-if-absent 1 回で行われるため、
//! 同時作成でも同じコードが二重に割り当てられることはない。

use std::sync::Arc;

use crate::domain::{DisplayName, RoomCodeFactory, RoomStore, SessionBinding};

use super::error::CreateRoomError;

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    /// Store（データアクセス層の抽象化）
    store: Arc<dyn RoomStore>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(store: Arc<dyn RoomStore>) -> Self {
        Self { store }
    }

    /// ルーム作成を実行
    ///
    /// # Arguments
    ///
    /// * `name` - 作成者の表示名（未検証の生文字列）
    ///
    /// # Returns
    ///
    /// * `Ok(SessionBinding)` - 確保したルームコードと表示名の組
    /// * `Err(CreateRoomError)` - 表示名未指定またはストア障害
    pub async fn execute(&self, name: &str) -> Result<SessionBinding, CreateRoomError> {
        let name = DisplayName::new(name.to_string())
            .map_err(|_| CreateRoomError::NameRequired)?;

        // 衝突したら生成し直す。26^6 通りあるため実質的に即座に確保できる。
        let code = loop {
            let candidate = RoomCodeFactory::generate();
            if self.store.create_room(&candidate).await? {
                break candidate;
            }
            tracing::debug!("room code '{}' already allocated, retrying", candidate);
        };

        tracing::info!("room '{}' created by '{}'", code, name);
        Ok(SessionBinding::new(code, name))
    }
}
