//! UseCase 層のエラー定義
//!
//! リクエスト系操作（create / join / save）のエラーのみを持つ。
//! リアルタイム系操作（接続・切断・メッセージ送信）はガードに失敗しても
//! エラーを返さず黙って no-op になるため、ここには現れない。

use thiserror::Error;

use crate::domain::{ArchiveError, StoreError};

/// ルーム作成のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateRoomError {
    /// 表示名が未指定
    #[error("name is required")]
    NameRequired,

    /// ストア操作の失敗
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// ルーム参加のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinRoomError {
    /// 表示名が未指定
    #[error("name is required")]
    NameRequired,

    /// ルームコードが未指定・不正・未割り当て
    #[error("room does not exist")]
    RoomNotFound,

    /// ストア操作の失敗
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// トランスクリプト保存のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaveChatError {
    /// ルームコードが未割り当て
    #[error("room does not exist")]
    RoomNotFound,

    /// ストア操作の失敗
    #[error(transparent)]
    Store(#[from] StoreError),

    /// 長期保存ストアへの書き込み失敗
    #[error(transparent)]
    Archive(#[from] ArchiveError),
}
