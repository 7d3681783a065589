//! Core domain models for the chat room engine.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::value_object::{DisplayName, MessageBody, Timestamp};

/// Member presence map for one room.
///
/// A name is "in" the room iff it is present as a key; the flag value is
/// unused beyond key existence. Insertion is last-writer-wins, so two
/// sessions asserting the same name share a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Members(HashMap<String, bool>);

impl Members {
    /// Create an empty member map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a name as present.
    pub fn join(&mut self, name: &DisplayName) {
        self.0.insert(name.as_str().to_string(), true);
    }

    /// Remove a name. Returns whether the name was present.
    pub fn leave(&mut self, name: &DisplayName) -> bool {
        self.0.remove(name.as_str()).is_some()
    }

    /// Whether a name is currently present.
    pub fn contains(&self, name: &DisplayName) -> bool {
        self.0.contains_key(name.as_str())
    }

    /// Member names, sorted for consistent ordering.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of distinct names present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no name is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One entry of a room's message log. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Display name the sender asserted
    #[serde(rename = "name")]
    pub sender: DisplayName,
    /// Message text as received
    #[serde(rename = "message")]
    pub body: MessageBody,
    /// Server receipt time
    pub timestamp: Timestamp,
}

impl ChatMessage {
    /// Create a new chat message.
    pub fn new(sender: DisplayName, body: MessageBody, timestamp: Timestamp) -> Self {
        Self {
            sender,
            body,
            timestamp,
        }
    }
}

/// A durable point-in-time copy of a room's message log.
///
/// Independent of the room's live state: exporting never clears the log,
/// and every export produces a fresh record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveRecord {
    /// Code of the room the transcript was taken from
    pub room_id: String,
    /// Full message log at export time, in append order
    pub messages: Vec<ChatMessage>,
}

impl ArchiveRecord {
    /// Create a new archive record.
    pub fn new(room_id: String, messages: Vec<ChatMessage>) -> Self {
        Self { room_id, messages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> DisplayName {
        DisplayName::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_members_new_is_empty() {
        // テスト項目: 新しいメンバーマップは空である
        // when (操作):
        let members = Members::new();

        // then (期待する結果):
        assert!(members.is_empty());
        assert_eq!(members.len(), 0);
        assert!(members.names().is_empty());
    }

    #[test]
    fn test_members_join_and_contains() {
        // テスト項目: 参加した名前はマップに存在する
        // given (前提条件):
        let mut members = Members::new();

        // when (操作):
        members.join(&name("alice"));

        // then (期待する結果):
        assert!(members.contains(&name("alice")));
        assert_eq!(members.len(), 1);
    }

    #[test]
    fn test_members_join_same_name_twice_is_single_entry() {
        // テスト項目: 同じ名前が二度参加しても 1 エントリのまま（後勝ち）
        // given (前提条件):
        let mut members = Members::new();

        // when (操作):
        members.join(&name("alice"));
        members.join(&name("alice"));

        // then (期待する結果):
        assert_eq!(members.len(), 1);
        assert_eq!(members.names(), vec!["alice".to_string()]);
    }

    #[test]
    fn test_members_leave_present_name() {
        // テスト項目: 存在する名前を退出させると true が返り、マップから消える
        // given (前提条件):
        let mut members = Members::new();
        members.join(&name("alice"));
        members.join(&name("bob"));

        // when (操作):
        let removed = members.leave(&name("alice"));

        // then (期待する結果):
        assert!(removed);
        assert!(!members.contains(&name("alice")));
        assert_eq!(members.names(), vec!["bob".to_string()]);
    }

    #[test]
    fn test_members_leave_absent_name() {
        // テスト項目: 存在しない名前の退出は false が返り、マップは変化しない
        // given (前提条件):
        let mut members = Members::new();
        members.join(&name("alice"));

        // when (操作):
        let removed = members.leave(&name("bob"));

        // then (期待する結果):
        assert!(!removed);
        assert_eq!(members.len(), 1);
    }

    #[test]
    fn test_members_names_are_sorted() {
        // テスト項目: 名前リストはソート済みで返される
        // given (前提条件):
        let mut members = Members::new();
        members.join(&name("charlie"));
        members.join(&name("alice"));
        members.join(&name("bob"));

        // when (操作):
        let names = members.names();

        // then (期待する結果):
        assert_eq!(
            names,
            vec![
                "alice".to_string(),
                "bob".to_string(),
                "charlie".to_string()
            ]
        );
    }

    #[test]
    fn test_chat_message_new() {
        // テスト項目: チャットメッセージが送信者・本文・タイムスタンプを保持する
        // when (操作):
        let message = ChatMessage::new(
            name("alice"),
            MessageBody::new("Hello!".to_string()),
            Timestamp::new(1000),
        );

        // then (期待する結果):
        assert_eq!(message.sender.as_str(), "alice");
        assert_eq!(message.body.as_str(), "Hello!");
        assert_eq!(message.timestamp.value(), 1000);
    }

    #[test]
    fn test_chat_message_wire_field_names() {
        // テスト項目: メッセージは name / message / timestamp のフィールド名で直列化される
        // given (前提条件):
        let message = ChatMessage::new(
            name("alice"),
            MessageBody::new("hi".to_string()),
            Timestamp::new(42),
        );

        // when (操作):
        let json = serde_json::to_value(&message).unwrap();

        // then (期待する結果):
        assert_eq!(json["name"], "alice");
        assert_eq!(json["message"], "hi");
        assert_eq!(json["timestamp"], 42);
    }

    #[test]
    fn test_archive_record_new() {
        // テスト項目: アーカイブレコードがルームコードとメッセージログを保持する
        // given (前提条件):
        let messages = vec![ChatMessage::new(
            name("alice"),
            MessageBody::new("hi".to_string()),
            Timestamp::new(1),
        )];

        // when (操作):
        let record = ArchiveRecord::new("ABCDEF".to_string(), messages.clone());

        // then (期待する結果):
        assert_eq!(record.room_id, "ABCDEF");
        assert_eq!(record.messages, messages);
    }
}
