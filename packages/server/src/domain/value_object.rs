//! Value Objects
//!
//! 不変で、値によって同一性が決まるドメインの基本型です。

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use super::error::ValueObjectError;

/// 投票で使用できるトークン（順序付き）
///
/// 数値としての比較は行わず、文字列の完全一致のみを受け付けます。
pub const VOTE_TOKENS: [&str; 11] = ["0", "1", "2", "3", "5", "8", "13", "21", "34", "55", "89"];

/// Room の識別子
///
/// クライアントにはそのまま渡され、参加時にもそのまま受け取る不透明な文字列。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoomId(String);

impl RoomId {
    /// 前後の空白を取り除いた上で RoomId を生成する
    pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::EmptyRoomId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// RoomId の生成器（UUID v4）
pub struct RoomIdFactory;

impl RoomIdFactory {
    pub fn generate() -> RoomId {
        RoomId(Uuid::new_v4().to_string())
    }
}

/// 接続ごとに割り当てられる識別子
///
/// トランスポートのハンドルではなく、登録時に払い出す不透明な値。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 参加者のニックネーム
///
/// 前後の空白を取り除くだけで、それ以外の検証は行わない（空文字列も許可）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Nickname(String);

impl Nickname {
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 1 ラウンド分の投票値
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Vote(&'static str);

impl Vote {
    /// 入力文字列が許可されたトークンと完全一致する場合のみ Vote を返す
    pub fn parse(value: &str) -> Result<Self, ValueObjectError> {
        VOTE_TOKENS
            .iter()
            .find(|token| **token == value)
            .map(|token| Self(*token))
            .ok_or_else(|| ValueObjectError::InvalidVote(value.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// "0, 1, 2, ..." 形式の選択肢一覧
    pub fn choices() -> String {
        VOTE_TOKENS.join(", ")
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Unix タイムスタンプ（ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_is_trimmed() {
        // テスト項目: RoomId は前後の空白が取り除かれる
        // given (前提条件):
        let raw = "  3f2a-room \n";

        // when (操作):
        let room_id = RoomId::new(raw).unwrap();

        // then (期待する結果):
        assert_eq!(room_id.as_str(), "3f2a-room");
    }

    #[test]
    fn test_empty_room_id_is_rejected() {
        // テスト項目: 空白のみの RoomId はエラーになる
        // given (前提条件):
        let raw = "   ";

        // when (操作):
        let result = RoomId::new(raw);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyRoomId));
    }

    #[test]
    fn test_generated_room_ids_are_unique_uuids() {
        // テスト項目: 生成される RoomId は UUID 形式で重複しない
        // given (前提条件):

        // when (操作):
        let first = RoomIdFactory::generate();
        let second = RoomIdFactory::generate();

        // then (期待する結果):
        assert_ne!(first, second);
        assert!(Uuid::parse_str(first.as_str()).is_ok());
    }

    #[test]
    fn test_nickname_is_trimmed_and_may_be_empty() {
        // テスト項目: Nickname は trim され、空文字列も許可される
        // given (前提条件):

        // when (操作):
        let alice = Nickname::new("  alice ");
        let empty = Nickname::new("   ");

        // then (期待する結果):
        assert_eq!(alice.as_str(), "alice");
        assert_eq!(empty.as_str(), "");
    }

    #[test]
    fn test_vote_accepts_only_exact_tokens() {
        // テスト項目: 許可されたトークンとの完全一致のみ受け付ける（数値変換しない）
        // given (前提条件):

        // when (操作) / then (期待する結果):
        assert_eq!(Vote::parse("13").unwrap().as_str(), "13");
        assert_eq!(
            Vote::parse("4"),
            Err(ValueObjectError::InvalidVote("4".to_string()))
        );
        assert!(Vote::parse("05").is_err());
        assert!(Vote::parse("8.0").is_err());
        assert!(Vote::parse("").is_err());
    }

    #[test]
    fn test_vote_choices_are_listed_in_order() {
        // テスト項目: 選択肢が定義順にカンマ区切りで列挙される
        // given (前提条件):

        // when (操作):
        let choices = Vote::choices();

        // then (期待する結果):
        assert_eq!(choices, "0, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89");
    }
}
