//! Entities
//!
//! Room に所属する参加者の状態と、ラウンドの集計結果を表します。

use std::fmt;

use super::value_object::{ConnectionId, Nickname, Timestamp, Vote};

/// 1 接続分の参加者状態
///
/// Room の中だけで共有され、Room のロックを保持している間だけ変更されます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSession {
    pub connection_id: ConnectionId,
    pub nickname: Nickname,
    pub has_voted: bool,
    /// 直近に投じた値（次のラウンドで上書きされるまで残る）
    pub current_vote: Option<Vote>,
    pub joined_at: Timestamp,
}

impl ClientSession {
    pub fn new(connection_id: ConnectionId, nickname: Nickname, joined_at: Timestamp) -> Self {
        Self {
            connection_id,
            nickname,
            has_voted: false,
            current_vote: None,
            joined_at,
        }
    }

    pub fn cast(&mut self, vote: Vote) {
        self.current_vote = Some(vote);
        self.has_voted = true;
    }
}

/// ラウンド結果の 1 行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ballot {
    pub nickname: Nickname,
    pub vote: Option<Vote>,
}

impl fmt::Display for Ballot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.vote {
            Some(vote) => write!(f, "{} has voted {}", self.nickname, vote),
            None => write!(f, "{} has not voted", self.nickname),
        }
    }
}

/// 完了したラウンドの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round: u64,
    /// ニックネーム順
    pub ballots: Vec<Ballot>,
}

impl RoundOutcome {
    /// "alice has voted 5\nbob has voted 8\n" 形式のレポート
    pub fn report(&self) -> String {
        self.ballots
            .iter()
            .map(|ballot| format!("{ballot}\n"))
            .collect()
    }
}
