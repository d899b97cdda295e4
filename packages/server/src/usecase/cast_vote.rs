//! UseCase: 投票処理

use crate::domain::{ConnectionId, SharedRoom, Vote};

use super::error::VoteError;

/// 投票のユースケース
#[derive(Debug, Default)]
pub struct CastVoteUseCase;

impl CastVoteUseCase {
    /// 新しい CastVoteUseCase を作成
    pub fn new() -> Self {
        Self
    }

    /// 投票を促すプロンプト
    pub fn prompt(&self) -> String {
        format!("Select a number among: {}", Vote::choices())
    }

    /// 入力を検証して投票を記録する
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - 投票が属するラウンド番号
    /// * `Err(VoteError::InvalidVoteChoice)` - 許可されていない値（投票済みにはならない）
    pub async fn execute(
        &self,
        room: &SharedRoom,
        connection_id: &ConnectionId,
        raw_vote: &str,
    ) -> Result<u64, VoteError> {
        let vote = Vote::parse(raw_vote)?;
        let round = room.cast_vote(connection_id, vote).await?;
        tracing::debug!("{} voted in room {} (round {})", connection_id, room.id(), round);
        Ok(round)
    }
}
