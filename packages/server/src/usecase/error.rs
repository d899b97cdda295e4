//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::{RegistryError, RoomError, ValueObjectError};

/// Room 参加時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    #[error("Room not found")]
    RoomNotFound(String),
}

impl From<RegistryError> for JoinError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::RoomNotFound(id) => JoinError::RoomNotFound(id),
        }
    }
}

/// 参加者登録時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("Connection '{0}' is already registered")]
    AlreadyRegistered(String),
}

/// 投票時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
    /// 許可されていない値（プロンプトを繰り返す）
    #[error("Invalid choice.")]
    InvalidVoteChoice(String),

    #[error("Connection '{0}' is not registered in the room")]
    ParticipantNotFound(String),
}

impl From<ValueObjectError> for VoteError {
    fn from(error: ValueObjectError) -> Self {
        match error {
            ValueObjectError::InvalidVote(raw) => VoteError::InvalidVoteChoice(raw),
            other => VoteError::InvalidVoteChoice(other.to_string()),
        }
    }
}

impl From<RoomError> for VoteError {
    fn from(error: RoomError) -> Self {
        match error {
            RoomError::ParticipantNotFound(id) | RoomError::AlreadyRegistered(id) => {
                VoteError::ParticipantNotFound(id)
            }
        }
    }
}
