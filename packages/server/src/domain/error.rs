//! Domain 層のエラー型

use thiserror::Error;

/// Value Object の生成エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("Room ID must not be empty")]
    EmptyRoomId,

    #[error("'{0}' is not a permitted vote")]
    InvalidVote(String),
}

/// Room のメンバー管理エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("Connection '{0}' is already registered in this room")]
    AlreadyRegistered(String),

    #[error("Connection '{0}' is not registered in this room")]
    ParticipantNotFound(String),
}

/// RoomRegistry のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Room not found: {0}")]
    RoomNotFound(String),
}
