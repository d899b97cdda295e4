//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Summary of a room, as listed by `GET /api/rooms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub id: String,
    /// Nicknames in join order
    pub participants: Vec<String>,
    /// RFC 3339 (JST)
    pub created_at: String,
}

/// Participant entry of `GET /api/rooms/{room_id}`.
///
/// Votes are never exposed; only whether the participant has voted in the
/// current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantDetailDto {
    pub nickname: String,
    pub has_voted: bool,
    pub joined_at: String,
}

/// Detail of a room, as returned by `GET /api/rooms/{room_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub id: String,
    /// Round currently open for votes
    pub round: u64,
    pub participants: Vec<ParticipantDetailDto>,
    pub created_at: String,
}
