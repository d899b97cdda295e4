//! Conversion logic from domain entities to HTTP DTOs.

use huddle_shared::time::timestamp_to_jst_rfc3339;

use crate::domain::{ClientSession, Room};
use crate::infrastructure::dto::http::{ParticipantDetailDto, RoomDetailDto, RoomSummaryDto};

impl From<&Room> for RoomSummaryDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            participants: room
                .members()
                .into_iter()
                .map(|member| member.nickname.as_str().to_string())
                .collect(),
            created_at: timestamp_to_jst_rfc3339(room.created_at.value()),
        }
    }
}

impl From<&ClientSession> for ParticipantDetailDto {
    fn from(session: &ClientSession) -> Self {
        Self {
            nickname: session.nickname.as_str().to_string(),
            has_voted: session.has_voted,
            joined_at: timestamp_to_jst_rfc3339(session.joined_at.value()),
        }
    }
}

impl From<&Room> for RoomDetailDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            round: room.round(),
            participants: room
                .members()
                .into_iter()
                .map(ParticipantDetailDto::from)
                .collect(),
            created_at: timestamp_to_jst_rfc3339(room.created_at.value()),
        }
    }
}
