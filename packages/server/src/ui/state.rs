//! Shared application state.

use std::sync::Arc;

use huddle_shared::time::Clock;

use crate::{
    config::RoundTiming,
    domain::RoomRegistry,
    usecase::{
        AwaitRoundUseCase, CastVoteUseCase, CreateRoomUseCase, GetRoomDetailUseCase,
        GetRoomsUseCase, JoinRoomUseCase, LeaveRoomUseCase, RegisterParticipantUseCase,
    },
};

/// Use cases shared by every connection handler and HTTP handler
pub struct AppState {
    /// CreateRoomUseCase（Room 作成のユースケース）
    pub create_room_usecase: Arc<CreateRoomUseCase>,
    /// JoinRoomUseCase（Room 参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// RegisterParticipantUseCase（参加者登録のユースケース）
    pub register_participant_usecase: Arc<RegisterParticipantUseCase>,
    /// CastVoteUseCase（投票のユースケース）
    pub cast_vote_usecase: Arc<CastVoteUseCase>,
    /// AwaitRoundUseCase（ラウンド完了待ちのユースケース）
    pub await_round_usecase: Arc<AwaitRoundUseCase>,
    /// LeaveRoomUseCase（参加者退出のユースケース）
    pub leave_room_usecase: Arc<LeaveRoomUseCase>,
    /// GetRoomsUseCase（Room 一覧取得のユースケース）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（Room 詳細取得のユースケース）
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
}

impl AppState {
    /// Wire every use case to the given registry, clock and round timing.
    pub fn new(
        registry: Arc<dyn RoomRegistry>,
        clock: Arc<dyn Clock>,
        timing: RoundTiming,
    ) -> Self {
        Self {
            create_room_usecase: Arc::new(CreateRoomUseCase::new(registry.clone())),
            join_room_usecase: Arc::new(JoinRoomUseCase::new(registry.clone())),
            register_participant_usecase: Arc::new(RegisterParticipantUseCase::new(clock)),
            cast_vote_usecase: Arc::new(CastVoteUseCase::new()),
            await_round_usecase: Arc::new(AwaitRoundUseCase::new(timing)),
            leave_room_usecase: Arc::new(LeaveRoomUseCase::new()),
            get_rooms_usecase: Arc::new(GetRoomsUseCase::new(registry.clone())),
            get_room_detail_usecase: Arc::new(GetRoomDetailUseCase::new(registry)),
        }
    }
}
