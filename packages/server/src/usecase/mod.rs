//! UseCase 層
//!
//! 接続ハンドラや HTTP ハンドラから呼ばれるアプリケーションの操作を定義します。
//! 各 UseCase は Domain 層の型と RoomRegistry trait のみに依存します。

pub mod await_round;
pub mod cast_vote;
pub mod create_room;
pub mod error;
pub mod get_room_detail;
pub mod get_rooms;
pub mod join_room;
pub mod leave_room;
pub mod register_participant;

pub use await_round::AwaitRoundUseCase;
pub use cast_vote::CastVoteUseCase;
pub use create_room::CreateRoomUseCase;
pub use error::{JoinError, RegisterError, VoteError};
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use register_participant::RegisterParticipantUseCase;
