//! UseCase: 参加者登録処理

use std::sync::Arc;

use huddle_shared::time::Clock;

use crate::domain::{ClientSession, ConnectionId, Nickname, RoomError, SharedRoom, Timestamp};

use super::error::RegisterError;

/// 参加者登録のユースケース
pub struct RegisterParticipantUseCase {
    /// 参加時刻の取得元
    clock: Arc<dyn Clock>,
}

impl RegisterParticipantUseCase {
    /// 新しい RegisterParticipantUseCase を作成
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// ClientSession を作成して Room に登録する
    ///
    /// ニックネームは trim のみ行い、空文字列も受け付ける。
    pub async fn execute(
        &self,
        room: &SharedRoom,
        connection_id: ConnectionId,
        raw_nickname: &str,
    ) -> Result<Nickname, RegisterError> {
        let nickname = Nickname::new(raw_nickname);
        let session = ClientSession::new(
            connection_id,
            nickname.clone(),
            Timestamp::new(self.clock.now_millis()),
        );

        room.register(session).await.map_err(|e| match e {
            RoomError::AlreadyRegistered(id) | RoomError::ParticipantNotFound(id) => {
                RegisterError::AlreadyRegistered(id)
            }
        })?;

        tracing::info!("'{}' joined room {}", nickname, room.id());
        Ok(nickname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Room, RoomIdFactory};
    use huddle_shared::time::FixedClock;

    fn create_test_room() -> SharedRoom {
        SharedRoom::new(Room::new(RoomIdFactory::generate(), Timestamp::new(0)))
    }

    #[tokio::test]
    async fn test_register_participant_success() {
        // テスト項目: ニックネームが trim されて未投票の参加者として登録される
        // given (前提条件):
        let room = create_test_room();
        let usecase = RegisterParticipantUseCase::new(Arc::new(FixedClock::new(42)));
        let connection_id = ConnectionId::generate();

        // when (操作):
        let nickname = usecase.execute(&room, connection_id, "  alice\t").await;

        // then (期待する結果):
        assert_eq!(nickname.unwrap().as_str(), "alice");
        let snapshot = room.snapshot().await;
        let members = snapshot.members();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].connection_id, connection_id);
        assert_eq!(members[0].joined_at, Timestamp::new(42));
        assert!(!members[0].has_voted);
    }

    #[tokio::test]
    async fn test_register_accepts_empty_nickname() {
        // テスト項目: 空のニックネームでも登録できる
        // given (前提条件):
        let room = create_test_room();
        let usecase = RegisterParticipantUseCase::new(Arc::new(FixedClock::new(0)));

        // when (操作):
        let result = usecase.execute(&room, ConnectionId::generate(), "   ").await;

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "");
        assert_eq!(room.member_count().await, 1);
    }

    #[tokio::test]
    async fn test_register_same_connection_twice_fails() {
        // テスト項目: 同じ接続の二重登録はエラーになる
        // given (前提条件):
        let room = create_test_room();
        let usecase = RegisterParticipantUseCase::new(Arc::new(FixedClock::new(0)));
        let connection_id = ConnectionId::generate();
        usecase.execute(&room, connection_id, "alice").await.unwrap();

        // when (操作):
        let result = usecase.execute(&room, connection_id, "alice").await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RegisterError::AlreadyRegistered(connection_id.to_string()))
        );
        assert_eq!(room.member_count().await, 1);
    }
}
