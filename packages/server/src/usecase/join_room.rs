//! UseCase: Room 参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - クライアントが入力した ID による Room の検索
//!
//! ### どのような状況を想定しているか
//! - 正常系：存在する ID（前後に空白があっても良い）
//! - 異常系：存在しない ID、空の ID（どちらも RoomNotFound）

use std::sync::Arc;

use crate::domain::{RoomId, RoomRegistry, SharedRoom};

use super::error::JoinError;

/// Room 参加のユースケース
pub struct JoinRoomUseCase {
    /// RoomRegistry（Room 保管場所の抽象化）
    registry: Arc<dyn RoomRegistry>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// クライアントから受け取った ID で Room を検索する
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<SharedRoom>)` - 参加先の Room
    /// * `Err(JoinError::RoomNotFound)` - 該当する Room が無い（再試行はしない）
    pub async fn execute(&self, raw_room_id: &str) -> Result<Arc<SharedRoom>, JoinError> {
        let room_id = RoomId::new(raw_room_id)
            .map_err(|_| JoinError::RoomNotFound(raw_room_id.to_string()))?;
        let room = self.registry.find_room(&room_id).await?;
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::MockRoomRegistry;
    use crate::domain::{RegistryError, Room, RoomIdFactory, Timestamp};
    use mockall::predicate::eq;

    fn create_shared_room() -> Arc<SharedRoom> {
        Arc::new(SharedRoom::new(Room::new(
            RoomIdFactory::generate(),
            Timestamp::new(0),
        )))
    }

    #[tokio::test]
    async fn test_join_existing_room() {
        // テスト項目: 存在する ID（前後の空白付き）で Room に参加できる
        // given (前提条件):
        let room = create_shared_room();
        let room_id = room.id().clone();
        let returned = room.clone();
        let mut registry = MockRoomRegistry::new();
        registry
            .expect_find_room()
            .with(eq(room_id.clone()))
            .times(1)
            .returning(move |_| Ok(returned.clone()));
        let usecase = JoinRoomUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase.execute(&format!("  {} ", room_id)).await;

        // then (期待する結果):
        assert!(Arc::ptr_eq(&result.unwrap(), &room));
    }

    #[tokio::test]
    async fn test_join_unknown_room_fails() {
        // テスト項目: 存在しない ID では RoomNotFound になる
        // given (前提条件):
        let mut registry = MockRoomRegistry::new();
        registry
            .expect_find_room()
            .times(1)
            .returning(|id| Err(RegistryError::RoomNotFound(id.as_str().to_string())));
        let usecase = JoinRoomUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase.execute("deadbeef").await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            JoinError::RoomNotFound("deadbeef".to_string())
        );
    }

    #[tokio::test]
    async fn test_join_with_empty_id_does_not_hit_registry() {
        // テスト項目: 空の ID は Registry を検索せずに RoomNotFound になる
        // given (前提条件):
        let mut registry = MockRoomRegistry::new();
        registry.expect_find_room().times(0);
        let usecase = JoinRoomUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase.execute("   ").await;

        // then (期待する結果):
        assert!(matches!(result, Err(JoinError::RoomNotFound(_))));
    }
}
