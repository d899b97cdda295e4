//! UseCase: Room 作成処理

use std::sync::Arc;

use crate::domain::{RoomRegistry, SharedRoom};

/// Room 作成のユースケース
pub struct CreateRoomUseCase {
    /// RoomRegistry（Room 保管場所の抽象化）
    registry: Arc<dyn RoomRegistry>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// 新しい Room を作成して登録する（失敗しない）
    pub async fn execute(&self) -> Arc<SharedRoom> {
        let room = self.registry.create_room().await;
        tracing::info!("Room {} created", room.id());
        room
    }
}
