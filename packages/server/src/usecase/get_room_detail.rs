//! UseCase: Room 詳細取得処理

use std::sync::Arc;

use crate::domain::{Room, RoomId, RoomRegistry};

/// Room 詳細取得のユースケース
pub struct GetRoomDetailUseCase {
    /// RoomRegistry（Room 保管場所の抽象化）
    registry: Arc<dyn RoomRegistry>,
}

impl GetRoomDetailUseCase {
    /// 新しい GetRoomDetailUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// ID で Room を検索し、そのスナップショットを返す
    ///
    /// 空の ID や存在しない ID の場合は `None`
    pub async fn execute(&self, raw_room_id: &str) -> Option<Room> {
        let room_id = RoomId::new(raw_room_id).ok()?;
        let room = self.registry.find_room(&room_id).await.ok()?;
        Some(room.snapshot().await)
    }
}
