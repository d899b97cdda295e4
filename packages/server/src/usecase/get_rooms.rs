//! UseCase: Room 一覧取得処理

use std::sync::Arc;

use crate::domain::{Room, RoomRegistry};

/// Room 一覧取得のユースケース
pub struct GetRoomsUseCase {
    /// RoomRegistry（Room 保管場所の抽象化）
    registry: Arc<dyn RoomRegistry>,
}

impl GetRoomsUseCase {
    /// 新しい GetRoomsUseCase を作成
    pub fn new(registry: Arc<dyn RoomRegistry>) -> Self {
        Self { registry }
    }

    /// 全ての Room のスナップショットを作成順に返す
    pub async fn execute(&self) -> Vec<Room> {
        let rooms = self.registry.list_rooms().await;
        let mut snapshots = Vec::with_capacity(rooms.len());
        // Registry のロックは list_rooms の中で解放済み（Room のロックと同時に保持しない）
        for room in rooms {
            snapshots.push(room.snapshot().await);
        }
        snapshots
    }
}
