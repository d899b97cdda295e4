//! InMemory RoomRegistry 実装
//!
//! ドメイン層が定義する RoomRegistry trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! ## 既知の制約
//!
//! 空になった Room も削除しないため、長時間稼働するとメモリ使用量が増え続けます。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use huddle_shared::time::Clock;
use tokio::sync::Mutex;

use crate::domain::{
    RegistryError, Room, RoomId, RoomIdFactory, RoomRegistry, SharedRoom, Timestamp,
};

/// インメモリ RoomRegistry 実装
pub struct InMemoryRoomRegistry {
    /// RoomId → Room
    rooms: Mutex<HashMap<RoomId, Arc<SharedRoom>>>,
    /// Room 作成時刻の取得元
    clock: Arc<dyn Clock>,
}

impl InMemoryRoomRegistry {
    /// 新しい空の InMemoryRoomRegistry を作成
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
            clock,
        }
    }
}

#[async_trait]
impl RoomRegistry for InMemoryRoomRegistry {
    async fn create_room(&self) -> Arc<SharedRoom> {
        let room = Arc::new(SharedRoom::new(Room::new(
            RoomIdFactory::generate(),
            Timestamp::new(self.clock.now_millis()),
        )));

        let mut rooms = self.rooms.lock().await;
        rooms.insert(room.id().clone(), room.clone());
        tracing::debug!("Room '{}' registered ({} rooms)", room.id(), rooms.len());

        room
    }

    async fn find_room(&self, id: &RoomId) -> Result<Arc<SharedRoom>, RegistryError> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::RoomNotFound(id.as_str().to_string()))
    }

    async fn list_rooms(&self) -> Vec<Arc<SharedRoom>> {
        let mut rooms: Vec<Arc<SharedRoom>> = self.rooms.lock().await.values().cloned().collect();
        rooms.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        rooms
    }
}
