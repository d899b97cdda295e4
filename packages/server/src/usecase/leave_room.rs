//! UseCase: 参加者退出処理
//!
//! 明示的な退出と切断時のクリーンアップの両方から呼ばれるため、冪等に動作します。

use crate::domain::{ConnectionId, SharedRoom};

/// 参加者退出のユースケース
#[derive(Debug, Default)]
pub struct LeaveRoomUseCase;

impl LeaveRoomUseCase {
    /// 新しい LeaveRoomUseCase を作成
    pub fn new() -> Self {
        Self
    }

    /// 参加者を Room から削除する
    ///
    /// # Returns
    ///
    /// 実際に削除した場合は `true`、既に存在しなかった場合は `false`
    pub async fn execute(&self, room: &SharedRoom, connection_id: &ConnectionId) -> bool {
        match room.unregister(connection_id).await {
            Some(session) => {
                tracing::info!("'{}' left room {}", session.nickname, room.id());
                true
            }
            None => false,
        }
    }
}
