//! RoomRegistry trait 定義
//!
//! ドメイン層が必要とする Room の保管場所へのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use std::sync::Arc;

use async_trait::async_trait;

use super::{error::RegistryError, room::SharedRoom, value_object::RoomId};

/// プロセス全体で 1 つだけ存在する Room の登録簿
///
/// Room は追加されるのみで、プロセスが終了するまで削除されません。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// 新しい ID で空の Room を作成して登録する
    async fn create_room(&self) -> Arc<SharedRoom>;

    /// ID で Room を検索する
    async fn find_room(&self, id: &RoomId) -> Result<Arc<SharedRoom>, RegistryError>;

    /// 登録済みの全ての Room（作成順）
    async fn list_rooms(&self) -> Vec<Arc<SharedRoom>>;
}
