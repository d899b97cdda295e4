//! Infrastructure 層
//!
//! - `registry`: RoomRegistry trait のインメモリ実装
//! - `dto`: HTTP API のレスポンス型と Domain Model からの変換

pub mod dto;
pub mod registry;
