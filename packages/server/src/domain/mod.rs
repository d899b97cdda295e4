//! Domain 層
//!
//! 投票ルームの状態と不変条件を表現します。
//!
//! - `value_object`: RoomId / ConnectionId / Nickname / Vote / Timestamp
//! - `entity`: ClientSession / Ballot / RoundOutcome
//! - `room`: Room（データ）と SharedRoom（ロックとラウンド通知）
//! - `registry`: RoomRegistry trait（Infrastructure 層が実装）

pub mod entity;
pub mod error;
pub mod registry;
pub mod room;
pub mod value_object;

use huddle_shared::protocol::Message;
use tokio::sync::mpsc;

pub use entity::{Ballot, ClientSession, RoundOutcome};
pub use error::{RegistryError, RoomError, ValueObjectError};
pub use registry::RoomRegistry;
pub use room::{Room, SharedRoom};
pub use value_object::{ConnectionId, Nickname, RoomId, RoomIdFactory, Timestamp, VOTE_TOKENS, Vote};

/// Outbound channel of a single connection.
///
/// Everything sent here is written to the client's socket by its pusher task,
/// in order.
pub type PusherChannel = mpsc::UnboundedSender<Message>;
