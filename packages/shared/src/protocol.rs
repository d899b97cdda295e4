//! Line-delimited JSON protocol shared by the server and the client.
//!
//! Server → client: one JSON object per line, `{"type": "<kind>", "data": "<text>"}`.
//! Client → server: one plain text line per input, trimmed by the server.

use serde::{Deserialize, Serialize};
use tokio_util::codec::LinesCodec;

/// Upper bound for a single client → server input line.
pub const MAX_LINE_LENGTH: usize = 4096;

/// Codec for client input lines; a longer line is a framing error.
pub fn input_codec() -> LinesCodec {
    LinesCodec::new_with_max_length(MAX_LINE_LENGTH)
}

/// Codec for server messages.
///
/// Reports list every member of a room, so their length is not bounded.
pub fn message_codec() -> LinesCodec {
    LinesCodec::new()
}

/// Presentation hint attached to every server message.
///
/// The server only chooses a kind when emitting; it never expects the peer to
/// echo one back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageKind {
    Menu,
    Error,
    Info,
    Success,
    Warning,
    /// No kind, rendered as plain text
    Plain,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Menu => "menu",
            MessageKind::Error => "error",
            MessageKind::Info => "info",
            MessageKind::Success => "success",
            MessageKind::Warning => "warning",
            MessageKind::Plain => "",
        }
    }
}

impl From<String> for MessageKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "menu" => MessageKind::Menu,
            "error" => MessageKind::Error,
            "info" => MessageKind::Info,
            "success" => MessageKind::Success,
            "warning" => MessageKind::Warning,
            _ => MessageKind::Plain,
        }
    }
}

impl From<MessageKind> for String {
    fn from(kind: MessageKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A single server → client message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type", default = "plain_kind")]
    pub kind: MessageKind,
    #[serde(default)]
    pub data: String,
}

fn plain_kind() -> MessageKind {
    MessageKind::Plain
}

impl Message {
    pub fn new(kind: MessageKind, data: impl Into<String>) -> Self {
        Self {
            kind,
            data: data.into(),
        }
    }

    pub fn menu(data: impl Into<String>) -> Self {
        Self::new(MessageKind::Menu, data)
    }

    pub fn error(data: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, data)
    }

    pub fn info(data: impl Into<String>) -> Self {
        Self::new(MessageKind::Info, data)
    }

    pub fn success(data: impl Into<String>) -> Self {
        Self::new(MessageKind::Success, data)
    }

    pub fn warning(data: impl Into<String>) -> Self {
        Self::new(MessageKind::Warning, data)
    }

    /// Encode as a single JSON line (without the trailing newline).
    pub fn to_line(&self) -> String {
        // Serializing a struct of two strings cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decode a JSON line received from the server.
    pub fn from_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line.trim_end())
    }
}
