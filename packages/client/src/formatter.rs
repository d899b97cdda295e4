//! Message formatting utilities for client display.

use crossterm::style::{Color, Stylize};
use huddle_shared::protocol::{Message, MessageKind};

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Terminal color for each message kind
    pub fn color_for(kind: MessageKind) -> Color {
        match kind {
            MessageKind::Menu => Color::Cyan,
            MessageKind::Error => Color::Red,
            MessageKind::Info => Color::Magenta,
            MessageKind::Success => Color::Green,
            MessageKind::Warning => Color::Yellow,
            MessageKind::Plain => Color::White,
        }
    }

    /// Format a decoded server message, colored by its kind
    pub fn format_message(message: &Message) -> String {
        message
            .data
            .as_str()
            .with(Self::color_for(message.kind))
            .to_string()
    }

    /// Format a raw line received from the server
    ///
    /// Lines that are not valid messages are shown as they are.
    pub fn format_line(line: &str) -> String {
        match Message::from_line(line) {
            Ok(message) => Self::format_message(&message),
            Err(e) => {
                tracing::debug!("Undecodable line from server: {}", e);
                line.to_string()
            }
        }
    }
}
