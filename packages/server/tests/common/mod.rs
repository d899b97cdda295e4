//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use futures_util::StreamExt;
use huddle_server::{
    config::RoundTiming,
    infrastructure::registry::InMemoryRoomRegistry,
    ui::{SessionError, handle_session, state::AppState},
};
use huddle_shared::{
    protocol::{Message, MessageKind, message_codec},
    time::SystemClock,
};
use tokio::{
    io::{AsyncRead, AsyncWrite, AsyncWriteExt, ReadHalf, WriteHalf},
    task::JoinHandle,
};
use tokio_util::codec::{FramedRead, LinesCodec};

/// Upper bound for a single expected message
const RECV_TIMEOUT: Duration = Duration::from_secs(5);

pub const ROOM_MENU: &str = "Choose:\n1. Vote\n2. Exit";
pub const VOTE_PROMPT: &str = "Select a number among: 0, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89";

/// Build the application state backed by a fresh in-memory registry.
pub fn create_state(timing: RoundTiming) -> Arc<AppState> {
    let clock = Arc::new(SystemClock);
    let registry = Arc::new(InMemoryRoomRegistry::new(clock.clone()));
    Arc::new(AppState::new(registry, clock, timing))
}

/// Round timing where the stragglers warning never fires during a test
pub fn quiet_timing() -> RoundTiming {
    RoundTiming {
        poll_interval: Duration::from_millis(50),
        straggler_interval: Duration::from_secs(600),
    }
}

/// Client side of a session
pub struct TestClient<S> {
    lines: FramedRead<ReadHalf<S>, LinesCodec>,
    writer: WriteHalf<S>,
}

impl<S> TestClient<S>
where
    S: AsyncRead + AsyncWrite,
{
    pub fn new(stream: S) -> Self {
        let (reader, writer) = tokio::io::split(stream);
        Self {
            lines: FramedRead::new(reader, message_codec()),
            writer,
        }
    }

    /// Send one input line
    pub async fn send(&mut self, line: &str) {
        self.writer
            .write_all(format!("{line}\n").as_bytes())
            .await
            .expect("Failed to write to server");
    }

    /// Receive the next message
    pub async fn recv(&mut self) -> Message {
        let line = tokio::time::timeout(RECV_TIMEOUT, self.lines.next())
            .await
            .expect("Timed out waiting for a message")
            .expect("Connection closed")
            .expect("Failed to read line");
        Message::from_line(&line).expect("Server sent invalid JSON")
    }

    /// Receive the next message and check its kind and text
    pub async fn expect(&mut self, kind: MessageKind, data: &str) {
        let message = self.recv().await;
        assert_eq!(message.kind, kind, "unexpected message: {message:?}");
        assert_eq!(message.data, data);
    }

    /// Receive the next message that is not a stragglers warning
    pub async fn recv_skipping_warnings(&mut self) -> Message {
        loop {
            let message = self.recv().await;
            if !message.data.starts_with("Missing voters: ") {
                return message;
            }
        }
    }

    /// Wait until the server closes the connection
    pub async fn expect_closed(&mut self) {
        let next = tokio::time::timeout(RECV_TIMEOUT, self.lines.next())
            .await
            .expect("Timed out waiting for the connection to close");
        assert!(next.is_none(), "expected EOF, got {next:?}");
    }

    /// Create a room and register; returns the room identifier
    pub async fn create_room(&mut self, nickname: &str) -> String {
        self.expect(
            MessageKind::Menu,
            "Welcome! Choose an option:\n1. Create a room\n2. Join an existing room",
        )
        .await;
        self.send("1").await;

        let created = self.recv().await;
        assert_eq!(created.kind, MessageKind::Success);
        let room_id = created
            .data
            .strip_prefix("Room created. Your room UUID:")
            .expect("unexpected room creation message")
            .to_string();

        self.register(nickname).await;
        room_id
    }

    /// Join an existing room and register
    pub async fn join_room(&mut self, room_id: &str, nickname: &str) {
        self.recv().await;
        self.send("2").await;
        self.expect(MessageKind::Info, "Enter your room UUID:").await;
        self.send(room_id).await;
        self.register(nickname).await;
    }

    async fn register(&mut self, nickname: &str) {
        self.expect(MessageKind::Info, "Enter your nickname: ").await;
        self.send(nickname).await;
        self.expect(MessageKind::Menu, ROOM_MENU).await;
    }

    /// Choose "Vote" and cast `vote` (the round result is not consumed)
    pub async fn vote(&mut self, vote: &str) {
        self.send("1").await;
        self.expect(MessageKind::Info, VOTE_PROMPT).await;
        self.send(vote).await;
    }
}

/// Start a session over an in-memory stream and return its client side.
pub fn connect(
    state: &Arc<AppState>,
) -> (
    TestClient<tokio::io::DuplexStream>,
    JoinHandle<Result<(), SessionError>>,
) {
    let (client, server) = tokio::io::duplex(64 * 1024);
    let session = tokio::spawn(handle_session(server, state.clone()));
    (TestClient::new(client), session)
}
