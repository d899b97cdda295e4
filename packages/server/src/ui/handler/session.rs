//! Per-connection session handler.
//!
//! Drives one client through the menus:
//!
//! ```text
//! AwaitingMenuChoice → AwaitingRoomId → AwaitingNickname → InRoomIdle
//!     → Voting → RoundPending → ResultsShown → InRoomIdle ...
//! ```
//!
//! Outbound messages go through an unbounded channel drained by a pusher task,
//! so the stragglers notifier can write to the client while the session waits
//! for the round to complete.

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use huddle_shared::protocol::{Message, input_codec, message_codec};
use thiserror::Error;
use tokio::{
    io::{AsyncRead, AsyncWrite, WriteHalf},
    sync::mpsc,
};
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};

use crate::{
    domain::{ConnectionId, PusherChannel, SharedRoom},
    ui::state::AppState,
    usecase::{JoinError, RegisterError, VoteError},
};

const WELCOME_MENU: &str = "Welcome! Choose an option:\n1. Create a room\n2. Join an existing room";
const ROOM_MENU: &str = "Choose:\n1. Vote\n2. Exit";

/// Reasons a session ends other than the client choosing to exit
#[derive(Debug, Error)]
pub enum SessionError {
    /// EOF, read failure or over-long line
    #[error("Connection lost")]
    ConnectionLost,

    #[error(transparent)]
    RoomNotFound(#[from] JoinError),

    /// Anything other than 1 or 2 at the welcome menu
    #[error("Invalid option: '{0}'")]
    InvalidOption(String),

    #[error(transparent)]
    Register(#[from] RegisterError),

    #[error(transparent)]
    Vote(#[from] VoteError),
}

/// Run a full session over `stream` until the client exits or disconnects.
///
/// Every message queued for the client is flushed before this returns.
pub async fn handle_session<S>(stream: S, state: Arc<AppState>) -> Result<(), SessionError>
where
    S: AsyncRead + AsyncWrite + Send + 'static,
{
    let (reader, writer) = tokio::io::split(stream);
    let (tx, rx) = mpsc::unbounded_channel();
    let pusher = pusher_loop(rx, FramedWrite::new(writer, message_codec()));

    let session = Session {
        state,
        lines: FramedRead::new(reader, input_codec()),
        outbox: tx,
    };
    let result = session.run().await;

    // The session (and its sender) is gone, so the pusher drains and closes.
    if let Err(e) = pusher.await {
        tracing::warn!("Pusher task failed: {}", e);
    }
    result
}

/// Spawns a task that writes every message from `rx` to the client, one JSON
/// line each, and closes the write half once every sender is dropped.
fn pusher_loop<W>(
    mut rx: mpsc::UnboundedReceiver<Message>,
    mut sink: FramedWrite<WriteHalf<W>, LinesCodec>,
) -> tokio::task::JoinHandle<()>
where
    W: AsyncWrite + Send + 'static,
{
    tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            if let Err(e) = sink.send(message.to_line()).await {
                tracing::debug!("Failed to write to client: {}", e);
                break;
            }
        }
        let _ = SinkExt::<String>::close(&mut sink).await;
    })
}

struct Session<R> {
    state: Arc<AppState>,
    lines: FramedRead<R, LinesCodec>,
    outbox: PusherChannel,
}

impl<R> Session<R>
where
    R: AsyncRead + Unpin,
{
    async fn run(mut self) -> Result<(), SessionError> {
        let room = self.resolve_room().await?;
        tracing::Span::current().record("room_id", tracing::field::display(room.id()));

        self.send(Message::info("Enter your nickname: "))?;
        let nickname = self.read_line().await?;
        let connection_id = ConnectionId::generate();
        tracing::Span::current().record("connection_id", tracing::field::display(connection_id));
        self.state
            .register_participant_usecase
            .execute(&room, connection_id, &nickname)
            .await?;

        let result = self.room_loop(&room, connection_id).await;

        // Runs on every exit path once registered; a no-op after an explicit exit.
        self.state
            .leave_room_usecase
            .execute(&room, &connection_id)
            .await;
        result
    }

    /// Welcome menu: create a room or join one by its identifier.
    async fn resolve_room(&mut self) -> Result<Arc<SharedRoom>, SessionError> {
        self.send(Message::menu(WELCOME_MENU))?;
        let choice = self.read_line().await?;

        match choice.as_str() {
            "1" => {
                let room = self.state.create_room_usecase.execute().await;
                self.send(Message::success(format!(
                    "Room created. Your room UUID:{}",
                    room.id()
                )))?;
                Ok(room)
            }
            "2" => {
                self.send(Message::info("Enter your room UUID:"))?;
                let room_id = self.read_line().await?;
                match self.state.join_room_usecase.execute(&room_id).await {
                    Ok(room) => Ok(room),
                    Err(e) => {
                        self.send(Message::error(e.to_string()))?;
                        Err(e.into())
                    }
                }
            }
            _ => {
                self.send(Message::error("Invalid option"))?;
                Err(SessionError::InvalidOption(choice))
            }
        }
    }

    /// Repeating in-room menu until the client exits.
    async fn room_loop(
        &mut self,
        room: &Arc<SharedRoom>,
        connection_id: ConnectionId,
    ) -> Result<(), SessionError> {
        loop {
            self.send(Message::menu(ROOM_MENU))?;
            let choice = self.read_line().await?;

            match choice.as_str() {
                "1" => self.vote(room, connection_id).await?,
                "2" => {
                    self.state
                        .leave_room_usecase
                        .execute(room, &connection_id)
                        .await;
                    self.send(Message::warning("You have left the room."))?;
                    return Ok(());
                }
                _ => self.send(Message::warning("Invalid option."))?,
            }
        }
    }

    /// Voting flow: read a valid vote, wait for the round, show the results.
    async fn vote(
        &mut self,
        room: &Arc<SharedRoom>,
        connection_id: ConnectionId,
    ) -> Result<(), SessionError> {
        let cast_vote = self.state.cast_vote_usecase.clone();

        let round = loop {
            self.send(Message::info(cast_vote.prompt()))?;
            let raw_vote = self.read_line().await?;

            match cast_vote.execute(room, &connection_id, &raw_vote).await {
                Ok(round) => break round,
                Err(e @ VoteError::InvalidVoteChoice(_)) => {
                    self.send(Message::error(e.to_string()))?;
                }
                Err(e) => return Err(e.into()),
            }
        };

        let outcome = self
            .state
            .await_round_usecase
            .execute(room.clone(), round, self.outbox.clone())
            .await;

        self.send(Message::success("Everyone has voted"))?;
        self.send(Message::info(outcome.report()))?;
        Ok(())
    }

    fn send(&self, message: Message) -> Result<(), SessionError> {
        self.outbox
            .send(message)
            .map_err(|_| SessionError::ConnectionLost)
    }

    /// Next input line, trimmed.
    async fn read_line(&mut self) -> Result<String, SessionError> {
        match self.lines.next().await {
            Some(Ok(line)) => Ok(line.trim().to_string()),
            Some(Err(e)) => {
                tracing::debug!("Failed to read from client: {}", e);
                Err(SessionError::ConnectionLost)
            }
            None => Err(SessionError::ConnectionLost),
        }
    }
}
