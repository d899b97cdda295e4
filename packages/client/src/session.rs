//! TCP client session management.

use futures_util::{SinkExt, StreamExt};
use huddle_shared::protocol::{MAX_LINE_LENGTH, Message, input_codec, message_codec};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::{net::TcpStream, sync::mpsc};
use tokio_util::codec::{FramedRead, FramedWrite};

use crate::{
    error::ClientError,
    formatter::MessageFormatter,
    ui::{PROMPT, redisplay_prompt},
};

/// Run the client session until the server closes the connection or the
/// user quits with Ctrl+C / Ctrl+D.
pub async fn run_client_session(host: &str, port: u16) -> Result<(), ClientError> {
    let addr = format!("{}:{}", host, port);
    let stream = TcpStream::connect(&addr)
        .await
        .map_err(|source| ClientError::ConnectFailed {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("Connected to {}", addr);

    let (reader, writer) = stream.into_split();
    let mut lines = FramedRead::new(reader, message_codec());
    let mut sink = FramedWrite::new(writer, input_codec());

    // Spawn a task to print incoming messages
    let mut read_task = tokio::spawn(async move {
        while let Some(line) = lines.next().await {
            match line {
                Ok(line) => {
                    println!("\r{}", MessageFormatter::format_line(&line));
                    redisplay_prompt();
                }
                Err(e) => {
                    tracing::warn!("Read error: {}", e);
                    break;
                }
            }
        }
    });

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    std::thread::spawn(move || read_input(input_tx));

    // Spawn a task to forward user input to the server
    let mut write_task = tokio::spawn(async move {
        while let Some(line) = input_rx.recv().await {
            // The server drops connections that send longer lines.
            if exceeds_input_limit(&line) {
                let message =
                    Message::error(format!("Input too long (max {} bytes)", MAX_LINE_LENGTH));
                println!("\r{}", MessageFormatter::format_message(&message));
                redisplay_prompt();
                continue;
            }
            if let Err(e) = sink.send(line).await {
                return Err(ClientError::ConnectionError(e.to_string()));
            }
        }
        Ok(())
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut read_task => {
            write_task.abort();
            println!("\rDisconnected from server.");
            Ok(())
        }
        write_result = &mut write_task => {
            read_task.abort();
            write_result.map_err(|e| ClientError::ConnectionError(e.to_string()))?
        }
    }
}

fn exceeds_input_limit(line: &str) -> bool {
    line.len() > MAX_LINE_LENGTH
}

/// Read lines from the terminal until Ctrl+C / Ctrl+D.
///
/// Empty lines are forwarded too (an empty nickname is valid).
fn read_input(input_tx: mpsc::UnboundedSender<String>) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to initialize readline: {}", e);
            return;
        }
    };

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str()).ok();
                }
                if input_tx.send(line).is_err() {
                    // Channel closed, exit thread
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                tracing::info!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                tracing::info!("EOF");
                break;
            }
            Err(err) => {
                tracing::error!("Readline error: {}", err);
                break;
            }
        }
    }
}
