//! Planning poker server.
//!
//! Clients create or join a room, vote, and receive the results once every
//! member of the room has voted.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin huddle-server
//! cargo run --bin huddle-server -- --host 127.0.0.1 --port 9000 --http-port 8080
//! ```

use std::{sync::Arc, time::Duration};

use clap::Parser;
use huddle_server::{
    config::{DEFAULT_PORT, RoundTiming, ServerConfig},
    infrastructure::registry::InMemoryRoomRegistry,
    ui::{Server, state::AppState},
};
use huddle_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "huddle-server")]
#[command(about = "Planning poker server over TCP", long_about = None)]
struct Args {
    /// Host address to bind the listeners to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    host: String,

    /// Port number of the voting TCP listener
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Port number of the read-only HTTP status API (disabled if omitted)
    #[arg(long)]
    http_port: Option<u16>,

    /// Fallback interval between round completion checks, in milliseconds
    #[arg(long, default_value_t = 2000, value_parser = clap::value_parser!(u64).range(1..))]
    poll_interval_ms: u64,

    /// Interval between "Missing voters" warnings, in milliseconds
    #[arg(long, default_value_t = 10000, value_parser = clap::value_parser!(u64).range(1..))]
    straggler_interval_ms: u64,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            http_port: args.http_port,
            timing: RoundTiming {
                poll_interval: Duration::from_millis(args.poll_interval_ms),
                straggler_interval: Duration::from_millis(args.straggler_interval_ms),
            },
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::from(Args::parse());

    // Initialize dependencies in order:
    // 1. Registry
    // 2. UseCases (AppState)
    // 3. Server
    let clock = Arc::new(SystemClock);
    let registry = Arc::new(InMemoryRoomRegistry::new(clock.clone()));
    let state = Arc::new(AppState::new(registry, clock, config.timing));

    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
