//! Planning poker CLI client.
//!
//! Connects to a Huddle server, prints every server message colored by its
//! kind and sends each typed line to the server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin huddle-client -- --host 127.0.0.1
//! cargo run --bin huddle-client -- -H 192.168.0.10 -p 9000
//! ```

use clap::Parser;
use huddle_client::run_client_session;
use huddle_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "huddle-client")]
#[command(about = "Planning poker CLI client", long_about = None)]
struct Args {
    /// Server IP address or hostname
    #[arg(short = 'H', long)]
    host: String,

    /// Server port
    #[arg(short = 'p', long, default_value_t = 9000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Logs stay quiet by default so they don't interleave with the prompt
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    let args = Args::parse();

    if let Err(e) = run_client_session(&args.host, args.port).await {
        tracing::error!("Client error: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
