//! TCP voting server and read-only HTTP status API.

mod handler;
mod server;
mod signal;
pub mod state;

pub use handler::session::{SessionError, handle_session};
pub use server::{Server, router};
pub use signal::shutdown_signal;
