//! Huddle CLI client: prints server messages in color and forwards typed lines.

pub mod error;
pub mod formatter;
pub mod session;
pub mod ui;

pub use session::run_client_session;
