//! Shared building blocks for the Huddle server and client.
//!
//! - `logger`: tracing subscriber setup
//! - `protocol`: line-delimited JSON messages exchanged over TCP
//! - `time`: JST timestamps and a clock abstraction

pub mod logger;
pub mod protocol;
pub mod time;
