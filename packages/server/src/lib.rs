//! Huddle server: planning poker rooms over a line-oriented TCP protocol.
//!
//! Layers:
//! - `domain`: rooms, members, votes and round completion
//! - `usecase`: one struct per operation, wired with `Arc<dyn RoomRegistry>`
//! - `infrastructure`: in-memory registry and HTTP DTOs
//! - `ui`: accept loop, per-connection session, HTTP status API

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
