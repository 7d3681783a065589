//! Code-addressed realtime chat rooms.
//!
//! Clients obtain a room code through the request API (create or join),
//! open a WebSocket bound to `(room, name)`, and exchange messages that are
//! fanned out to every member of the room. Room membership and message
//! logs live behind a shared store abstraction, and a room's transcript
//! can be archived to a long-term sink on demand.

pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod logger;
pub mod ui;
pub mod usecase;

// Re-export entry point
pub use ui::run_server;
