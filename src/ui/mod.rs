//! UI layer: HTTP API and the realtime WebSocket channel.

pub mod handler;
pub mod runner;
mod signal;
pub mod state;

pub use runner::{build_router, run_server};
