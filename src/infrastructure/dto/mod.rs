//! Data transfer objects for the HTTP API and the realtime channel.

pub mod http;
pub mod websocket;
