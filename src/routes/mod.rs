//! Router assembly for the HTTP API and the streaming WebSocket endpoint.

pub mod api;
pub mod stream;
