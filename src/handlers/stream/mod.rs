//! Streaming voice-capture session over a persistent WebSocket connection.

mod handler;
mod messages;
mod session;

pub use handler::{TEMP_FILE_PREFIX, stream_handler};
pub use messages::{END_STREAM, MessageRoute, OutgoingMessage, START_STREAM};
pub use session::StreamSession;
