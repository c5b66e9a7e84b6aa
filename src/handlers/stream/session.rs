//! Per-connection audio capture state.
//!
//! A [`StreamSession`] moves between two states: idle (no capture in
//! progress) and accumulating (chunks being appended after a start token).
//! It is owned exclusively by its connection's receive loop - no other task
//! can reach it, so concurrent connections never share capture state.

use bytes::Bytes;

/// Buffered audio chunks for one streaming connection.
#[derive(Debug, Default)]
pub struct StreamSession {
    /// Decoded chunks received since the last start token.
    chunks: Vec<Bytes>,
    /// Whether a capture is in progress.
    accumulating: bool,
}

impl StreamSession {
    /// A fresh, idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a capture: any buffered chunks are discarded.
    pub fn start(&mut self) {
        self.chunks.clear();
        self.accumulating = true;
    }

    /// Whether a capture is in progress.
    pub fn is_accumulating(&self) -> bool {
        self.accumulating
    }

    /// Number of buffered chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Append a decoded chunk. Returns false when no capture is in progress,
    /// in which case the chunk is dropped.
    pub fn push_chunk(&mut self, chunk: Bytes) -> bool {
        if !self.accumulating {
            return false;
        }
        self.chunks.push(chunk);
        true
    }

    /// End the capture and take the audio to transcribe, resetting to idle.
    ///
    /// Returns `None` when nothing was buffered (including an end token with
    /// no preceding start). With `concat` set the payload is every chunk
    /// concatenated in arrival order; otherwise it is only the most recently
    /// appended chunk, matching the original backend.
    pub fn finish(&mut self, concat: bool) -> Option<Bytes> {
        self.accumulating = false;

        if self.chunks.is_empty() {
            return None;
        }

        let audio = if concat {
            Bytes::from(self.chunks.drain(..).flatten().collect::<Vec<u8>>())
        } else {
            let last = self.chunks.pop();
            self.chunks.clear();
            last?
        };

        Some(audio)
    }
}
