//! Streaming codec session.
//!
//! A [`GzipSession`] owns one codec state block and drives it through the
//! lifecycle `initialize` → `process`* → `close`. Both directions share the
//! same drain loop; the [`Mode`] only decides which primitive entry points
//! are called and how the state is initialized.
//!
//! ```text
//!  Uninitialized ──initialize──▶ Ready ──process(.., last)──▶ Finished
//!        │                         │                             │
//!        └──────────close──────────┴────────────close────────────┴──▶ Closed
//! ```
//!
//! Dropping a session closes it, so the codec state is released on every
//! exit path.

use crate::config::SessionConfig;
use crate::error::{GzipError, Result};
use crate::status::{self, Flush};
use crate::traits::{Mode, RawStream, Step};
use tracing::{debug, trace};

/// Message reported when a gzip stream ends before its trailer.
pub const TRUNCATED_MESSAGE: &str = "unexpected end of gzip stream";

/// Message reported when a zlib-framed input asks for a preset dictionary.
pub const DICTIONARY_MESSAGE: &str = "preset dictionary required";

/// Lifecycle state of a [`GzipSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, codec state not yet initialized.
    Uninitialized,
    /// Codec state initialized and accepting input.
    Ready,
    /// The codec reported the end of the stream.
    Finished,
    /// Codec state released.
    Closed,
}

/// A compression or decompression session over a [`RawStream`].
pub struct GzipSession<S: RawStream> {
    mode: Mode,
    config: SessionConfig,
    stream: S,
    state: SessionState,
    chunk: Vec<u8>,
}

impl<S: RawStream + Default> GzipSession<S> {
    /// Create a session with the default configuration.
    pub fn new(mode: Mode) -> Self {
        Self::with_config(mode, SessionConfig::DEFAULT)
    }

    /// Create a session with a custom configuration.
    pub fn with_config(mode: Mode, config: SessionConfig) -> Self {
        Self::with_stream(mode, config, S::default())
    }
}

impl<S: RawStream> GzipSession<S> {
    /// Create a session over an existing, uninitialized stream.
    pub fn with_stream(mode: Mode, config: SessionConfig, stream: S) -> Self {
        Self {
            mode,
            config,
            stream,
            state: SessionState::Uninitialized,
            chunk: Vec::new(),
        }
    }

    /// Direction of this session.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Configuration used by this session.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    /// Whether the codec has reported the end of the stream.
    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// The underlying stream.
    pub fn stream(&self) -> &S {
        &self.stream
    }

    /// Initialize the codec state for this session's direction.
    pub fn initialize(&mut self) -> Result<()> {
        match self.state {
            SessionState::Uninitialized => {}
            SessionState::Closed => return Err(GzipError::stream("session is closed")),
            SessionState::Ready | SessionState::Finished => {
                return Err(GzipError::stream("session already initialized"));
            }
        }

        let window_bits = self.config.framed_window_bits(self.mode);
        let code = match self.mode {
            Mode::Compress => self.stream.deflate_init(
                i32::from(self.config.level.level()),
                window_bits,
                i32::from(self.config.mem_level),
            ),
            Mode::Uncompress => self.stream.inflate_init(window_bits),
        };

        if code != status::OK {
            let err = GzipError::from_status(code, self.stream.message());
            debug!(mode = %self.mode, code, error = %err, "codec initialization failed");
            return Err(err);
        }

        self.state = SessionState::Ready;
        debug!(
            mode = %self.mode,
            window_bits,
            chunk_size = self.config.chunk_size,
            "session initialized"
        );
        Ok(())
    }

    /// Feed `data` to the codec and return all output it produces.
    ///
    /// `is_last` marks the final chunk; the codec then completes the stream.
    /// The returned bytes belong to this call only, so callers concatenate the
    /// results of successive calls.
    pub fn process(&mut self, data: &[u8], is_last: bool) -> Result<Vec<u8>> {
        match self.state {
            SessionState::Ready => {}
            SessionState::Finished => return self.process_after_end(data),
            SessionState::Uninitialized => {
                return Err(GzipError::stream("session not initialized"));
            }
            SessionState::Closed => return Err(GzipError::stream("session is closed")),
        }

        if self.chunk.len() != self.config.chunk_size {
            self.chunk = vec![0u8; self.config.chunk_size];
        }

        let flush = Flush::for_chunk(is_last);
        let mut output = Vec::new();
        let mut pos = 0;

        loop {
            let step = self.step(&data[pos..], flush);
            pos += step.consumed;
            output.extend_from_slice(&self.chunk[..step.produced]);

            let full = step.produced == self.chunk.len();
            let pending_input = pos < data.len();
            trace!(
                mode = %self.mode,
                status = status::name(step.status),
                consumed = step.consumed,
                produced = step.produced,
                "drain step"
            );

            match step.status {
                status::STREAM_END => {
                    self.mark_finished(data.len() - pos);
                    break;
                }
                // More output is pending for the current input.
                status::OK | status::BUF_ERROR if full => continue,
                status::OK if !step.made_no_progress() && (pending_input || is_last) => continue,
                // Input drained; waiting for the next chunk.
                status::OK | status::BUF_ERROR if !is_last && !pending_input => break,
                status::OK | status::BUF_ERROR => {
                    return Err(self.stalled(is_last, pending_input));
                }
                // Only zlib framing (FDICT) can ask for this; no dictionary is ever set.
                status::NEED_DICT if self.mode == Mode::Uncompress => {
                    return Err(GzipError::data(DICTIONARY_MESSAGE));
                }
                code => return Err(GzipError::from_status(code, self.stream.message())),
            }
        }

        Ok(output)
    }

    /// Release the codec state. Calling this more than once has no effect.
    pub fn close(&mut self) {
        let code = match self.state {
            SessionState::Closed => return,
            SessionState::Uninitialized => None,
            SessionState::Ready | SessionState::Finished => Some(match self.mode {
                Mode::Compress => self.stream.deflate_end(),
                Mode::Uncompress => self.stream.inflate_end(),
            }),
        };

        if let Some(code) = code.filter(|&c| c != status::OK) {
            debug!(
                mode = %self.mode,
                status = status::name(code),
                "ignoring status from codec release"
            );
        }

        self.state = SessionState::Closed;
        self.chunk = Vec::new();
        debug!(mode = %self.mode, "session closed");
    }

    fn step(&mut self, input: &[u8], flush: Flush) -> Step {
        match self.mode {
            Mode::Compress => self.stream.deflate(input, &mut self.chunk, flush),
            Mode::Uncompress => self.stream.inflate(input, &mut self.chunk, flush),
        }
    }

    fn mark_finished(&mut self, trailing: usize) {
        self.state = SessionState::Finished;
        debug!(mode = %self.mode, "end of stream");
        if trailing > 0 {
            debug!(trailing, "ignoring bytes after end of gzip stream");
        }
    }

    fn process_after_end(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        match self.mode {
            Mode::Uncompress => {
                debug!(trailing = data.len(), "ignoring bytes after end of gzip stream");
                Ok(Vec::new())
            }
            Mode::Compress => Err(GzipError::stream("stream already finished")),
        }
    }

    /// Error for a codec that stopped making progress.
    fn stalled(&self, is_last: bool, pending_input: bool) -> GzipError {
        if self.mode == Mode::Uncompress && is_last && !pending_input {
            GzipError::data(TRUNCATED_MESSAGE)
        } else {
            GzipError::from_status(status::BUF_ERROR, self.stream.message())
        }
    }
}

impl<S: RawStream> Drop for GzipSession<S> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<S: RawStream> std::fmt::Debug for GzipSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GzipSession")
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
