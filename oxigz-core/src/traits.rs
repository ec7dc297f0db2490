//! Core traits and value types shared by every codec backend.
//!
//! [`RawStream`] is the narrow seam between a session and the codec
//! primitive. Its methods map one-to-one onto the primitive's entry points
//! and report raw status codes; interpreting those codes is the session's job.

use crate::status::Flush;
use std::ffi::CStr;

/// Direction of a codec session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Produce a gzip stream from plain bytes.
    Compress,
    /// Recover plain bytes from a gzip (or zlib) stream.
    Uncompress,
}

impl Mode {
    /// Human-readable name of the direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Compress => "compress",
            Mode::Uncompress => "uncompress",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single step call on the primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Raw status code (see [`crate::status`]).
    pub status: i32,
    /// Bytes consumed from the input slice.
    pub consumed: usize,
    /// Bytes written into the output slice.
    pub produced: usize,
}

impl Step {
    /// Whether the call neither consumed input nor produced output.
    pub fn made_no_progress(&self) -> bool {
        self.consumed == 0 && self.produced == 0
    }
}

/// A foreign bit-stream codec state block.
///
/// Implementations own exactly one codec state. The `*_init` methods must be
/// called before stepping, and each successful init must be paired with the
/// matching `*_end` call.
pub trait RawStream {
    /// Initialize encode-direction state.
    fn deflate_init(&mut self, level: i32, window_bits: i32, mem_level: i32) -> i32;

    /// Initialize decode-direction state.
    fn inflate_init(&mut self, window_bits: i32) -> i32;

    /// Compress from `input` into `output`.
    fn deflate(&mut self, input: &[u8], output: &mut [u8], flush: Flush) -> Step;

    /// Decompress from `input` into `output`.
    fn inflate(&mut self, input: &[u8], output: &mut [u8], flush: Flush) -> Step;

    /// Release encode-direction state.
    fn deflate_end(&mut self) -> i32;

    /// Release decode-direction state.
    fn inflate_end(&mut self) -> i32;

    /// Diagnostic string left by the last failing call, if any.
    fn message(&self) -> Option<&CStr>;
}

/// Compression level for the encode direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionLevel(u8);

impl CompressionLevel {
    /// No compression (store only).
    pub const NONE: Self = Self(0);
    /// Fastest compression.
    pub const FAST: Self = Self(1);
    /// Default compression (balanced).
    pub const DEFAULT: Self = Self(6);
    /// Best compression (slowest).
    pub const BEST: Self = Self(9);

    /// Create a custom compression level (0-9).
    pub const fn new(level: u8) -> Self {
        if level > 9 { Self(9) } else { Self(level) }
    }

    /// Get the level value.
    pub fn level(&self) -> u8 {
        self.0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for CompressionLevel {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}
