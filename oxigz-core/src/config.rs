//! Session configuration.

use crate::traits::{CompressionLevel, Mode};

/// Default size of the output staging buffer (16 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 16 * 1024;

/// Largest LZ77 window, as log2 of its size.
pub const MAX_WINDOW_BITS: u8 = 15;

/// Offset added to the window bits to select gzip framing when encoding.
pub const GZIP_FRAMING: i32 = 16;

/// Offset added to the window bits to detect gzip or zlib headers when
/// decoding.
pub const AUTO_DETECT_FRAMING: i32 = 32;

/// Default memory level for the encoder.
pub const DEFAULT_MEM_LEVEL: u8 = 8;

/// Parameters used when a session initializes its codec state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Capacity of the output staging buffer used per drain iteration.
    pub chunk_size: usize,
    /// Compression level (encode direction only).
    pub level: CompressionLevel,
    /// log2 of the LZ77 window size, without framing offsets.
    pub window_bits: u8,
    /// Encoder memory level (1-9).
    pub mem_level: u8,
}

impl SessionConfig {
    /// Standard gzip configuration: 16 KiB chunks, level 6, 32 KiB window.
    pub const DEFAULT: Self = Self {
        chunk_size: DEFAULT_CHUNK_SIZE,
        level: CompressionLevel::DEFAULT,
        window_bits: MAX_WINDOW_BITS,
        mem_level: DEFAULT_MEM_LEVEL,
    };

    /// Set the staging buffer size. Values below 1 are raised to 1 and values
    /// above `u32::MAX` are capped, since the primitive counts in 32 bits.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.clamp(1, u32::MAX as usize);
        self
    }

    /// Set the compression level.
    pub fn with_level(mut self, level: impl Into<CompressionLevel>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the window size. Out-of-range values are rejected by the primitive
    /// at initialization.
    pub fn with_window_bits(mut self, window_bits: u8) -> Self {
        self.window_bits = window_bits;
        self
    }

    /// Set the encoder memory level. Out-of-range values are rejected by the
    /// primitive at initialization.
    pub fn with_mem_level(mut self, mem_level: u8) -> Self {
        self.mem_level = mem_level;
        self
    }

    /// Window bits as passed to the primitive, including the framing offset
    /// selected by `mode`.
    pub fn framed_window_bits(&self, mode: Mode) -> i32 {
        let bits = i32::from(self.window_bits);
        match mode {
            Mode::Compress => bits + GZIP_FRAMING,
            Mode::Uncompress => bits + AUTO_DETECT_FRAMING,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
