//! # OxiGz
//!
//! Streaming gzip (RFC 1952) compression and decompression of in-memory
//! buffers on top of zlib.
//!
//! ## One-shot
//!
//! ```rust
//! let data = b"Hello, World! Hello, World!";
//! let compressed = oxigz::compress(data).unwrap();
//! assert_eq!(&compressed[..2], &[0x1f, 0x8b]);
//!
//! let decompressed = oxigz::decompress(&compressed).unwrap();
//! assert_eq!(decompressed, data);
//! ```
//!
//! ## Streaming
//!
//! A [`Session`] accepts input in chunks. Each call to
//! [`process`](Session::process) returns the output produced for that chunk;
//! the final chunk is marked with `is_last = true`.
//!
//! ```rust
//! use oxigz::{Mode, processor};
//!
//! let mut session = processor(Mode::Compress);
//! session.initialize().unwrap();
//!
//! let mut gz = Vec::new();
//! gz.extend(session.process(b"first chunk, ", false).unwrap());
//! gz.extend(session.process(b"second chunk", true).unwrap());
//! session.close();
//!
//! assert_eq!(oxigz::decompress(&gz).unwrap(), b"first chunk, second chunk");
//! ```
//!
//! Sessions release their codec state when dropped, so an early return with
//! `?` never leaks it. [`close`](Session::close) may still be called
//! explicitly and any number of times.
//!
//! ## Errors
//!
//! Every failure is a [`GzipError`]. Corrupt or truncated input is reported
//! as [`GzipError::Data`]:
//!
//! ```rust
//! use oxigz::GzipError;
//!
//! let err = oxigz::decompress(b"not gzip at all").unwrap_err();
//! assert!(matches!(err, GzipError::Data { .. }));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod gzippable;

pub use gzippable::Gzippable;
pub use oxigz_core::config::{DEFAULT_CHUNK_SIZE, SessionConfig};
pub use oxigz_core::error::{FALLBACK_MESSAGE, GzipError, Result};
pub use oxigz_core::session::{GzipSession, SessionState};
pub use oxigz_core::traits::{CompressionLevel, Mode, RawStream};
pub use oxigz_zlib::ZlibStream;

/// A gzip session backed by zlib.
pub type Session = GzipSession<ZlibStream>;

/// Create an uninitialized session for `mode` with the default configuration.
///
/// Construction never fails; codec errors surface from
/// [`initialize`](Session::initialize).
pub fn processor(mode: Mode) -> Session {
    Session::new(mode)
}

/// Compress `data` into a complete gzip stream.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_with(data, &SessionConfig::DEFAULT)
}

/// Compress `data` with a custom configuration.
pub fn compress_with(data: &[u8], config: &SessionConfig) -> Result<Vec<u8>> {
    run(Mode::Compress, data, config)
}

/// Decompress a complete gzip (or zlib) stream.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    decompress_with(data, &SessionConfig::DEFAULT)
}

/// Decompress with a custom configuration.
pub fn decompress_with(data: &[u8], config: &SessionConfig) -> Result<Vec<u8>> {
    run(Mode::Uncompress, data, config)
}

fn run(mode: Mode, data: &[u8], config: &SessionConfig) -> Result<Vec<u8>> {
    let mut session = Session::with_config(mode, *config);
    session.initialize()?;
    let output = session.process(data, true)?;
    session.close();
    Ok(output)
}

/// Version string of the linked zlib.
pub fn zlib_version() -> &'static str {
    oxigz_zlib::version()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processor_is_uninitialized() {
        let session = processor(Mode::Uncompress);
        assert_eq!(session.mode(), Mode::Uncompress);
        assert_eq!(session.state(), SessionState::Uninitialized);
        assert!(!session.is_closed());
        assert!(!session.stream().is_active());
    }

    #[test]
    fn test_one_shot_roundtrip() {
        let data = b"Hello, World! Hello, World!";
        let compressed = compress(data).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_invalid_config_fails_at_initialize() {
        let config = SessionConfig::DEFAULT.with_mem_level(0);
        let err = compress_with(b"data", &config).unwrap_err();
        assert!(matches!(err, GzipError::Stream { .. }));
    }
}
