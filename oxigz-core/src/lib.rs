//! # OxiGz Core
//!
//! Core components for the OxiGz gzip streaming library.
//!
//! This crate holds everything that does not depend on a particular codec
//! binding:
//!
//! - [`session`]: the streaming session and its drain loop
//! - [`traits`]: the [`RawStream`] primitive seam, [`Mode`], [`CompressionLevel`]
//! - [`config`]: session parameters and the default chunk size
//! - [`status`]: raw status and flush codes of the primitive
//! - [`error`]: error taxonomy and status-code translation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Facade (oxigz)                                          │
//! │     compress / decompress, Session, Gzippable           │
//! ├─────────────────────────────────────────────────────────┤
//! │ Session (this crate)                                    │
//! │     GzipSession drain loop, GzipError translation       │
//! ├─────────────────────────────────────────────────────────┤
//! │ Primitive (oxigz-zlib)                                  │
//! │     RawStream over zlib's z_stream                      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxigz_core::error::GzipError;
//! use oxigz_core::status;
//!
//! let err = GzipError::from_status(status::DATA_ERROR, Some(c"incorrect header check"));
//! assert!(matches!(err, GzipError::Data { .. }));
//! assert_eq!(err.message(), "incorrect header check");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod session;
pub mod status;
pub mod traits;

// Re-exports for convenience
pub use config::{DEFAULT_CHUNK_SIZE, SessionConfig};
pub use error::{FALLBACK_MESSAGE, GzipError, Result};
pub use session::{GzipSession, SessionState};
pub use status::Flush;
pub use traits::{CompressionLevel, Mode, RawStream, Step};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::SessionConfig;
    pub use crate::error::{GzipError, Result};
    pub use crate::session::GzipSession;
    pub use crate::traits::{CompressionLevel, Mode, RawStream};
}
