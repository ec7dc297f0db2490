//! Error types for OxiGz operations.
//!
//! Every failure reported by the codec primitive is translated into one
//! [`GzipError`] variant. The translation is total: status codes that have no
//! dedicated variant are preserved in [`GzipError::Unknown`].

use crate::status;
use std::ffi::CStr;
use thiserror::Error;

/// Message used when the primitive supplies no usable diagnostic string.
pub const FALLBACK_MESSAGE: &str = "unknown gzip error";

/// The main error type for OxiGz operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GzipError {
    /// The stream structure was inconsistent, or the session was misused.
    #[error("stream error: {message}")]
    Stream {
        /// Diagnostic message.
        message: String,
    },

    /// The input data was corrupted (not conforming to the expected format,
    /// incorrect check value, or truncated).
    #[error("data error: {message}")]
    Data {
        /// Diagnostic message.
        message: String,
    },

    /// There was not enough memory.
    #[error("memory error: {message}")]
    Memory {
        /// Diagnostic message.
        message: String,
    },

    /// No progress was possible or there was not enough room in the output
    /// buffer.
    #[error("buffer error: {message}")]
    Buffer {
        /// Diagnostic message.
        message: String,
    },

    /// The codec library version is incompatible with the caller.
    #[error("version error: {message}")]
    Version {
        /// Diagnostic message.
        message: String,
    },

    /// A status code without a dedicated variant.
    #[error("unknown gzip error (code {code}): {message}")]
    Unknown {
        /// Diagnostic message.
        message: String,
        /// Raw status code returned by the primitive.
        code: i32,
    },
}

/// Result type alias for OxiGz operations.
pub type Result<T> = std::result::Result<T, GzipError>;

impl GzipError {
    /// Translate a raw status code and optional diagnostic string.
    ///
    /// The message is taken verbatim when it is valid UTF-8; otherwise
    /// [`FALLBACK_MESSAGE`] is used.
    pub fn from_status(code: i32, message: Option<&CStr>) -> Self {
        let message = message
            .and_then(|m| m.to_str().ok())
            .unwrap_or(FALLBACK_MESSAGE)
            .to_owned();

        match code {
            status::STREAM_ERROR => Self::Stream { message },
            status::DATA_ERROR => Self::Data { message },
            status::MEM_ERROR => Self::Memory { message },
            status::BUF_ERROR => Self::Buffer { message },
            status::VERSION_ERROR => Self::Version { message },
            code => Self::Unknown { message, code },
        }
    }

    /// Create a stream error.
    pub fn stream(message: impl Into<String>) -> Self {
        Self::Stream {
            message: message.into(),
        }
    }

    /// Create a data error.
    pub fn data(message: impl Into<String>) -> Self {
        Self::Data {
            message: message.into(),
        }
    }

    /// Create a memory error.
    pub fn memory(message: impl Into<String>) -> Self {
        Self::Memory {
            message: message.into(),
        }
    }

    /// Create a buffer error.
    pub fn buffer(message: impl Into<String>) -> Self {
        Self::Buffer {
            message: message.into(),
        }
    }

    /// Create a version error.
    pub fn version(message: impl Into<String>) -> Self {
        Self::Version {
            message: message.into(),
        }
    }

    /// Create an unknown error carrying the raw status code.
    pub fn unknown(code: i32, message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
            code,
        }
    }

    /// The diagnostic message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Self::Stream { message }
            | Self::Data { message }
            | Self::Memory { message }
            | Self::Buffer { message }
            | Self::Version { message }
            | Self::Unknown { message, .. } => message,
        }
    }

    /// The raw status code this error corresponds to.
    pub fn code(&self) -> i32 {
        match self {
            Self::Stream { .. } => status::STREAM_ERROR,
            Self::Data { .. } => status::DATA_ERROR,
            Self::Memory { .. } => status::MEM_ERROR,
            Self::Buffer { .. } => status::BUF_ERROR,
            Self::Version { .. } => status::VERSION_ERROR,
            Self::Unknown { code, .. } => *code,
        }
    }
}
