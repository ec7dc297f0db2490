//! Raw status and flush codes of the codec primitive.
//!
//! These mirror the integer domain used by zlib's C API. The values are
//! defined here rather than taken from a binding crate so that the error
//! translator and the session drain loop stay independent of any FFI layer.

/// Operation completed; more calls may be needed.
pub const OK: i32 = 0;
/// The end of the compressed stream was reached.
pub const STREAM_END: i32 = 1;
/// A preset dictionary is required to continue decoding.
pub const NEED_DICT: i32 = 2;
/// A file system error occurred.
pub const ERRNO: i32 = -1;
/// The stream state was inconsistent or a parameter was invalid.
pub const STREAM_ERROR: i32 = -2;
/// The input data was corrupted.
pub const DATA_ERROR: i32 = -3;
/// Not enough memory.
pub const MEM_ERROR: i32 = -4;
/// No progress was possible or the output buffer was too small.
pub const BUF_ERROR: i32 = -5;
/// The library version is incompatible with the caller.
pub const VERSION_ERROR: i32 = -6;

/// Compression method identifier for DEFLATE.
pub const DEFLATED: i32 = 8;
/// Default compression strategy.
pub const DEFAULT_STRATEGY: i32 = 0;

/// Flush behaviour passed to a step entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flush {
    /// Let the codec decide how much to buffer.
    #[default]
    None,
    /// All input has been supplied; complete the stream.
    Finish,
}

impl Flush {
    /// Raw flush value understood by the primitive.
    pub fn raw(self) -> i32 {
        match self {
            Flush::None => 0,
            Flush::Finish => 4,
        }
    }

    /// Flush mode for a chunk, `Finish` only for the last one.
    pub fn for_chunk(is_last: bool) -> Self {
        if is_last { Flush::Finish } else { Flush::None }
    }
}

/// Short symbolic name of a raw status code, for log output.
pub fn name(code: i32) -> &'static str {
    match code {
        OK => "Z_OK",
        STREAM_END => "Z_STREAM_END",
        NEED_DICT => "Z_NEED_DICT",
        ERRNO => "Z_ERRNO",
        STREAM_ERROR => "Z_STREAM_ERROR",
        DATA_ERROR => "Z_DATA_ERROR",
        MEM_ERROR => "Z_MEM_ERROR",
        BUF_ERROR => "Z_BUF_ERROR",
        VERSION_ERROR => "Z_VERSION_ERROR",
        _ => "unrecognized",
    }
}
