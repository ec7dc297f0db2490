//! # OxiGz zlib
//!
//! [`RawStream`] implementation over zlib's `z_stream`, linked through
//! `libz-sys`.
//!
//! The `z_stream` is boxed so that its address stays fixed: zlib stores a
//! back pointer to it inside the internal state and rejects a moved stream.
//! Each successful init is paired with exactly one end call, either through
//! [`RawStream::deflate_end`]/[`RawStream::inflate_end`] or when the stream is
//! dropped.
//!
//! ## Example
//!
//! ```rust
//! use oxigz_core::status::{self, Flush};
//! use oxigz_core::RawStream;
//! use oxigz_zlib::ZlibStream;
//!
//! let mut stream = ZlibStream::new();
//! assert_eq!(stream.deflate_init(6, 15 + 16, 8), status::OK);
//!
//! let mut out = vec![0u8; 256];
//! let step = stream.deflate(b"hello", &mut out, Flush::Finish);
//! assert_eq!(step.status, status::STREAM_END);
//! assert_eq!(&out[..2], &[0x1f, 0x8b]);
//! assert_eq!(stream.deflate_end(), status::OK);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use libz_sys as ffi;
use oxigz_core::status::{self, Flush};
use oxigz_core::traits::{RawStream, Step};
use std::ffi::CStr;
use std::ptr;

const STREAM_SIZE: libc::c_int = std::mem::size_of::<ffi::z_stream>() as libc::c_int;

/// Which direction the codec state was initialized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Deflate,
    Inflate,
}

/// A zlib codec state block.
pub struct ZlibStream {
    raw: Box<ffi::z_stream>,
    active: Option<Direction>,
}

// SAFETY: the z_stream and the state it points to are exclusively owned by
// this value, and zlib keeps no thread-affine data.
unsafe impl Send for ZlibStream {}

impl ZlibStream {
    /// Create an uninitialized stream.
    pub fn new() -> Self {
        Self {
            raw: Box::new(ffi::z_stream {
                next_in: ptr::null_mut(),
                avail_in: 0,
                total_in: 0,
                next_out: ptr::null_mut(),
                avail_out: 0,
                total_out: 0,
                msg: ptr::null_mut(),
                state: ptr::null_mut(),
                zalloc,
                zfree,
                opaque: ptr::null_mut(),
                data_type: 0,
                adler: 0,
                reserved: 0,
            }),
            active: None,
        }
    }

    /// Whether codec state is currently allocated.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Total input bytes consumed since initialization.
    pub fn total_in(&self) -> u64 {
        self.raw.total_in as u64
    }

    /// Total output bytes produced since initialization.
    pub fn total_out(&self) -> u64 {
        self.raw.total_out as u64
    }

    fn strm(&mut self) -> *mut ffi::z_stream {
        &mut *self.raw
    }

    fn run(&mut self, direction: Direction, input: &[u8], output: &mut [u8], flush: Flush) -> Step {
        if self.active != Some(direction) {
            return Step {
                status: status::STREAM_ERROR,
                consumed: 0,
                produced: 0,
            };
        }

        let avail_in = clamp_len(input.len());
        let avail_out = clamp_len(output.len());
        self.raw.next_in = input.as_ptr().cast_mut();
        self.raw.avail_in = avail_in;
        self.raw.next_out = output.as_mut_ptr();
        self.raw.avail_out = avail_out;

        let strm = self.strm();
        // SAFETY: the state was initialized for `direction`, and next_in/next_out
        // point into live slices of at least avail_in/avail_out bytes. zlib
        // never writes through next_in.
        let code = unsafe {
            match direction {
                Direction::Deflate => ffi::deflate(strm, flush.raw()),
                Direction::Inflate => ffi::inflate(strm, flush.raw()),
            }
        };

        let consumed = (avail_in - self.raw.avail_in) as usize;
        let produced = (avail_out - self.raw.avail_out) as usize;

        // Do not keep pointers into the caller's buffers.
        self.raw.next_in = ptr::null_mut();
        self.raw.avail_in = 0;
        self.raw.next_out = ptr::null_mut();
        self.raw.avail_out = 0;

        Step {
            status: code,
            consumed,
            produced,
        }
    }

    fn end(&mut self, direction: Direction) -> i32 {
        if self.active != Some(direction) {
            return status::STREAM_ERROR;
        }
        let strm = self.strm();
        // SAFETY: the state was initialized for `direction` and is released once.
        let code = unsafe {
            match direction {
                Direction::Deflate => ffi::deflateEnd(strm),
                Direction::Inflate => ffi::inflateEnd(strm),
            }
        };
        self.active = None;
        code
    }
}

impl Default for ZlibStream {
    fn default() -> Self {
        Self::new()
    }
}

impl RawStream for ZlibStream {
    fn deflate_init(&mut self, level: i32, window_bits: i32, mem_level: i32) -> i32 {
        if self.active.is_some() {
            return status::STREAM_ERROR;
        }
        let strm = self.strm();
        // SAFETY: strm points to a boxed z_stream with valid allocation hooks
        // and no live state.
        let code = unsafe {
            ffi::deflateInit2_(
                strm,
                level,
                status::DEFLATED,
                window_bits,
                mem_level,
                status::DEFAULT_STRATEGY,
                ffi::zlibVersion(),
                STREAM_SIZE,
            )
        };
        if code == status::OK {
            self.active = Some(Direction::Deflate);
        }
        code
    }

    fn inflate_init(&mut self, window_bits: i32) -> i32 {
        if self.active.is_some() {
            return status::STREAM_ERROR;
        }
        let strm = self.strm();
        // SAFETY: as in `deflate_init`.
        let code =
            unsafe { ffi::inflateInit2_(strm, window_bits, ffi::zlibVersion(), STREAM_SIZE) };
        if code == status::OK {
            self.active = Some(Direction::Inflate);
        }
        code
    }

    fn deflate(&mut self, input: &[u8], output: &mut [u8], flush: Flush) -> Step {
        self.run(Direction::Deflate, input, output, flush)
    }

    fn inflate(&mut self, input: &[u8], output: &mut [u8], flush: Flush) -> Step {
        self.run(Direction::Inflate, input, output, flush)
    }

    fn deflate_end(&mut self) -> i32 {
        self.end(Direction::Deflate)
    }

    fn inflate_end(&mut self) -> i32 {
        self.end(Direction::Inflate)
    }

    fn message(&self) -> Option<&CStr> {
        if self.raw.msg.is_null() {
            None
        } else {
            // SAFETY: zlib only stores pointers to static NUL-terminated strings.
            Some(unsafe { CStr::from_ptr(self.raw.msg) })
        }
    }
}

impl Drop for ZlibStream {
    fn drop(&mut self) {
        if let Some(direction) = self.active {
            self.end(direction);
        }
    }
}

impl std::fmt::Debug for ZlibStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZlibStream")
            .field("active", &self.active)
            .field("total_in", &self.total_in())
            .field("total_out", &self.total_out())
            .finish()
    }
}

/// Version string of the linked zlib.
pub fn version() -> &'static str {
    // SAFETY: zlibVersion returns a pointer to a static NUL-terminated string.
    let version = unsafe { CStr::from_ptr(ffi::zlibVersion()) };
    version.to_str().unwrap_or("unknown")
}

/// Buffer lengths are counted in 32 bits by zlib; larger slices are fed in
/// pieces by the caller's drain loop.
fn clamp_len(len: usize) -> libc::c_uint {
    len.min(libc::c_uint::MAX as usize) as libc::c_uint
}

extern "C" fn zalloc(
    _opaque: *mut libc::c_void,
    items: libc::c_uint,
    size: libc::c_uint,
) -> *mut libc::c_void {
    // SAFETY: calloc accepts any sizes and returns null on failure, which
    // zlib reports as Z_MEM_ERROR.
    unsafe { libc::calloc(items as libc::size_t, size as libc::size_t) }
}

extern "C" fn zfree(_opaque: *mut libc::c_void, address: *mut libc::c_void) {
    // SAFETY: zlib only frees pointers obtained from `zalloc`.
    unsafe { libc::free(address) }
}
