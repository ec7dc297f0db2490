//! Buffer-level gzip helpers.

use crate::Result;

/// Types whose contents can be gzip-compressed or decompressed in one call.
pub trait Gzippable {
    /// Buffer type produced by both directions.
    type Output;

    /// Returns the gzip-compressed contents.
    ///
    /// # Errors
    ///
    /// Fails if the codec cannot be initialized or reports an error.
    fn gzip_compressed(&self) -> Result<Self::Output>;

    /// Returns the decompressed contents of a gzip (or zlib) stream.
    ///
    /// # Errors
    ///
    /// Fails with [`GzipError::Data`](crate::GzipError::Data) if the contents
    /// are not a valid, complete stream.
    fn gzip_uncompressed(&self) -> Result<Self::Output>;
}

impl Gzippable for [u8] {
    type Output = Vec<u8>;

    fn gzip_compressed(&self) -> Result<Vec<u8>> {
        crate::compress(self)
    }

    fn gzip_uncompressed(&self) -> Result<Vec<u8>> {
        crate::decompress(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GzipError;

    #[test]
    fn test_slice_roundtrip() {
        let data = b"gzippable bytes".to_vec();
        let gz = data.gzip_compressed().unwrap();
        assert_eq!(gz.gzip_uncompressed().unwrap(), data);
    }

    #[test]
    fn test_uncompress_plain_bytes() {
        let err = b"plain".as_slice().gzip_uncompressed().unwrap_err();
        assert!(matches!(err, GzipError::Data { .. }));
    }
}
