//! Property-based tests for gzip sessions.

use oxigz::{GzipError, Mode, SessionConfig, compress, compress_with, decompress, processor};
use proptest::prelude::*;

/// Gzip magic and zlib headers (plain, default, best, and with FDICT set).
const HEADERS: [&[u8]; 5] = [
    &[0x1f, 0x8b, 0x08],
    &[0x78, 0x01],
    &[0x78, 0x9c],
    &[0x78, 0xda],
    &[0x78, 0xbb],
];

fn header_shaped_garbage() -> impl Strategy<Value = Vec<u8>> {
    (
        proptest::sample::select(HEADERS.to_vec()),
        proptest::collection::vec(any::<u8>(), 0..256),
    )
        .prop_map(|(header, tail)| {
            let mut data = header.to_vec();
            data.extend(tail);
            data
        })
}

fn process_pieces(mode: Mode, data: &[u8], piece: usize) -> Vec<u8> {
    let mut session = processor(mode);
    session.initialize().unwrap();
    let mut output = Vec::new();
    let mut pieces = data.chunks(piece).peekable();
    while let Some(chunk) = pieces.next() {
        output.extend(session.process(chunk, pieces.peek().is_none()).unwrap());
    }
    if data.is_empty() {
        output.extend(session.process(&[], true).unwrap());
    }
    output
}

proptest! {
    #[test]
    fn prop_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..20_000)) {
        let compressed = compress(&data).unwrap();
        prop_assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn prop_roundtrip_small_chunks(
        data in proptest::collection::vec(any::<u8>(), 0..4_000),
        chunk_size in 1usize..64,
    ) {
        let config = SessionConfig::DEFAULT.with_chunk_size(chunk_size);
        let compressed = compress_with(&data, &config).unwrap();
        prop_assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn prop_chunked_decompress_equivalence(
        data in proptest::collection::vec(any::<u8>(), 0..10_000),
        piece in 1usize..2_000,
    ) {
        let compressed = compress(&data).unwrap();
        let chunked = process_pieces(Mode::Uncompress, &compressed, piece);
        prop_assert_eq!(chunked, decompress(&compressed).unwrap());
    }

    #[test]
    fn prop_chunked_compress_roundtrip(
        data in proptest::collection::vec(any::<u8>(), 0..10_000),
        piece in 1usize..2_000,
    ) {
        let chunked = process_pieces(Mode::Compress, &data, piece);
        prop_assert_eq!(decompress(&chunked).unwrap(), data);
    }

    #[test]
    fn prop_garbage_is_data_error(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        if let Err(err) = decompress(&data) {
            prop_assert!(matches!(err, GzipError::Data { .. }), "{:?}", err);
        }
    }

    #[test]
    fn prop_header_shaped_garbage_is_data_error(data in header_shaped_garbage()) {
        if let Err(err) = decompress(&data) {
            prop_assert!(matches!(err, GzipError::Data { .. }), "{:?}", err);
        }
    }
}
