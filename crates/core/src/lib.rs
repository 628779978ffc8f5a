//! huffpack-core: a byte-oriented Huffman entropy codec.
//!
//! Compression builds a Huffman tree from observed symbol frequencies,
//! assigns prefix-free bit codes, packs the encoded bits, and frames the
//! bitstream together with a reconstructable code table into one
//! self-contained payload. Decompression reverses the framing and replays
//! the bitstream against the deserialized table; the tree is never rebuilt.
//!
//! # Architecture
//!
//! - `freq`: per-symbol frequency counting
//! - `tree`: deterministic greedy tree construction
//! - `code`: bit-buffer codes and the symbol -> code table
//! - `bitio`: bit packing/unpacking with padding metadata
//! - `payload`: payload framing and table (de)serialization
//! - `decode`: greedy bitstream decoding
//!
//! # Design Principles
//!
//! - **Deterministic**: equal inputs produce byte-identical payloads; the
//!   tree builder breaks frequency ties on creation order, never on sort
//!   or heap internals
//! - **No panics**: all failures surface as structured [`Error`] values
//! - **No shared state**: both entry points are pure functions over byte
//!   buffers, safe to call from any thread
//!
//! # Example
//!
//! ```
//! use huffpack_core::{compress, decompress};
//!
//! let input = b"AAAAAABBBCCD";
//! let (payload, table) = compress(input);
//!
//! assert!(table.get(b'A').unwrap().len() < table.get(b'D').unwrap().len());
//! assert_eq!(decompress(&payload).unwrap(), input);
//! ```

pub mod bitio;
pub mod code;
pub mod decode;
pub mod error;
pub mod freq;
pub mod payload;
pub mod tree;

pub use code::{Code, CodeTable};
pub use error::{DecodeError, Error, FormatError, Result};

use bitio::{BitReader, BitWriter};
use freq::FrequencyTable;

/// Compress a byte sequence into a self-contained payload.
///
/// Returns the payload and the code table that produced it. The table is
/// informational (symbol, code bits, code length) for display and
/// reporting; the payload already embeds everything needed to decompress.
///
/// Empty input is valid and yields the minimal 5-byte payload.
pub fn compress(input: &[u8]) -> (Vec<u8>, CodeTable) {
    let freqs = FrequencyTable::from_bytes(input);
    let root = tree::build_tree(&freqs);
    let table = code::assign_codes(root.as_ref());

    let mut writer = BitWriter::new();
    for &byte in input {
        if let Some(code) = table.get(byte) {
            writer.push_code(code);
        }
    }

    let payload = payload::frame_payload(&table, &writer.into_padded());
    (payload, table)
}

/// Decompress a payload produced by [`compress`].
///
/// # Errors
/// - [`FormatError`] if the envelope is malformed: truncated header, table
///   length overrunning the buffer, bad table entries, or a padding byte
///   outside 0..=7
/// - [`DecodeError`] if the envelope parsed but the bitstream does not
///   resolve to a whole number of symbols
pub fn decompress(payload: &[u8]) -> Result<Vec<u8>> {
    let (table, packed) = payload::unframe_payload(payload)?;
    let reader = BitReader::from_padded(packed)?;
    decode::decode_bits(reader, &table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_text() {
        let input = b"hello world! this is a test of the codec with some repetition: aaaa bbbb cccc";
        let (payload, _) = compress(input);
        assert_eq!(decompress(&payload).unwrap(), input);
    }

    #[test]
    fn test_round_trip_empty() {
        let (payload, table) = compress(&[]);
        assert_eq!(payload, vec![0, 0, 0, 0, 0]);
        assert!(table.is_empty());
        assert_eq!(decompress(&payload).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_every_symbol_gets_a_code() {
        let input = b"mississippi";
        let (_, table) = compress(input);
        assert_eq!(table.len(), 4);
        for s in [b'm', b'i', b's', b'p'] {
            assert!(table.get(s).is_some());
        }
        assert!(table.get(b'x').is_none());
    }
}
