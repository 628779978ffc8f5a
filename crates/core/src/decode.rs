//! Bitstream decoding against a reconstructed code table.
//!
//! Decoding never touches the Huffman tree: it builds a reverse map
//! (code -> symbol) from the deserialized table and greedily matches the
//! incoming bits. Prefix-freeness of the table makes the first match the
//! only possible match, so a matched candidate is always correct.

use crate::bitio::BitReader;
use crate::code::{Code, CodeTable};
use crate::error::{DecodeError, Result};
use std::collections::HashMap;

/// Replay `reader` against `table`, recovering the original symbols.
///
/// # Errors
/// - [`DecodeError::InvalidCode`] if the accumulated bits grow longer than
///   the longest code in the table — no future match is possible
/// - [`DecodeError::TrailingBits`] if the stream ends with a partial,
///   unmatched candidate (truncated or corrupt bitstream)
pub fn decode_bits(mut reader: BitReader<'_>, table: &CodeTable) -> Result<Vec<u8>> {
    let reverse: HashMap<&Code, u8> = table.iter().map(|(symbol, code)| (code, symbol)).collect();
    let max_len = table.max_code_len();

    let mut output = Vec::new();
    let mut candidate = Code::new();

    while let Some(bit) = reader.next_bit() {
        candidate.push_bit(bit);

        if let Some(&symbol) = reverse.get(&candidate) {
            output.push(symbol);
            candidate.clear();
        } else if candidate.len() >= max_len {
            // The candidate only ever grows; once it passes the longest
            // code it can never match again.
            return Err(DecodeError::InvalidCode {
                position: reader.position(),
            }
            .into());
        }
    }

    if !candidate.is_empty() {
        return Err(DecodeError::TrailingBits {
            leftover: candidate.len(),
        }
        .into());
    }

    Ok(output)
}
