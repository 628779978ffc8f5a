//! Payload framing: one self-contained blob of code table plus bitstream.
//!
//! # Payload Format
//!
//! ```text
//! +--------------------+
//! | table_len (4)      |  u32 big-endian, byte length of the table
//! +--------------------+
//! | table              |  table_len bytes of (symbol, code) entries
//! +--------------------+
//! | padding (1)        |  u8, trailing filler bits in the last data byte
//! +--------------------+
//! | bitstream          |  packed code bits, MSB-first
//! +--------------------+
//! ```
//!
//! Each table entry is binary-safe and fixed-shape:
//!
//! ```text
//! symbol (1) | bit_length (1) | ceil(bit_length / 8) code bytes
//! ```
//!
//! Compressing empty input yields the minimal 5-byte payload
//! `00 00 00 00 00`: zero-length table, padding 0, no bitstream bytes.

use crate::code::{Code, CodeTable};
use crate::error::{FormatError, Result};

/// Byte length of the table-length header.
const TABLE_LEN_SIZE: usize = 4;

/// Frame a code table and a padded bitstream into one payload.
///
/// `packed` must be the `[padding byte][data bytes]` form produced by
/// [`crate::bitio::BitWriter::into_padded`].
pub fn frame_payload(table: &CodeTable, packed: &[u8]) -> Vec<u8> {
    let table_bytes = serialize_table(table);

    let mut payload = Vec::with_capacity(TABLE_LEN_SIZE + table_bytes.len() + packed.len());
    payload.extend_from_slice(&(table_bytes.len() as u32).to_be_bytes());
    payload.extend_from_slice(&table_bytes);
    payload.extend_from_slice(packed);
    payload
}

/// Split a payload into its code table and padded bitstream section.
///
/// The returned slice is ready for [`crate::bitio::BitReader::from_padded`].
///
/// # Errors
/// - [`FormatError::TruncatedHeader`] if the buffer is shorter than 4 bytes
/// - [`FormatError::TableOverrun`] if the declared table length exceeds the rest
/// - table deserialization errors (truncated, duplicate, or zero-length entries)
pub fn unframe_payload(payload: &[u8]) -> Result<(CodeTable, &[u8])> {
    if payload.len() < TABLE_LEN_SIZE {
        return Err(FormatError::TruncatedHeader {
            required: TABLE_LEN_SIZE,
            actual: payload.len(),
        }
        .into());
    }

    let table_len =
        u32::from_be_bytes(payload[..TABLE_LEN_SIZE].try_into().expect("4-byte slice")) as usize;

    let rest = &payload[TABLE_LEN_SIZE..];
    if table_len > rest.len() {
        return Err(FormatError::TableOverrun {
            declared: table_len,
            available: rest.len(),
        }
        .into());
    }

    let table = deserialize_table(&rest[..table_len])?;
    Ok((table, &rest[table_len..]))
}

/// Serialize a code table in entry insertion order.
fn serialize_table(table: &CodeTable) -> Vec<u8> {
    let mut out = Vec::new();
    for (symbol, code) in table.iter() {
        out.push(symbol);
        out.push(code.len() as u8);
        out.extend_from_slice(code.as_bytes());
    }
    out
}

/// Parse serialized table entries back into a [`CodeTable`].
fn deserialize_table(bytes: &[u8]) -> Result<CodeTable> {
    let mut table = CodeTable::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes.len() - pos < 2 {
            return Err(FormatError::TruncatedTableEntry {
                symbol: bytes[pos],
                required: 2,
                actual: bytes.len() - pos,
            }
            .into());
        }

        let symbol = bytes[pos];
        let bit_len = bytes[pos + 1] as usize;
        pos += 2;

        if bit_len == 0 {
            return Err(FormatError::EmptyCode { symbol }.into());
        }

        let code_bytes = bit_len.div_ceil(8);
        if bytes.len() - pos < code_bytes {
            return Err(FormatError::TruncatedTableEntry {
                symbol,
                required: code_bytes,
                actual: bytes.len() - pos,
            }
            .into());
        }

        let code = Code::from_packed(&bytes[pos..pos + code_bytes], bit_len)
            .expect("length checked above");
        pos += code_bytes;

        if !table.insert(symbol, code) {
            return Err(FormatError::DuplicateTableEntry { symbol }.into());
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitio::BitWriter;
    use crate::error::Error;

    fn sample_table() -> CodeTable {
        let mut table = CodeTable::new();

        let mut a = Code::new();
        a.push_bit(false);
        table.insert(b'A', a);

        let mut b = Code::new();
        b.push_bit(true);
        b.push_bit(false);
        table.insert(b'B', b);

        let mut c = Code::new();
        c.push_bit(true);
        c.push_bit(true);
        table.insert(b'C', c);

        table
    }

    #[test]
    fn test_empty_payload_is_five_zero_bytes() {
        let packed = BitWriter::new().into_padded();
        let payload = frame_payload(&CodeTable::new(), &packed);
        assert_eq!(payload, vec![0, 0, 0, 0, 0]);

        let (table, rest) = unframe_payload(&payload).unwrap();
        assert!(table.is_empty());
        assert_eq!(rest, &[0]);
    }

    #[test]
    fn test_table_round_trip() {
        let table = sample_table();
        let packed = BitWriter::new().into_padded();
        let payload = frame_payload(&table, &packed);

        let (parsed, _) = unframe_payload(&payload).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed.get(b'A').unwrap().to_string(), "0");
        assert_eq!(parsed.get(b'B').unwrap().to_string(), "10");
        assert_eq!(parsed.get(b'C').unwrap().to_string(), "11");

        // Insertion order survives serialization.
        let symbols: Vec<u8> = parsed.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec![b'A', b'B', b'C']);
    }

    #[test]
    fn test_entry_wire_shape() {
        let mut table = CodeTable::new();
        let mut code = Code::new();
        for i in 0..9 {
            code.push_bit(i == 0);
        }
        table.insert(0xFE, code);

        let packed = BitWriter::new().into_padded();
        let payload = frame_payload(&table, &packed);

        // 9-bit code occupies 2 bytes: entry is symbol, length, 2 code bytes.
        assert_eq!(&payload[..4], &[0, 0, 0, 4]);
        assert_eq!(&payload[4..8], &[0xFE, 9, 0b1000_0000, 0]);
        assert_eq!(payload[8], 0);
    }

    #[test]
    fn test_truncated_header() {
        let result = unframe_payload(&[0, 0, 0]);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::TruncatedHeader { .. }))
        ));
    }

    #[test]
    fn test_declared_length_exceeds_buffer() {
        let result = unframe_payload(&[0, 0, 0, 10, 1, 2]);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::TableOverrun {
                declared: 10,
                available: 2,
            }))
        ));
    }

    #[test]
    fn test_truncated_table_entry() {
        // Entry claims a 9-bit code but only one code byte follows.
        let payload = [0, 0, 0, 3, b'A', 9, 0xFF, 0];
        let result = unframe_payload(&payload);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::TruncatedTableEntry { .. }))
        ));
    }

    #[test]
    fn test_zero_length_code_rejected() {
        let payload = [0, 0, 0, 2, b'A', 0, 0];
        let result = unframe_payload(&payload);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::EmptyCode { symbol: b'A' }))
        ));
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let payload = [0, 0, 0, 6, b'A', 1, 0x00, b'A', 1, 0x80, 0];
        let result = unframe_payload(&payload);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::DuplicateTableEntry { symbol: b'A' }))
        ));
    }
}
