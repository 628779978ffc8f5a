//! Bit packing and unpacking for the compressed bitstream.
//!
//! The packed form carried inside a payload is:
//!
//! ```text
//! +------------------+
//! | padding (1 byte) |  number of trailing filler zero bits, 0..=7
//! +------------------+
//! | data bytes       |  emitted bits, MSB-first within each byte
//! +------------------+
//! ```
//!
//! `BitWriter` accumulates bits and finishes into that form; `BitReader`
//! validates the padding byte and replays exactly the non-padding bits.
//! Filler bits are always zero.

use crate::code::Code;
use crate::error::{FormatError, Result};

/// Accumulates bits MSB-first and packs them into bytes.
///
/// # Invariants
/// - `pending` holds fewer than 8 bits, left-aligned
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    pending: u8,
    pending_bits: u8,
}

impl BitWriter {
    /// A writer with no bits emitted yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single bit.
    pub fn push_bit(&mut self, bit: bool) {
        if bit {
            self.pending |= 0x80 >> self.pending_bits;
        }
        self.pending_bits += 1;
        if self.pending_bits == 8 {
            self.bytes.push(self.pending);
            self.pending = 0;
            self.pending_bits = 0;
        }
    }

    /// Append every bit of a code, in order.
    pub fn push_code(&mut self, code: &Code) {
        for i in 0..code.len() {
            self.push_bit(code.bit(i));
        }
    }

    /// Total bits emitted so far.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.pending_bits as usize
    }

    /// Finish into `[padding byte][packed bytes]`.
    ///
    /// The final partial byte (if any) is filled with zero bits; the count
    /// of those filler bits becomes the leading padding byte. An empty
    /// writer produces the single byte `0`.
    pub fn into_padded(mut self) -> Vec<u8> {
        let padding = if self.pending_bits == 0 {
            0
        } else {
            let pad = 8 - self.pending_bits;
            self.bytes.push(self.pending);
            pad
        };

        let mut out = Vec::with_capacity(1 + self.bytes.len());
        out.push(padding);
        out.extend_from_slice(&self.bytes);
        out
    }
}

/// Replays the bit sequence from a padded buffer.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    position: usize,
    bit_len: usize,
}

impl<'a> BitReader<'a> {
    /// Open a `[padding byte][data bytes]` buffer.
    ///
    /// # Errors
    /// - [`FormatError::MissingPaddingByte`] if the buffer is empty
    /// - [`FormatError::InvalidPadding`] if the padding byte is > 7
    /// - [`FormatError::PaddingExceedsData`] if padding > 0 with no data bytes
    pub fn from_padded(buf: &'a [u8]) -> Result<Self> {
        let (&padding, data) = buf
            .split_first()
            .ok_or(FormatError::MissingPaddingByte)?;

        if padding > 7 {
            return Err(FormatError::InvalidPadding(padding).into());
        }

        let data_bits = data.len() * 8;
        if (padding as usize) > data_bits {
            return Err(FormatError::PaddingExceedsData {
                padding,
                data_bits,
            }
            .into());
        }

        Ok(Self {
            data,
            position: 0,
            bit_len: data_bits - padding as usize,
        })
    }

    /// Next bit, or `None` once all non-padding bits are consumed.
    pub fn next_bit(&mut self) -> Option<bool> {
        if self.position >= self.bit_len {
            return None;
        }
        let byte = self.data[self.position / 8];
        let bit = byte & (0x80 >> (self.position % 8)) != 0;
        self.position += 1;
        Some(bit)
    }

    /// Current bit position (bits consumed so far).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total non-padding bits in the buffer.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn bits_of(reader: &mut BitReader) -> Vec<bool> {
        let mut out = Vec::new();
        while let Some(bit) = reader.next_bit() {
            out.push(bit);
        }
        out
    }

    #[test]
    fn test_empty_writer() {
        let packed = BitWriter::new().into_padded();
        assert_eq!(packed, vec![0]);

        let mut reader = BitReader::from_padded(&packed).unwrap();
        assert_eq!(reader.bit_len(), 0);
        assert_eq!(reader.next_bit(), None);
    }

    #[test]
    fn test_round_trip_partial_byte() {
        let input = [true, false, true, true, false];
        let mut writer = BitWriter::new();
        for &bit in &input {
            writer.push_bit(bit);
        }
        assert_eq!(writer.bit_len(), 5);

        let packed = writer.into_padded();
        // 10110 + 3 zero filler bits, padding byte 3
        assert_eq!(packed, vec![3, 0b1011_0000]);

        let mut reader = BitReader::from_padded(&packed).unwrap();
        assert_eq!(bits_of(&mut reader), input);
    }

    #[test]
    fn test_round_trip_exact_bytes() {
        let mut writer = BitWriter::new();
        for i in 0..16 {
            writer.push_bit(i % 3 == 0);
        }
        let packed = writer.into_padded();
        assert_eq!(packed[0], 0);
        assert_eq!(packed.len(), 3);

        let mut reader = BitReader::from_padded(&packed).unwrap();
        let bits = bits_of(&mut reader);
        assert_eq!(bits.len(), 16);
        for (i, bit) in bits.iter().enumerate() {
            assert_eq!(*bit, i % 3 == 0);
        }
    }

    #[test]
    fn test_push_code() {
        let mut code = Code::new();
        code.push_bit(true);
        code.push_bit(true);
        code.push_bit(false);

        let mut writer = BitWriter::new();
        writer.push_code(&code);
        writer.push_code(&code);
        assert_eq!(writer.bit_len(), 6);

        let packed = writer.into_padded();
        assert_eq!(packed, vec![2, 0b1101_1000]);
    }

    #[test]
    fn test_missing_padding_byte() {
        let result = BitReader::from_padded(&[]);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::MissingPaddingByte))
        ));
    }

    #[test]
    fn test_invalid_padding() {
        let result = BitReader::from_padded(&[8, 0xFF]);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::InvalidPadding(8)))
        ));
    }

    #[test]
    fn test_padding_without_data() {
        let result = BitReader::from_padded(&[3]);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::PaddingExceedsData { .. }))
        ));
    }

    #[test]
    fn test_position_tracking() {
        let packed = vec![0, 0xAA];
        let mut reader = BitReader::from_padded(&packed).unwrap();
        assert_eq!(reader.position(), 0);
        reader.next_bit();
        reader.next_bit();
        assert_eq!(reader.position(), 2);
    }
}
