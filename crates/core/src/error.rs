//! Error types for the huffpack codec.
//!
//! All fallible operations return structured errors rather than panicking.
//! The two failure domains a caller cares about are kept distinct:
//! - Format: the payload envelope is malformed (bad lengths, bad padding)
//! - Decode: the envelope parsed but the bitstream doesn't resolve to symbols

use thiserror::Error;

/// Top-level error type for all codec operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Payload framing or table encoding is malformed
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Bitstream does not decode against the payload's code table
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// File I/O error (surfaced by callers that read/write payloads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Malformed payload envelope.
///
/// The payload is unrecoverable; none of these are retried or papered over.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Payload ends before the 4-byte table-length header
    #[error("payload too short: need at least {required} bytes, got {actual}")]
    TruncatedHeader { required: usize, actual: usize },

    /// Declared table length exceeds the remaining buffer
    #[error("table length {declared} exceeds remaining {available} bytes")]
    TableOverrun { declared: usize, available: usize },

    /// A serialized table entry ends mid-way
    #[error("truncated table entry for symbol {symbol:#04x}: need {required} more bytes, got {actual}")]
    TruncatedTableEntry {
        symbol: u8,
        required: usize,
        actual: usize,
    },

    /// A table entry declares a zero-bit code, which can never be decoded
    #[error("zero-length code for symbol {symbol:#04x}")]
    EmptyCode { symbol: u8 },

    /// The same symbol appears twice in the serialized table
    #[error("duplicate table entry for symbol {symbol:#04x}")]
    DuplicateTableEntry { symbol: u8 },

    /// The bitstream section is missing its leading padding byte
    #[error("missing padding byte before bitstream")]
    MissingPaddingByte,

    /// Padding count outside 0..=7
    #[error("invalid padding count {0}: must be 0..=7")]
    InvalidPadding(u8),

    /// Padding claims more bits than the bitstream contains
    #[error("padding {padding} exceeds {data_bits} data bits")]
    PaddingExceedsData { padding: u8, data_bits: usize },
}

/// Malformed bitstream (the envelope itself was well-formed).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Accumulated bits no longer match any code in the table
    #[error("no code matches bitstream at bit position {position}")]
    InvalidCode { position: usize },

    /// Bitstream ended with a partial, unmatched code
    #[error("bitstream exhausted with {leftover} unmatched trailing bits")]
    TrailingBits { leftover: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
