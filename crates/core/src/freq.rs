//! Symbol frequency counting.
//!
//! The frequency table records how often each byte value occurs, and also
//! the order in which distinct symbols were first seen. That first-occurrence
//! order seeds the tree builder's tie-break rule, so two runs over the same
//! input always produce the same tree.

/// Per-symbol occurrence counts over a byte sequence.
///
/// # Invariants
/// - `order` contains each distinct symbol exactly once, in first-occurrence order
/// - `counts[s] > 0` iff `s` appears in `order`
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; 256],
    order: Vec<u8>,
}

impl FrequencyTable {
    /// Tally the symbols of `input`. Empty input yields an empty table.
    pub fn from_bytes(input: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        let mut order = Vec::new();

        for &byte in input {
            if counts[byte as usize] == 0 {
                order.push(byte);
            }
            counts[byte as usize] += 1;
        }

        Self { counts, order }
    }

    /// Occurrence count for a symbol (0 if absent).
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Distinct symbols in first-occurrence order.
    pub fn symbols(&self) -> impl Iterator<Item = u8> + '_ {
        self.order.iter().copied()
    }

    /// Number of distinct symbols.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// True if no symbols were observed.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
