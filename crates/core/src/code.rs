//! Code assignment: from tree paths to a symbol -> bit-code table.
//!
//! A `Code` is a real bit buffer (packed bytes plus a bit length), never a
//! string of '0'/'1' characters. Codes are root-to-leaf paths: descending
//! left appends 0, descending right appends 1, MSB-first within each byte.

use crate::tree::Node;
use std::fmt;

/// A prefix code for one symbol: up to 255 bits, MSB-first packed.
///
/// # Invariants
/// - `bytes.len() == ceil(len / 8)`
/// - bits past `len` in the final byte are zero (so `Eq`/`Hash` are exact)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bytes: Vec<u8>,
    len: u16,
}

impl Code {
    /// The empty code (no bits).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one bit.
    pub fn push_bit(&mut self, bit: bool) {
        let idx = self.len as usize;
        if idx % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[idx / 8] |= 0x80 >> (idx % 8);
        }
        self.len += 1;
    }

    /// Remove the last bit. Does nothing on an empty code.
    pub fn pop_bit(&mut self) {
        if self.len == 0 {
            return;
        }
        self.len -= 1;
        let idx = self.len as usize;
        self.bytes[idx / 8] &= !(0x80 >> (idx % 8));
        if idx % 8 == 0 {
            self.bytes.pop();
        }
    }

    /// Bit at position `i` (0 = first emitted bit).
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn bit(&self, i: usize) -> bool {
        assert!(i < self.len as usize, "bit index {i} out of range");
        self.bytes[i / 8] & (0x80 >> (i % 8)) != 0
    }

    /// Number of bits in the code.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True if the code has no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop all bits, keeping the allocation.
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.len = 0;
    }

    /// The packed bytes backing this code (last byte zero-padded).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Rebuild a code from packed bytes and a bit length.
    ///
    /// Returns `None` if `bytes` is not exactly `ceil(len/8)` long. Stray
    /// bits past `len` are cleared so equality stays exact.
    pub fn from_packed(bytes: &[u8], len: usize) -> Option<Self> {
        if len > u8::MAX as usize || bytes.len() != len.div_ceil(8) {
            return None;
        }
        let mut bytes = bytes.to_vec();
        if len % 8 != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= 0xFFu8 << (8 - len % 8);
            }
        }
        Some(Self {
            bytes,
            len: len as u16,
        })
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len() {
            f.write_str(if self.bit(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Mapping from symbol to prefix code.
///
/// Entries iterate in insertion order (tree pre-order for generated
/// tables), which fixes the serialized table layout. Lookup by symbol is
/// O(1) through a 256-slot index.
#[derive(Debug, Clone)]
pub struct CodeTable {
    entries: Vec<(u8, Code)>,
    index: [Option<u16>; 256],
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeTable {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: [None; 256],
        }
    }

    /// Insert a code for `symbol`. Returns false (and keeps the existing
    /// entry) if the symbol is already present.
    pub fn insert(&mut self, symbol: u8, code: Code) -> bool {
        if self.index[symbol as usize].is_some() {
            return false;
        }
        self.index[symbol as usize] = Some(self.entries.len() as u16);
        self.entries.push((symbol, code));
        true
    }

    /// Code for a symbol, if present.
    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.index[symbol as usize].map(|i| &self.entries[i as usize].1)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> {
        self.entries.iter().map(|(s, c)| (*s, c))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest code, or 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.entries.iter().map(|(_, c)| c.len()).max().unwrap_or(0)
    }
}

/// Derive the code table from a Huffman tree.
///
/// Pre-order walk: left appends 0, right appends 1, each leaf records the
/// accumulated path. A root that is itself a leaf (single distinct symbol)
/// gets the one-bit code `0` so its bitstream is non-empty and decodable.
pub fn assign_codes(root: Option<&Node>) -> CodeTable {
    let mut table = CodeTable::new();
    if let Some(root) = root {
        let mut path = Code::new();
        if let Node::Leaf { symbol, .. } = root {
            path.push_bit(false);
            table.insert(*symbol, path);
        } else {
            walk(root, &mut path, &mut table);
        }
    }
    table
}

fn walk(node: &Node, path: &mut Code, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            table.insert(*symbol, path.clone());
        }
        Node::Internal { left, right, .. } => {
            path.push_bit(false);
            walk(left, path, table);
            path.pop_bit();

            path.push_bit(true);
            walk(right, path, table);
            path.pop_bit();
        }
    }
}
