//! Huffman tree construction.
//!
//! The builder greedily merges the two lowest-frequency nodes until one
//! root remains. Selection runs over a min-heap keyed on
//! `(frequency, creation sequence)`, so ties never depend on sort
//! stability or heap internals.
//!
//! # Determinism
//!
//! Leaves are numbered by the first occurrence of their symbol in the
//! input; internal nodes are numbered after all leaves, in creation
//! order. Given the same input bytes, the tree (and therefore every
//! code) is identical across runs and platforms.

use crate::freq::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node in the Huffman tree.
///
/// Ownership is strictly hierarchical: each node is owned by exactly one
/// parent, and the whole tree is dropped once codes have been assigned.
/// Every internal node has exactly two children.
#[derive(Debug)]
pub enum Node {
    /// Terminal node carrying one input symbol
    Leaf { symbol: u8, freq: u64 },

    /// Merge of two subtrees; carries no symbol
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Combined frequency of all leaves under this node.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }
}

/// Heap entry pairing a node with its selection key.
///
/// Ordering is reversed on (freq, seq) so that `BinaryHeap` (a max-heap)
/// pops the lowest frequency first, and the oldest node on equal
/// frequencies.
struct PendingNode {
    freq: u64,
    seq: u32,
    node: Node,
}

impl PartialEq for PendingNode {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl Eq for PendingNode {}

impl PartialOrd for PendingNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingNode {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.freq, other.seq).cmp(&(self.freq, self.seq))
    }
}

/// Build the canonical Huffman tree for a frequency table.
///
/// Returns `None` for an empty table. A table with a single distinct
/// symbol yields a lone `Leaf` as the root; the code generator gives it
/// the one-bit code `0`.
pub fn build_tree(freqs: &FrequencyTable) -> Option<Node> {
    if freqs.is_empty() {
        return None;
    }

    let mut heap = BinaryHeap::with_capacity(freqs.distinct());
    let mut next_seq = 0u32;

    for symbol in freqs.symbols() {
        heap.push(PendingNode {
            freq: freqs.count(symbol),
            seq: next_seq,
            node: Node::Leaf {
                symbol,
                freq: freqs.count(symbol),
            },
        });
        next_seq += 1;
    }

    while heap.len() > 1 {
        // Two smallest; first popped becomes the left child.
        let first = heap.pop().expect("heap has >= 2 entries");
        let second = heap.pop().expect("heap has >= 2 entries");

        let freq = first.freq + second.freq;
        heap.push(PendingNode {
            freq,
            seq: next_seq,
            node: Node::Internal {
                freq,
                left: Box::new(first.node),
                right: Box::new(second.node),
            },
        });
        next_seq += 1;
    }

    heap.pop().map(|entry| entry.node)
}
