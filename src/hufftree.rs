use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use crate::SYMBOL_COUNT;
use crate::frequency::FrequencyTable;
use crate::min_heap::{HeapErr, MinHeap};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("cannot build a Huffman tree from an empty input")]
    EmptyInput,
    #[error("heap invariant violated during tree construction: {0}")]
    Heap(#[from] HeapErr),
}

#[derive(Debug, Clone)]
pub struct HuffmanTree {
    pub root: HuffNode,
}

impl HuffmanTree {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HuffmanError> {
        HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(bytes))
    }

    /// Builds the tree for every symbol with a nonzero count.
    ///
    /// Equal weights leave the heap in insertion order: leaves are inserted
    /// in ascending byte order and each merged node takes the next sequence
    /// number, so a given table always yields the same tree.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self, HuffmanError> {
        if frequencies.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let leaves: Vec<HeapEntry> = frequencies
            .symbols()
            .enumerate()
            .map(|(order, (byte, count))| HeapEntry::new(HuffNode::new(byte, count), order))
            .collect();

        let heap = MinHeap::build(leaves).inspect_err(|e| log::error!("{e}"))?;
        let tree = HuffmanTree::build_from_heap(heap).inspect_err(|e| log::error!("{e}"))?;

        log::debug!(
            "built huffman tree: {} symbols, weight {}, depth {}",
            frequencies.distinct(),
            tree.weight(),
            tree.depth()
        );
        Ok(tree)
    }

    fn build_from_heap(mut heap: MinHeap<HeapEntry>) -> Result<Self, HeapErr> {
        let mut next_order = heap.heap_size();

        while !heap.is_singleton() {
            let x = heap.extract_min()?;
            let y = heap.extract_min()?;
            log::trace!("merging weights {} + {}", x.weight, y.weight);

            let z = HuffNode::merge(x.node, y.node);
            heap.insert_bounded(HeapEntry::new(z, next_order), SYMBOL_COUNT)?;
            next_order += 1;
        }

        let root = heap.extract_min()?.node;
        Ok(HuffmanTree { root })
    }

    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    /// Longest root-to-leaf path; zero for a single-leaf tree.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    fn fmt_node(node: &HuffNode, depth: usize, label: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match node {
            HuffNode::Leaf { byte, weight } => {
                writeln!(
                    f,
                    "{}{}-> Leaf: {:?} ({}) [weight: {}]",
                    indent, label, *byte as char, byte, weight
                )
            }
            HuffNode::Internal { weight, left, right } => {
                writeln!(f, "{}{}-> Internal [weight: {}]", indent, label, weight)?;
                Self::fmt_node(left, depth + 1, "L", f)?;
                Self::fmt_node(right, depth + 1, "R", f)
            }
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Huffman Tree Structure:")?;
        Self::fmt_node(&self.root, 0, "root", f)
    }
}

impl TryFrom<&str> for HuffmanTree {
    type Error = HuffmanError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        HuffmanTree::from_bytes(text.as_bytes())
    }
}

/// A tree node. Children are owned by their parent, so every node has
/// exactly one parent and the tree is released by `Drop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        weight: usize,
        byte: u8,
    },
    Internal {
        weight: usize,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn new(b: u8, f: usize) -> Self {
        HuffNode::Leaf { weight: f, byte: b }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// `a` becomes the left (0) child, `b` the right (1) child.
    pub fn merge(a: Self, b: Self) -> Self {
        let weight = a.weight() + b.weight();
        HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Heap slot for a node awaiting merge, keyed by `(weight, order)`.
#[derive(Debug)]
struct HeapEntry {
    weight: usize,
    order: usize,
    node: HuffNode,
}

impl HeapEntry {
    fn new(node: HuffNode, order: usize) -> Self {
        HeapEntry {
            weight: node.weight(),
            order,
            node,
        }
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.order == other.order
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.order.cmp(&other.order))
    }
}
