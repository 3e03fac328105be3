use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::bit_vec::BitVec;
use crate::frequency::FrequencyTable;
use crate::hufftree::{HuffNode, HuffmanTree};

/// Prefix code for every leaf symbol of a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, BitVec>,
}

impl CodeTable {
    /// Walks the tree depth-first, left = 0, right = 1.
    ///
    /// A tree that is a single leaf has no edges, so its symbol gets the
    /// one-bit code `0` to keep every code non-empty.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable::default();
        if let HuffNode::Leaf { byte, .. } = tree.root {
            table.codes.insert(byte, BitVec::from_iter([false]));
            return table;
        }

        let mut path = BitVec::with_capacity(tree.depth());
        table.generate(&tree.root, &mut path);
        table
    }

    fn generate(&mut self, node: &HuffNode, path: &mut BitVec) {
        match node {
            HuffNode::Leaf { byte, .. } => {
                let previous = self.codes.insert(*byte, path.clone());
                debug_assert!(previous.is_none(), "symbol {byte} reached twice");
            }
            HuffNode::Internal { left, right, .. } => {
                path.push_bit(false);
                self.generate(left, path);
                path.pop_bit();

                path.push_bit(true);
                self.generate(right, path);
                path.pop_bit();
            }
        }
    }

    pub fn get(&self, byte: u8) -> Option<&BitVec> {
        self.codes.get(&byte)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, u8, BitVec> {
        self.codes.iter()
    }

    /// Human-readable `<symbol>: <bits>` lines in symbol order.
    ///
    /// Printable ASCII symbols are shown as characters, everything else as
    /// a hex escape.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.codes.iter().map(|(&byte, code)| {
            if byte.is_ascii_graphic() {
                format!("{}: {}", byte as char, code)
            } else {
                format!("\\x{:02x}: {}", byte, code)
            }
        })
    }

    /// Total bits needed to encode a sequence with these counts.
    ///
    /// Symbols missing from the table contribute nothing.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> usize {
        frequencies
            .symbols()
            .filter_map(|(byte, count)| self.get(byte).map(|code| code.len() * count))
            .sum()
    }
}

impl<'a> IntoIterator for &'a CodeTable {
    type Item = (&'a u8, &'a BitVec);
    type IntoIter = btree_map::Iter<'a, u8, BitVec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn table(input: &[u8]) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::from_bytes(input).unwrap())
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let codes = table(b"AAAA");
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.get(b'A').unwrap().to_string(), "0");
    }

    #[test]
    fn test_balanced_codes() {
        let codes = table(b"ATGCATGC");
        let rendered: Vec<String> = codes.lines().collect();
        assert_eq!(rendered, vec!["A: 00", "C: 01", "G: 10", "T: 11"]);
    }

    #[test]
    fn test_skewed_codes() {
        let codes = table(b"AAAAAAAT");
        assert_eq!(codes.get(b'T').unwrap().to_string(), "0");
        assert_eq!(codes.get(b'A').unwrap().to_string(), "1");
    }

    #[test]
    fn test_lines_escape_unprintable() {
        let codes = table(b"\n\n a");
        let rendered: Vec<String> = codes.lines().collect();
        assert_eq!(rendered.len(), 3);
        assert!(rendered[0].starts_with("\\x0a: "));
        assert!(rendered[1].starts_with("\\x20: "));
        assert!(rendered[2].starts_with("a: "));
    }

    #[test]
    fn test_weighted_length() {
        let input = b"AAAAAAATTG";
        let freq = FrequencyTable::from_bytes(input);
        let codes = table(input);
        // A=7 -> 1 bit, T=2 and G=1 -> 2 bits each
        assert_eq!(codes.weighted_length(&freq), 7 + 2 * 2 + 2);
    }

    #[test]
    fn test_missing_symbol() {
        assert!(table(b"ACGT").get(b'N').is_none());
    }
}
