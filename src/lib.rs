//! # dna_huffman
//!
//! Huffman prefix codes for byte sequences.
//!
//! ## Quick Start
//!
//! ```rust
//! use dna_huffman::compress;
//!
//! let table = compress(b"AAAAAAATG")?;
//! for line in table.lines() {
//!     println!("{line}");
//! }
//! assert!(table.get(b'A').unwrap().len() < table.get(b'T').unwrap().len());
//! # Ok::<(), dna_huffman::HuffmanError>(())
//! ```

pub mod bit_vec;
pub mod code_table;
pub mod frequency;
pub mod huffman_codec;
pub mod hufftree;
pub mod min_heap;
pub mod store;

/// Size of the symbol domain: one slot per byte value.
pub const SYMBOL_COUNT: usize = 256;

// Re-export main types for convenience
pub use bit_vec::BitVec;
pub use code_table::CodeTable;
pub use frequency::FrequencyTable;
pub use huffman_codec::{HuffmanCodec, compress};
pub use hufftree::{HuffNode, HuffmanError, HuffmanTree};
pub use min_heap::HeapErr;
pub use store::{SequenceStore, StoreConfig, StoreError};
