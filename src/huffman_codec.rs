use crate::code_table::CodeTable;
use crate::frequency::FrequencyTable;
use crate::hufftree::{HuffmanError, HuffmanTree};

/// Tree and code table built for one input sequence.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    tree: HuffmanTree,
    frequencies: FrequencyTable,
    code_table: CodeTable,
}

impl HuffmanCodec {
    pub fn new(frequencies: FrequencyTable) -> Result<Self, HuffmanError> {
        let tree = HuffmanTree::from_frequencies(&frequencies)?;
        let code_table = CodeTable::from_tree(&tree);
        Ok(HuffmanCodec {
            tree,
            frequencies,
            code_table,
        })
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, HuffmanError> {
        Self::new(FrequencyTable::from_bytes(data))
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    pub fn into_code_table(self) -> CodeTable {
        self.code_table
    }

    /// Bits the input would occupy under this code table.
    pub fn encoded_bits(&self) -> usize {
        self.code_table.weighted_length(&self.frequencies)
    }
}

/// Builds the prefix code table for `data`.
///
/// Fails with [`HuffmanError::EmptyInput`] when `data` is empty.
/// Inputs with exactly two distinct symbols always get two 1-bit codes,
/// however skewed their counts are.
pub fn compress(data: &[u8]) -> Result<CodeTable, HuffmanError> {
    let codec = HuffmanCodec::from_bytes(data)?;
    log::debug!(
        "compressed {} bytes into {} bits over {} symbols",
        data.len(),
        codec.encoded_bits(),
        codec.code_table().len()
    );
    Ok(codec.into_code_table())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_compress_empty() {
        assert_eq!(compress(b""), Err(HuffmanError::EmptyInput));
    }

    #[test]
    fn test_codec_accessors() {
        let codec = HuffmanCodec::from_bytes(b"AAAAAAAT").unwrap();
        assert_eq!(codec.frequencies().get(b'A'), 7);
        assert_eq!(codec.tree().weight(), 8);
        assert_eq!(codec.code_table().len(), 2);
        assert_eq!(codec.encoded_bits(), 8);
    }

    #[test]
    fn test_single_symbol_encoded_bits() {
        let codec = HuffmanCodec::from_bytes(b"GGG").unwrap();
        assert_eq!(codec.encoded_bits(), 3);
    }

    #[test]
    fn test_two_symbols_get_one_bit_each() {
        let table = compress(b"AAAAAAAT").unwrap();
        assert_eq!(table.get(b'A').unwrap().len(), 1);
        assert_eq!(table.get(b'T').unwrap().len(), 1);
    }

    #[test]
    fn test_compress_matches_codec() {
        let input = b"GATTACA";
        let codec = HuffmanCodec::from_bytes(input).unwrap();
        assert_eq!(compress(input).unwrap(), *codec.code_table());
    }
}
