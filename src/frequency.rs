use crate::SYMBOL_COUNT;

/// Occurrence count for every byte value of one input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [usize; SYMBOL_COUNT],
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable {
            counts: [0; SYMBOL_COUNT],
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes.iter().copied().fold(Self::new(), |mut acc, byte| {
            acc.add(byte, 1);
            acc
        })
    }

    pub fn add(&mut self, byte: u8, count: usize) {
        self.counts[byte as usize] += count;
    }

    pub fn get(&self, byte: u8) -> usize {
        self.counts[byte as usize]
    }

    /// Symbols with a nonzero count, in ascending byte order.
    pub fn symbols(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count != 0)
            .map(|(byte, &count)| (byte as u8, count))
    }

    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c != 0).count()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&[u8]> for FrequencyTable {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tally_dna() {
        let table = FrequencyTable::from_bytes(b"ATGCAA");
        assert_eq!(table.get(b'A'), 3);
        assert_eq!(table.get(b'T'), 1);
        assert_eq!(table.get(b'X'), 0);
        assert_eq!(table.distinct(), 4);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn test_symbols_ascending() {
        let table = FrequencyTable::from_bytes(b"TGCA");
        let symbols: Vec<u8> = table.symbols().map(|(b, _)| b).collect();
        assert_eq!(symbols, b"ACGT".to_vec());
    }

    #[test]
    fn test_full_byte_domain() {
        let all: Vec<u8> = (0..=255u8).collect();
        let table = FrequencyTable::from_bytes(&all);
        assert_eq!(table.distinct(), SYMBOL_COUNT);
        assert_eq!(table.get(0), 1);
        assert_eq!(table.get(255), 1);
    }

    #[test]
    fn test_empty() {
        let table = FrequencyTable::from_bytes(b"");
        assert!(table.is_empty());
        assert_eq!(table.symbols().count(), 0);
    }
}
