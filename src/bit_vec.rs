use std::fmt;

/// Ordered sequence of bits, packed MSB-first.
///
/// Used both as the emitter's path buffer and as the stored code of a
/// symbol. Unused trailing bits of the last byte are always zero, so two
/// vectors holding the same bits compare equal.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVec {
    bits: Vec<u8>,
    bit_count: usize,
}

impl BitVec {
    pub fn new() -> Self {
        BitVec {
            bits: Vec::new(),
            bit_count: 0,
        }
    }

    pub fn with_capacity(bit_capacity: usize) -> Self {
        BitVec {
            bits: Vec::with_capacity(bit_capacity.div_ceil(8)),
            bit_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.bit_count
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    pub fn push_bit(&mut self, bit: bool) {
        let byte_index = self.bit_count / 8; // which byte is target?
        let bit_offset = self.bit_count % 8; // which bit position is target?

        // make a new byte if needed
        if byte_index >= self.bits.len() {
            self.bits.push(0);
        }

        if bit {
            self.bits[byte_index] |= 1 << (7 - bit_offset);
        }

        self.bit_count += 1;
    }

    pub fn pop_bit(&mut self) -> Option<bool> {
        if self.bit_count == 0 {
            return None;
        }
        self.bit_count -= 1;
        let byte_index = self.bit_count / 8;
        let mask = 1 << (7 - self.bit_count % 8);

        let bit = self.bits[byte_index] & mask != 0;
        self.bits[byte_index] &= !mask;
        if self.bit_count % 8 == 0 {
            self.bits.pop();
        }
        Some(bit)
    }

    pub fn extend_from(&mut self, other: &BitVec) {
        for bit in other.iter() {
            self.push_bit(bit);
        }
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_count {
            return None;
        }
        Some(self.bits[index / 8] & (1 << (7 - index % 8)) != 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_count).map(move |i| self.bits[i / 8] & (1 << (7 - i % 8)) != 0)
    }

    /// True if `prefix` is a (not necessarily proper) prefix of `self`.
    pub fn starts_with(&self, prefix: &BitVec) -> bool {
        prefix.len() <= self.len() && prefix.iter().zip(self.iter()).all(|(a, b)| a == b)
    }
}

impl fmt::Display for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bit_vec = BitVec::new();
        for bit in iter {
            bit_vec.push_bit(bit);
        }
        bit_vec
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn bits(s: &str) -> BitVec {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_push_and_display() {
        let mut v = BitVec::new();
        for bit in [true, false, true, true, false] {
            v.push_bit(bit);
        }
        assert_eq!(v.len(), 5);
        assert_eq!(v.to_string(), "10110");
    }

    #[test]
    fn test_pop_restores_equality() {
        let mut path = bits("110100101");
        assert_eq!(path.pop_bit(), Some(true));
        assert_eq!(path.pop_bit(), Some(false));
        assert_eq!(path, bits("1101001"));
        path.push_bit(true);
        assert_eq!(path.to_string(), "11010011");
    }

    #[test]
    fn test_pop_empty() {
        let mut v = BitVec::new();
        assert_eq!(v.pop_bit(), None);
    }

    #[test]
    fn test_get() {
        let v = bits("0100000001");
        assert_eq!(v.get(1), Some(true));
        assert_eq!(v.get(8), Some(false));
        assert_eq!(v.get(9), Some(true));
        assert_eq!(v.get(10), None);
    }

    #[test]
    fn test_starts_with() {
        let code = bits("0110");
        assert!(code.starts_with(&bits("01")));
        assert!(code.starts_with(&bits("0110")));
        assert!(!code.starts_with(&bits("1")));
        assert!(!bits("01").starts_with(&code));
    }
}
