//! Bounded collection of sequences waiting to be compressed.
//!
//! The interactive shell owns a [`SequenceStore`]; the engine never sees
//! it and only receives the bytes of the selected entry.

use std::env;

use thiserror::Error;

/// Environment variable read by [`StoreConfig::from_env`].
pub const CAPACITY_ENV: &str = "DNA_HUFFMAN_CAPACITY";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("maximum number of sequences reached ({0})")]
    Full(usize),
    #[error("invalid index {index}: store holds {len} sequences")]
    InvalidIndex { index: usize, len: usize },
    #[error("sequence is empty")]
    EmptySequence,
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub capacity: usize,
}

impl StoreConfig {
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        if self.capacity == 0 {
            return Err(StoreError::Configuration(
                "capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Defaults overridden by `DNA_HUFFMAN_CAPACITY` when it is set.
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_lookup(env::var(CAPACITY_ENV).ok())
    }

    /// Resolves a raw `DNA_HUFFMAN_CAPACITY` value; `None` keeps the defaults.
    pub fn from_lookup(raw: Option<String>) -> Result<Self, StoreError> {
        let config = match raw {
            Some(raw) => Self::from_value(&raw)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn from_value(raw: &str) -> Result<Self, StoreError> {
        let capacity = raw.trim().parse().map_err(|e| {
            StoreError::Configuration(format!("{CAPACITY_ENV}={raw:?}: {e}"))
        })?;
        Ok(Self::default().with_capacity(capacity))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            capacity: Self::DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SequenceStore {
    sequences: Vec<Vec<u8>>,
    capacity: usize,
}

impl SequenceStore {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        config.validate()?;
        Ok(SequenceStore {
            sequences: Vec::with_capacity(config.capacity),
            capacity: config.capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn add(&mut self, sequence: impl Into<Vec<u8>>) -> Result<usize, StoreError> {
        let sequence = sequence.into();
        if sequence.is_empty() {
            return Err(StoreError::EmptySequence);
        }
        if self.sequences.len() >= self.capacity {
            return Err(StoreError::Full(self.capacity));
        }
        self.sequences.push(sequence);
        log::debug!("stored sequence #{}", self.sequences.len());
        Ok(self.sequences.len())
    }

    /// Entries paired with their 1-based index.
    pub fn list(&self) -> impl Iterator<Item = (usize, &[u8])> {
        self.sequences
            .iter()
            .enumerate()
            .map(|(i, s)| (i + 1, s.as_slice()))
    }

    /// Looks up a 1-based index.
    pub fn get(&self, index: usize) -> Result<&[u8], StoreError> {
        let slot = self.slot(index)?;
        Ok(&self.sequences[slot])
    }

    /// Removes a 1-based index; later entries shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<Vec<u8>, StoreError> {
        let slot = self.slot(index)?;
        log::debug!("removing sequence #{index}");
        Ok(self.sequences.remove(slot))
    }

    fn slot(&self, index: usize) -> Result<usize, StoreError> {
        if index == 0 || index > self.sequences.len() {
            return Err(StoreError::InvalidIndex {
                index,
                len: self.sequences.len(),
            });
        }
        Ok(index - 1)
    }
}
