use thiserror::Error;

/// Array-backed binary min-heap.
///
/// Ordering comes entirely from `T: Ord`, so callers that need
/// reproducible output put their tie-break into the key (see
/// `hufftree::HeapEntry`).
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { elements: vec![] }
    }

    pub fn heap_size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Terminal condition for tree construction.
    pub fn is_singleton(&self) -> bool {
        self.elements.len() == 1
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeapErr {
    #[error("heap index {0} out of range for heap of size {1}")]
    KeyError(usize, usize),
    #[error("heap is full (capacity {0})")]
    HeapOverflow(usize),
    #[error("heap underflow: no entries to extract")]
    HeapUnderflow,
}

impl<T: Ord> MinHeap<T> {
    /// Heapifies `source` in place, sifting down from the last parent to the root.
    pub fn build(source: Vec<T>) -> Result<Self, HeapErr> {
        if source.is_empty() {
            return Err(HeapErr::HeapUnderflow);
        }
        let mut heap = MinHeap { elements: source };
        let n = heap.heap_size();
        for i in (0..n / 2).rev() {
            heap.min_heapify(i)?;
        }
        Ok(heap)
    }

    pub fn valid_min_heap(&self) -> bool {
        (1..self.heap_size()).all(|i| self.elements[Self::parent(i)] <= self.elements[i])
    }

    pub fn min_heapify(&mut self, mut i: usize) -> Result<(), HeapErr> {
        let n = self.heap_size();
        if i >= n {
            return Err(HeapErr::KeyError(i, n));
        }
        loop {
            let l = Self::left(i);
            let r = Self::right(i);
            let mut smallest = i;

            if l < n && self.elements[l] < self.elements[smallest] {
                smallest = l;
            }
            if r < n && self.elements[r] < self.elements[smallest] {
                smallest = r;
            }
            if smallest == i {
                return Ok(());
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        let mut i = self.heap_size() - 1;
        while i > 0 {
            let p = Self::parent(i);
            if self.elements[i] >= self.elements[p] {
                break;
            }
            self.elements.swap(i, p);
            i = p;
        }
        debug_assert!(self.valid_min_heap());
    }

    /// Like [`insert`](Self::insert), but refuses to grow past `capacity`.
    pub fn insert_bounded(&mut self, value: T, capacity: usize) -> Result<(), HeapErr> {
        if self.heap_size() >= capacity {
            return Err(HeapErr::HeapOverflow(capacity));
        }
        self.insert(value);
        Ok(())
    }

    pub fn extract_min(&mut self) -> Result<T, HeapErr> {
        let n = self.heap_size();
        if n == 0 {
            return Err(HeapErr::HeapUnderflow);
        }
        let result = self.elements.swap_remove(0);
        if n > 1 {
            self.min_heapify(0)?;
        }
        Ok(result)
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
