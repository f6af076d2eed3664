use super::{SequenceError, SequenceSource};

/// Cursor over an owned vector of elements.
///
/// Elements are moved out as they are produced; the source never clones.
#[derive(Debug, Clone)]
pub struct VecSource<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> VecSource<T> {
    /// Create a source producing `items` in order.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }

    /// Number of elements not yet produced.
    pub fn remaining(&self) -> usize {
        self.items.len()
    }
}

impl<T> From<Vec<T>> for VecSource<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> SequenceSource for VecSource<T> {
    type Item = T;

    fn has_next(&self) -> bool {
        !self.items.as_slice().is_empty()
    }

    fn next(&mut self) -> Result<T, SequenceError> {
        self.items.next().ok_or(SequenceError::Exhausted)
    }
}
