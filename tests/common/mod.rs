//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use peekprofit::{SequenceError, SequenceSource, VecSource};

/// Source that records how many elements have been pulled from it.
///
/// The counter is shared, so it can be read while an adapter owns the source.
#[derive(Debug)]
pub struct CountingSource<T> {
    inner: VecSource<T>,
    pulls: Rc<Cell<usize>>,
}

impl<T> CountingSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            inner: VecSource::new(items),
            pulls: Rc::new(Cell::new(0)),
        }
    }

    /// Handle onto the pull counter.
    pub fn pulls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.pulls)
    }
}

impl<T> SequenceSource for CountingSource<T> {
    type Item = T;

    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn next(&mut self) -> Result<T, SequenceError> {
        let item = self.inner.next()?;
        self.pulls.set(self.pulls.get() + 1);
        Ok(item)
    }
}

