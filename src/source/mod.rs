//! Forward-only sequence sources.
//!
//! A [`SequenceSource`] hands out elements one at a time and can report
//! whether another element is available without handing it out. This is the
//! capability set the peeking adapter consumes and re-exposes.

mod iter_source;
mod vec_source;

pub use iter_source::IterSource;
pub use vec_source::VecSource;

use thiserror::Error;

/// Errors raised by sequence sources and adapters built on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// An element was requested but none remains.
    #[error("sequence exhausted: no element available")]
    Exhausted,
}

/// Forward-only producer of elements.
pub trait SequenceSource {
    /// Element type produced by the source.
    type Item;

    /// Returns `true` iff a following call to [`next`](Self::next) succeeds.
    fn has_next(&self) -> bool;

    /// Returns the next element and advances the cursor by one.
    ///
    /// Fails with [`SequenceError::Exhausted`] when [`has_next`](Self::has_next)
    /// would have returned `false`.
    fn next(&mut self) -> Result<Self::Item, SequenceError>;
}

impl<S: SequenceSource + ?Sized> SequenceSource for &mut S {
    type Item = S::Item;

    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        (**self).next()
    }
}

impl<S: SequenceSource + ?Sized> SequenceSource for Box<S> {
    type Item = S::Item;

    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item, SequenceError> {
        (**self).next()
    }
}
