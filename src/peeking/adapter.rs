use tracing::trace;

use crate::source::{IterSource, SequenceError, SequenceSource};

/// One-element lookahead over a forward-only [`SequenceSource`].
///
/// The adapter pulls from its source lazily: nothing on construction, and at
/// most one element ahead of what the caller has consumed. Presence of the
/// buffered element is tracked by the `Option` discriminant rather than by the
/// element's value, so elements such as `None` in a sequence of `Option<T>`
/// are buffered like any other.
#[derive(Debug, Clone)]
pub struct PeekingAdapter<S: SequenceSource> {
    source: S,
    /// Element pulled by `peek` and not yet handed out by `next`.
    buffered: Option<S::Item>,
}

impl<S: SequenceSource> PeekingAdapter<S> {
    /// Wrap `source`. No element is pulled until the first `peek` or `next`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            buffered: None,
        }
    }

    /// Return the next element without consuming it.
    ///
    /// Pulls from the source only when nothing is buffered, so any run of
    /// `peek` calls without an intervening `next` advances the source at most
    /// once and yields the same element each time.
    pub fn peek(&mut self) -> Result<&S::Item, SequenceError> {
        let item = match self.buffered.take() {
            Some(item) => item,
            None => {
                let item = self.source.next()?;
                trace!("buffered one element ahead of consumption");
                item
            }
        };
        Ok(self.buffered.insert(item))
    }

    /// Consume and return the next element.
    ///
    /// A buffered element is handed out without touching the source.
    pub fn next(&mut self) -> Result<S::Item, SequenceError> {
        match self.buffered.take() {
            Some(item) => Ok(item),
            None => self.source.next(),
        }
    }

    /// Whether another element is available. Never pulls from the source.
    pub fn has_next(&self) -> bool {
        self.buffered.is_some() || self.source.has_next()
    }

    /// Whether an element is currently held ahead of consumption.
    pub fn is_buffered(&self) -> bool {
        self.buffered.is_some()
    }

    /// Borrow the wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Give the source back, along with the element buffered from it, if any.
    ///
    /// The buffered element comes before whatever the source yields next.
    pub fn into_inner(self) -> (S, Option<S::Item>) {
        (self.source, self.buffered)
    }
}

impl<I: Iterator> PeekingAdapter<IterSource<I>> {
    /// Wrap a standard iterable through [`IterSource`].
    pub fn from_iter_source<J>(iterable: J) -> Self
    where
        J: IntoIterator<IntoIter = I>,
    {
        Self::new(IterSource::new(iterable))
    }
}

impl<S: SequenceSource> SequenceSource for PeekingAdapter<S> {
    type Item = S::Item;

    fn has_next(&self) -> bool {
        PeekingAdapter::has_next(self)
    }

    fn next(&mut self) -> Result<S::Item, SequenceError> {
        PeekingAdapter::next(self)
    }
}

impl<S: SequenceSource> Iterator for PeekingAdapter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        PeekingAdapter::next(self).ok()
    }
}
