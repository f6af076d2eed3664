use std::fmt;

use super::{SequenceError, SequenceSource};

/// Bridge from a standard [`Iterator`] to a [`SequenceSource`].
///
/// A std iterator can only learn whether it has another element by producing
/// it, so the bridge keeps one element in hand at all times: it is filled on
/// construction and refilled after every `next`.
pub struct IterSource<I: Iterator> {
    iter: I,
    upcoming: Option<I::Item>,
}

impl<I: Iterator> IterSource<I> {
    /// Wrap anything that can be iterated.
    pub fn new<J>(iterable: J) -> Self
    where
        J: IntoIterator<IntoIter = I>,
    {
        let mut iter = iterable.into_iter();
        let upcoming = iter.next();
        Self { iter, upcoming }
    }
}

impl<I: Iterator> SequenceSource for IterSource<I> {
    type Item = I::Item;

    fn has_next(&self) -> bool {
        self.upcoming.is_some()
    }

    fn next(&mut self) -> Result<I::Item, SequenceError> {
        let item = self.upcoming.take().ok_or(SequenceError::Exhausted)?;
        self.upcoming = self.iter.next();
        Ok(item)
    }
}

impl<I: Iterator + fmt::Debug> fmt::Debug for IterSource<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("IterSource")
            .field("iter", &self.iter)
            .field(
                "upcoming",
                if self.upcoming.is_some() {
                    &"Some(_)"
                } else {
                    &"None"
                },
            )
            .finish()
    }
}
