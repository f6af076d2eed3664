//! Replayable sequences of adapter operations.
//!
//! Used by the `peek` command to show how an adapter answers a fixed run of
//! `peek` / `next` / `has-next` calls.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use super::PeekingAdapter;
use crate::source::{SequenceError, SequenceSource};

/// One adapter call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// [`PeekingAdapter::peek`]
    Peek,
    /// [`PeekingAdapter::next`]
    Next,
    /// [`PeekingAdapter::has_next`]
    HasNext,
}

/// `peek, next, next, peek, has-next, next, has-next`
pub const DEMO_SCRIPT: [Op; 7] = [
    Op::Peek,
    Op::Next,
    Op::Next,
    Op::Peek,
    Op::HasNext,
    Op::Next,
    Op::HasNext,
];

/// Unrecognised operation name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation '{0}' (expected peek, next or has-next)")]
pub struct ParseOpError(String);

impl FromStr for Op {
    type Err = ParseOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "peek" => Ok(Op::Peek),
            "next" => Ok(Op::Next),
            "has-next" | "hasnext" | "has_next" => Ok(Op::HasNext),
            _ => Err(ParseOpError(s.to_string())),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Peek => "peek",
            Op::Next => "next",
            Op::HasNext => "has-next",
        };
        f.pad(name)
    }
}

/// Parse a comma separated list such as `peek,next,has-next`.
pub fn parse_script(text: &str) -> Result<Vec<Op>, ParseOpError> {
    text.split(',')
        .filter(|op| !op.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// What a single [`Op`] returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Element returned by `peek` or `next`.
    Value(T),
    /// Answer of `has_next`.
    Flag(bool),
    /// `peek` or `next` found no element.
    Exhausted,
}

impl<T> Outcome<T> {
    fn from_result(result: Result<T, SequenceError>) -> Self {
        match result {
            Ok(value) => Outcome::Value(value),
            Err(SequenceError::Exhausted) => Outcome::Exhausted,
        }
    }
}

/// Run `ops` against `adapter`, recording one outcome per op.
///
/// Exhaustion is recorded rather than propagated, so every op runs.
pub fn replay<S>(adapter: &mut PeekingAdapter<S>, ops: &[Op]) -> Vec<Outcome<S::Item>>
where
    S: SequenceSource,
    S::Item: Clone,
{
    let outcomes: Vec<_> = ops
        .iter()
        .map(|op| match op {
            Op::Peek => Outcome::from_result(adapter.peek().cloned()),
            Op::Next => Outcome::from_result(adapter.next()),
            Op::HasNext => Outcome::Flag(adapter.has_next()),
        })
        .collect();
    debug!(ops = ops.len(), "replayed script");
    outcomes
}
