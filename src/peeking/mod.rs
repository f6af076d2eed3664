//! Lookahead over forward-only sequences.
//!
//! [`PeekingAdapter`] adds `peek` to any [`SequenceSource`](crate::source::SequenceSource)
//! while keeping its `has_next` / `next` contract, so an adapter can stand in
//! wherever a plain source is expected.

mod adapter;
pub mod script;

pub use adapter::PeekingAdapter;
pub use script::{replay, Op, Outcome, DEMO_SCRIPT};
