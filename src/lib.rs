//! # Lookahead adapter and greedy profit scan
//!
//! Two small, independent algorithms:
//!
//! 1. **Peeking adapter**: [`PeekingAdapter`] wraps any forward-only
//!    [`SequenceSource`] and adds `peek`. Each element is pulled from the
//!    source at most once and handed to the caller exactly once, in order,
//!    whatever the interleaving of `peek` / `next` / `has_next`.
//! 2. **Profit scan**: [`profit::max_profit`] sums every day-over-day price
//!    rise, the maximum profit from unlimited buy/sell transactions.
//!
//! ## Usage Example
//!
//! ```
//! use peekprofit::{PeekingAdapter, VecSource};
//!
//! let mut adapter = PeekingAdapter::new(VecSource::new(vec![1, 2, 3]));
//! assert_eq!(adapter.peek(), Ok(&1));
//! assert_eq!(adapter.next(), Ok(1));
//! assert_eq!(adapter.next(), Ok(2));
//! assert_eq!(adapter.peek(), Ok(&3));
//! assert!(adapter.has_next());
//! assert_eq!(adapter.next(), Ok(3));
//! assert!(!adapter.has_next());
//!
//! assert_eq!(peekprofit::profit::max_profit(&[7, 1, 5, 3, 6, 4]), 7);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod peeking; // Lookahead adapter and script replay
pub mod profit; // Max-profit price scans
pub mod source; // Forward-only sequence sources

// Re-exports for convenience
pub use peeking::PeekingAdapter;
pub use profit::{ProfitError, ProfitReport, ScanConfig, Strategy};
pub use source::{IterSource, SequenceError, SequenceSource, VecSource};
