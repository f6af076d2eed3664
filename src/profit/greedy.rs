use crate::peeking::PeekingAdapter;
use crate::source::{SequenceError, SequenceSource};

/// Maximum profit from unlimited buy/sell transactions.
///
/// Every day-over-day rise is taken. O(n) time, O(1) space.
pub fn max_profit(prices: &[u32]) -> u64 {
    prices
        .windows(2)
        .filter(|pair| pair[1] > pair[0])
        .map(|pair| u64::from(pair[1] - pair[0]))
        .sum()
}

/// [`max_profit`] over a forward-only source of prices.
///
/// Each price is compared with the peeked price of the following day, so the
/// source is read exactly once.
pub fn max_profit_streaming<S>(source: S) -> Result<u64, SequenceError>
where
    S: SequenceSource<Item = u32>,
{
    let mut prices = PeekingAdapter::new(source);
    let mut profit = 0u64;

    while prices.has_next() {
        let today = prices.next()?;
        if !prices.has_next() {
            break;
        }
        let tomorrow = *prices.peek()?;
        if tomorrow > today {
            profit += u64::from(tomorrow - today);
        }
    }

    Ok(profit)
}
