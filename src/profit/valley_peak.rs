#[cfg(feature = "visualize")]
use serde::Serialize;

/// A single buy followed by a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(Serialize))]
pub struct Trade {
    /// Day index of the purchase.
    pub buy_day: usize,
    /// Day index of the sale, always after `buy_day`.
    pub sell_day: usize,
    /// Price paid.
    pub buy_price: u32,
    /// Price received.
    pub sell_price: u32,
}

impl Trade {
    /// Gain realised by the trade.
    pub fn profit(&self) -> u64 {
        u64::from(self.sell_price.saturating_sub(self.buy_price))
    }
}

/// Buy at each local valley, sell at the following peak.
///
/// Plateaus are walked through, so each returned trade has a strictly
/// positive profit and trades never overlap.
pub fn trades(prices: &[u32]) -> Vec<Trade> {
    let last = prices.len().saturating_sub(1);
    let mut trades = Vec::new();
    let mut day = 0;

    while day < last {
        while day < last && prices[day] >= prices[day + 1] {
            day += 1;
        }
        let buy_day = day;
        while day < last && prices[day] <= prices[day + 1] {
            day += 1;
        }
        if day > buy_day {
            trades.push(Trade {
                buy_day,
                sell_day: day,
                buy_price: prices[buy_day],
                sell_price: prices[day],
            });
        }
    }

    trades
}

/// Maximum profit computed as the sum of valley-to-peak trades.
pub fn max_profit_valley_peak(prices: &[u32]) -> u64 {
    trades(prices).iter().map(Trade::profit).sum()
}
