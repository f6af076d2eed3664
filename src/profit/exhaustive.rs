/// Maximum profit by trying every sequence of non-overlapping trades.
///
/// Exponential in the number of prices; only meant as a reference for the
/// linear scans on short inputs.
pub fn max_profit_exhaustive(prices: &[u32]) -> u64 {
    best_from(prices, 0)
}

fn best_from(prices: &[u32], start: usize) -> u64 {
    let mut best = 0;
    for buy in start..prices.len() {
        for sell in buy + 1..prices.len() {
            if prices[sell] > prices[buy] {
                let gain = u64::from(prices[sell] - prices[buy]) + best_from(prices, sell + 1);
                best = best.max(gain);
            }
        }
    }
    best
}
