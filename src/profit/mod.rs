//! Maximum profit from unlimited buy/sell transactions over a price series.
//!
//! Three interchangeable strategies compute the same answer:
//! - [`Strategy::Greedy`]: sum every day-over-day rise, O(n)
//! - [`Strategy::ValleyPeak`]: buy at valleys, sell at peaks, O(n)
//! - [`Strategy::Exhaustive`]: brute-force search, O(2^n), capped by
//!   [`ScanConfig::exhaustive_limit`]
//!
//! Prices are `u32` and profits `u64`, so no sum of rises can overflow.

mod exhaustive;
mod greedy;
mod valley_peak;

pub use exhaustive::max_profit_exhaustive;
pub use greedy::{max_profit, max_profit_streaming};
pub use valley_peak::{max_profit_valley_peak, trades, Trade};

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "visualize")]
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::source::SequenceError;

/// Default cap on input length for [`Strategy::Exhaustive`].
pub const DEFAULT_EXHAUSTIVE_LIMIT: usize = 20;

/// Errors raised while configuring or running a profit scan.
#[derive(Debug, Error)]
pub enum ProfitError {
    /// Configuration invalid (e.g., zero exhaustive limit).
    #[error("invalid scan configuration: {0}")]
    InvalidConfiguration(String),

    /// Strategy name not recognised.
    #[error("unknown strategy '{0}' (expected greedy, valley-peak or exhaustive)")]
    UnknownStrategy(String),

    /// Too many prices for the exhaustive search.
    #[error("{len} prices exceed the exhaustive search limit of {limit}")]
    InputTooLarge {
        /// Number of prices supplied.
        len: usize,
        /// Configured limit.
        limit: usize,
    },

    /// Reading prices from a sequence source failed.
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

/// Algorithm used to compute the maximum profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "visualize", derive(Serialize))]
pub enum Strategy {
    /// Sum of positive day-over-day differences.
    #[default]
    Greedy,
    /// Sum of valley-to-peak trades.
    ValleyPeak,
    /// Brute-force search over all trade sequences.
    Exhaustive,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 3] = [Strategy::Greedy, Strategy::ValleyPeak, Strategy::Exhaustive];

    /// Name accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::ValleyPeak => "valley-peak",
            Strategy::Exhaustive => "exhaustive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ProfitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(Strategy::Greedy),
            "valley-peak" | "valley_peak" | "valleypeak" => Ok(Strategy::ValleyPeak),
            "exhaustive" | "brute-force" => Ok(Strategy::Exhaustive),
            _ => Err(ProfitError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Configuration parameters for a profit scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Algorithm to run.
    pub strategy: Strategy,
    /// Longest input the exhaustive strategy accepts.
    pub exhaustive_limit: usize,
}

impl ScanConfig {
    /// Greedy scan with the default exhaustive limit.
    pub fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            exhaustive_limit: DEFAULT_EXHAUSTIVE_LIMIT,
        }
    }

    /// Select the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the exhaustive search cap; must be > 0.
    pub fn with_exhaustive_limit(mut self, limit: usize) -> Result<Self, ProfitError> {
        if limit == 0 {
            return Err(ProfitError::InvalidConfiguration(
                "exhaustive limit must be > 0".to_string(),
            ));
        }
        self.exhaustive_limit = limit;
        Ok(self)
    }

    /// Compute the maximum profit for `prices` with the configured strategy.
    pub fn run(&self, prices: &[u32]) -> Result<ProfitReport, ProfitError> {
        let profit = match self.strategy {
            Strategy::Greedy => max_profit(prices),
            Strategy::ValleyPeak => max_profit_valley_peak(prices),
            Strategy::Exhaustive => {
                if prices.len() > self.exhaustive_limit {
                    return Err(ProfitError::InputTooLarge {
                        len: prices.len(),
                        limit: self.exhaustive_limit,
                    });
                }
                max_profit_exhaustive(prices)
            }
        };
        let trades = trades(prices);

        debug!(
            strategy = %self.strategy,
            days = prices.len(),
            trades = trades.len(),
            profit,
            "profit scan complete"
        );

        Ok(ProfitReport {
            strategy: self.strategy,
            profit,
            trades,
        })
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a profit scan.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(Serialize))]
pub struct ProfitReport {
    /// Strategy that produced `profit`.
    pub strategy: Strategy,
    /// Maximum achievable profit.
    pub profit: u64,
    /// Valley-to-peak trades realising `profit`.
    pub trades: Vec<Trade>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_greedy() {
        let config = ScanConfig::default();
        assert_eq!(config.strategy, Strategy::Greedy);
        assert_eq!(config.exhaustive_limit, DEFAULT_EXHAUSTIVE_LIMIT);
    }

    #[test]
    fn zero_exhaustive_limit_is_rejected() {
        let err = ScanConfig::new().with_exhaustive_limit(0).unwrap_err();
        assert!(matches!(err, ProfitError::InvalidConfiguration(_)));
    }

    #[test]
    fn exhaustive_refuses_long_inputs() {
        let config = ScanConfig::new()
            .with_strategy(Strategy::Exhaustive)
            .with_exhaustive_limit(3)
            .unwrap();
        let err = config.run(&[1, 2, 3, 4]).unwrap_err();
        assert!(matches!(err, ProfitError::InputTooLarge { len: 4, limit: 3 }));
        assert_eq!(err.to_string(), "4 prices exceed the exhaustive search limit of 3");
    }

    #[test]
    fn report_trades_add_up_to_profit() {
        for strategy in Strategy::ALL {
            let report = ScanConfig::new()
                .with_strategy(strategy)
                .run(&[7, 1, 5, 3, 6, 4])
                .unwrap();
            assert_eq!(report.strategy, strategy);
            assert_eq!(report.profit, 7);
            assert_eq!(report.trades.iter().map(Trade::profit).sum::<u64>(), 7);
        }
    }

    #[test]
    fn strategy_names_parse() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        }
        assert!(matches!(
            "lucky".parse::<Strategy>(),
            Err(ProfitError::UnknownStrategy(name)) if name == "lucky"
        ));
    }
}
