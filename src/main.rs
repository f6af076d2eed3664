use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use peekprofit::peeking::script::{self, Outcome, DEMO_SCRIPT};
use peekprofit::profit::DEFAULT_EXHAUSTIVE_LIMIT;
use peekprofit::{PeekingAdapter, ProfitReport, ScanConfig, Strategy, VecSource};

/// Price series replayed by `profit` when none is given.
const EXAMPLE_PRICES: [&[u32]; 6] = [
    &[7, 1, 5, 3, 6, 4],
    &[1, 2, 3, 4, 5],
    &[7, 6, 4, 3, 1],
    &[2, 4, 1, 7],
    &[1],
    &[],
];

#[derive(Parser, Debug)]
#[command(name = "peekprofit", about = "Peeking iterator adapter and greedy profit scan")]
struct Cli {
    /// Log scan and adapter activity to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay peek/next/has-next calls over a sequence of integers.
    Peek {
        /// Elements to wrap; `none` stands for an empty element (default: 1 2 3).
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
        /// Comma separated ops, e.g. `peek,next,has-next`.
        #[arg(long)]
        ops: Option<String>,
    },
    /// Compute the maximum profit from unlimited transactions.
    Profit {
        /// Daily prices (default: replay the built-in examples).
        prices: Vec<u32>,
        /// Algorithm used for the scan.
        #[arg(long, default_value_t = Strategy::Greedy)]
        strategy: Strategy,
        /// Longest series the exhaustive strategy accepts.
        #[arg(long, default_value_t = DEFAULT_EXHAUSTIVE_LIMIT)]
        exhaustive_limit: usize,
        /// Also list the valley-to-peak trades.
        #[arg(long)]
        trades: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Peek { values, ops } => run_peek(values, ops)?,
        Commands::Profit {
            prices,
            strategy,
            exhaustive_limit,
            trades,
        } => run_profit(prices, strategy, exhaustive_limit, trades)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_peek(values: Vec<String>, ops: Option<String>) -> Result<()> {
    let elements = if values.is_empty() {
        vec![Some(1), Some(2), Some(3)]
    } else {
        values
            .iter()
            .map(|value| parse_element(value))
            .collect::<Result<Vec<_>>>()?
    };
    let ops = match ops {
        Some(text) => script::parse_script(&text).context("failed to parse --ops")?,
        None => DEMO_SCRIPT.to_vec(),
    };

    let mut adapter = PeekingAdapter::new(VecSource::new(elements));
    let outcomes = script::replay(&mut adapter, &ops);

    for (op, outcome) in ops.iter().zip(&outcomes) {
        println!("{}\t{}", op, render_outcome(outcome));
    }

    Ok(())
}

fn parse_element(value: &str) -> Result<Option<i64>> {
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    let parsed = value
        .parse::<i64>()
        .with_context(|| format!("invalid element '{}'", value))?;
    Ok(Some(parsed))
}

fn render_outcome(outcome: &Outcome<Option<i64>>) -> String {
    match outcome {
        Outcome::Value(Some(value)) => value.to_string(),
        Outcome::Value(None) => "none".to_string(),
        Outcome::Flag(flag) => flag.to_string(),
        Outcome::Exhausted => "error: sequence exhausted".to_string(),
    }
}

fn run_profit(
    prices: Vec<u32>,
    strategy: Strategy,
    exhaustive_limit: usize,
    show_trades: bool,
) -> Result<()> {
    let config = ScanConfig::new()
        .with_strategy(strategy)
        .with_exhaustive_limit(exhaustive_limit)
        .context("invalid --exhaustive-limit")?;

    let series: Vec<&[u32]> = if prices.is_empty() {
        EXAMPLE_PRICES.to_vec()
    } else {
        vec![prices.as_slice()]
    };

    for prices in series {
        let report = config
            .run(prices)
            .with_context(|| format!("{} scan failed for {:?}", strategy, prices))?;
        print_report(prices, &report, show_trades);
    }

    Ok(())
}

fn print_report(prices: &[u32], report: &ProfitReport, show_trades: bool) {
    println!("{:?}\tprofit={}\tstrategy={}", prices, report.profit, report.strategy);
    if show_trades {
        for trade in &report.trades {
            println!(
                "\tbuy day {} @ {}\tsell day {} @ {}\tgain={}",
                trade.buy_day,
                trade.buy_price,
                trade.sell_day,
                trade.sell_price,
                trade.profit()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_profit_strategy() {
        let cli =
            Cli::try_parse_from(["peekprofit", "profit", "--strategy", "valley-peak", "1", "5"])
                .unwrap();
        match cli.command {
            Commands::Profit { prices, strategy, .. } => {
                assert_eq!(prices, vec![1, 5]);
                assert_eq!(strategy, Strategy::ValleyPeak);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn none_token_is_the_empty_element() {
        assert_eq!(parse_element("none").unwrap(), None);
        assert_eq!(parse_element("-4").unwrap(), Some(-4));
        assert!(parse_element("four").is_err());
    }

    #[test]
    fn example_prices_match_known_profits() {
        let profits: Vec<u64> = EXAMPLE_PRICES
            .iter()
            .map(|prices| peekprofit::profit::max_profit(prices))
            .collect();
        assert_eq!(profits, vec![7, 4, 0, 8, 0, 0]);
    }

    #[test]
    fn exhausted_outcome_is_rendered() {
        assert_eq!(render_outcome(&Outcome::Exhausted), "error: sequence exhausted");
        assert_eq!(render_outcome(&Outcome::Value(None)), "none");
    }
}
