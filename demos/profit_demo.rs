//! Maximum profit for the example price series, with the trades behind it.

use peekprofit::{ScanConfig, Strategy};

fn main() -> anyhow::Result<()> {
    let series: [&[u32]; 6] = [
        &[7, 1, 5, 3, 6, 4],
        &[1, 2, 3, 4, 5],
        &[7, 6, 4, 3, 1],
        &[2, 4, 1, 7],
        &[1],
        &[],
    ];

    for strategy in Strategy::ALL {
        let config = ScanConfig::new().with_strategy(strategy);
        for prices in series {
            let report = config.run(prices)?;
            println!("{strategy:<12} {prices:?} -> {}", report.profit);
        }
    }

    let report = ScanConfig::new().run(series[0])?;
    for trade in report.trades {
        println!(
            "buy day {} @ {}, sell day {} @ {}: +{}",
            trade.buy_day,
            trade.buy_price,
            trade.sell_day,
            trade.sell_price,
            trade.profit()
        );
    }

    Ok(())
}
