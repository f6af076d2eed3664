//! Walk a peeking adapter through the classic lookahead scenario.

use peekprofit::{PeekingAdapter, VecSource};

fn main() -> anyhow::Result<()> {
    let mut numbers = PeekingAdapter::new(VecSource::new(vec![1, 2, 3]));

    println!("peek -> {}", numbers.peek()?); // 1, does not advance
    println!("next -> {}", numbers.next()?); // 1, the peeked value
    println!("next -> {}", numbers.next()?); // 2
    println!("peek -> {}", numbers.peek()?); // 3
    println!("has_next -> {}", numbers.has_next()); // true
    println!("next -> {}", numbers.next()?); // 3
    println!("has_next -> {}", numbers.has_next()); // false

    // `None` is an ordinary element, not a marker for "nothing buffered".
    let mut maybe = PeekingAdapter::new(VecSource::new(vec![None, Some(5)]));
    println!("peek -> {:?}", maybe.peek()?);
    println!("next -> {:?}", maybe.next()?);
    println!("next -> {:?}", maybe.next()?);
    println!("has_next -> {}", maybe.has_next());

    Ok(())
}
