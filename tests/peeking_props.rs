mod common;

use common::CountingSource;
use peekprofit::peeking::Op;
use peekprofit::{PeekingAdapter, SequenceError};
use proptest::prelude::*;

fn ops() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(prop_oneof![Just(Op::Peek), Just(Op::Next), Just(Op::HasNext)], 0..96)
}

proptest! {
    #[test]
    fn drain_reproduces_sequence(items in proptest::collection::vec(any::<Option<i16>>(), 0..64)) {
        let mut adapter = PeekingAdapter::new(CountingSource::new(items.clone()));
        let mut drained = Vec::with_capacity(items.len());
        while adapter.has_next() {
            drained.push(adapter.next().expect("has_next promised an element"));
        }
        prop_assert_eq!(drained, items);
    }

    #[test]
    fn repeated_peeks_advance_source_by_one(
        items in proptest::collection::vec(any::<u8>(), 1..32),
        times in 1usize..16,
    ) {
        let source = CountingSource::new(items.clone());
        let pulls = source.pulls();
        let mut adapter = PeekingAdapter::new(source);

        for _ in 0..times {
            prop_assert_eq!(adapter.peek().copied(), Ok(items[0]));
        }
        prop_assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn interleaving_preserves_order(
        items in proptest::collection::vec(any::<Option<u8>>(), 0..48),
        script in ops(),
    ) {
        let source = CountingSource::new(items.clone());
        let pulls = source.pulls();
        let mut adapter = PeekingAdapter::new(source);
        let mut consumed = Vec::new();

        for op in script {
            match op {
                Op::Peek => {
                    let expected = items.get(consumed.len()).copied().ok_or(SequenceError::Exhausted);
                    prop_assert_eq!(adapter.peek().copied(), expected);
                }
                Op::Next => {
                    if let Ok(item) = adapter.next() {
                        consumed.push(item);
                    } else {
                        prop_assert_eq!(consumed.len(), items.len());
                    }
                }
                Op::HasNext => {
                    prop_assert_eq!(adapter.has_next(), consumed.len() < items.len());
                }
            }
            // Never more than one element ahead of consumption.
            prop_assert!(pulls.get() <= consumed.len() + 1);
            prop_assert!(pulls.get() >= consumed.len());
        }

        while adapter.has_next() {
            consumed.push(adapter.next().expect("has_next promised an element"));
        }
        prop_assert_eq!(consumed, items.clone());
        prop_assert_eq!(pulls.get(), items.len());
    }
}
