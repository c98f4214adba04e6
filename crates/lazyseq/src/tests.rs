//! Crate-level tests for lazyseq.
//!
//! Sequences are pure, so every law can be checked directly against plain
//! vectors without mocks.

use std::cell::Cell;
use std::rc::Rc;

use test_case::test_case;

use crate::{Extent, Materializer, Seq, SeqError, slice};

// ============================================================================
// Test Helpers
// ============================================================================

fn naturals() -> Seq<u64> {
    Seq::from_step(1, |x| x + 1)
}

fn odds() -> Seq<u64> {
    Seq::from_step(1, |x| x + 2)
}

fn fizzbuzz() -> Seq<String> {
    let fizz = Seq::cycle_of(vec!["", "", "fizz"]).expect("non-empty");
    let buzz = Seq::cycle_of(vec!["", "", "", "", "buzz"]).expect("non-empty");
    fizz.zip_with(&buzz, |a, b| format!("{a}{b}"))
}

/// A generator that counts how many elements have been produced.
fn counted(calls: &Rc<Cell<usize>>) -> Seq<usize> {
    let calls = Rc::clone(calls);
    Seq::from_fn(Extent::Infinite, move || {
        let calls = Rc::clone(&calls);
        std::iter::repeat_with(move || {
            calls.set(calls.get() + 1);
            calls.get()
        })
    })
}

// ============================================================================
// Cyclic patterns
// ============================================================================

#[test]
fn cycle_of_two_sliced_to_five() {
    let seq = Seq::cycle_of(vec!["a", "b"]).unwrap();
    assert_eq!(seq.take(5).unwrap().to_list().unwrap(), vec!["a", "b", "a", "b", "a"]);
}

#[test]
fn cycle_of_empty_fails_eagerly() {
    assert!(matches!(
        Seq::<&str>::cycle_of(Vec::new()),
        Err(SeqError::InvalidArgument { .. })
    ));
}

#[test]
fn fizzbuzz_first_fifteen() {
    let expected = vec![
        "", "", "fizz", "", "buzz", "fizz", "", "", "fizz", "buzz", "", "fizz", "", "",
        "fizzbuzz",
    ];
    assert_eq!(fizzbuzz().slice(0, 15).unwrap(), expected);
}

#[test]
fn fizzbuzz_is_infinite() {
    assert_eq!(fizzbuzz().extent(), Extent::Infinite);
    assert_eq!(fizzbuzz().get(29).as_deref(), Some("fizzbuzz"));
}

// ============================================================================
// Generators
// ============================================================================

#[test_case(0 => Vec::<u64>::new(); "zero")]
#[test_case(1 => vec![1]; "one")]
#[test_case(5 => vec![1, 2, 3, 4, 5]; "five")]
fn from_step_counts_up(n: usize) -> Vec<u64> {
    naturals().take(n).unwrap().to_list().unwrap()
}

#[test_case(1 => 1; "one")]
#[test_case(2 => 4; "two")]
#[test_case(3 => 9; "three")]
#[test_case(4 => 16; "four")]
#[test_case(5 => 25; "five")]
fn odd_sums_are_squares(n: usize) -> u64 {
    odds()
        .take(n)
        .unwrap()
        .fold_left(0, |acc, x| acc + x)
        .unwrap()
}

#[test]
fn running_odd_sums_are_squares() {
    let squares = odds().scan(0, |acc, x| acc + x).drop(1).unwrap();
    assert_eq!(squares.slice(0, 6).unwrap(), vec![1, 4, 9, 16, 25, 36]);
}

#[test]
fn range_from_is_unbounded() {
    let seq = Seq::range_from(-2);
    assert_eq!(seq.extent(), Extent::Infinite);
    assert_eq!(seq.slice(0, 4).unwrap(), vec![-2, -1, 0, 1]);
    assert!(seq.to_list().is_err());
}

// ============================================================================
// Laziness and view semantics
// ============================================================================

#[test]
fn composition_forces_nothing() {
    let calls = Rc::new(Cell::new(0));
    let pipeline = counted(&calls)
        .map(|x| x * 3)
        .filter(|x| x % 2 == 0)
        .zip(&naturals())
        .drop(2)
        .unwrap()
        .take(4)
        .unwrap();

    assert_eq!(calls.get(), 0);
    assert_eq!(pipeline.extent(), Extent::Exact(4));

    let out = pipeline.to_list().unwrap();
    assert_eq!(out, vec![(18, 3), (24, 4), (30, 5), (36, 6)]);
    // 12 values generated to find 6 even multiples of 3
    assert_eq!(calls.get(), 12);
}

#[test]
fn get_pulls_exactly_up_to_the_index() {
    let calls = Rc::new(Cell::new(0));
    let seq = counted(&calls);
    assert_eq!(seq.get(9), Some(10));
    assert_eq!(calls.get(), 10);
}

#[test]
fn two_slices_of_one_sequence_agree() {
    let seq = fizzbuzz();
    let a = seq.slice(0, 10).unwrap();
    let b = slice(&seq, 0, 10).unwrap();
    assert_eq!(a, b);
    assert_eq!(seq.slice(5, 5).unwrap(), a[5..].to_vec());
}

#[test]
fn interleaved_cursors_do_not_interfere() {
    let seq = odds();
    let mut a = seq.cursor();
    let mut b = seq.cursor();
    assert_eq!(a.next(), Some(1));
    assert_eq!(a.next(), Some(3));
    assert_eq!(b.next(), Some(1));
    assert_eq!(a.next(), Some(5));
    assert_eq!(b.next(), Some(3));
}

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn take_zero_of_infinite_is_empty() {
    let empty = naturals().take(0).unwrap();
    assert_eq!(empty.extent(), Extent::Exact(0));
    assert!(empty.to_list().unwrap().is_empty());
}

#[test]
fn to_list_of_infinite_is_invalid_operation() {
    let err = fizzbuzz().to_list().unwrap_err();
    assert_eq!(
        err,
        SeqError::InvalidOperation {
            operation: "materialize",
            extent: Extent::Infinite,
        }
    );
}

#[test]
fn to_list_of_bounded_range_succeeds() {
    assert_eq!(Seq::from_range(1, 4).to_list().unwrap(), vec![1, 2, 3]);
}

#[test]
fn materializer_guards_unknown_extents() {
    let collatz = Seq::unfold(27u64, |n| {
        (n != 1).then(|| {
            let next = if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
            (n, next)
        })
    });

    assert_eq!(collatz.to_list().unwrap().len(), 111);
    assert_eq!(
        Materializer::with_limit(50).collect(&collatz),
        Err(SeqError::LimitExceeded { limit: 50 })
    );
}

// ============================================================================
// Property Tests
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cycle_of_repeats_source(values in prop::collection::vec(any::<u8>(), 1..8), k in 0usize..64) {
            let seq = Seq::cycle_of(values.clone()).unwrap();
            let got = seq.take(k).unwrap().to_list().unwrap();
            let expected: Vec<u8> = values.iter().copied().cycle().take(k).collect();
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn from_step_take_is_one_to_n(n in 0usize..200) {
            let got = naturals().take(n).unwrap().to_list().unwrap();
            let expected: Vec<u64> = (1..=n as u64).collect();
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn zip_length_is_min(a in 0usize..50, b in 0usize..50, k in 0usize..60) {
            let left = naturals().take(a).unwrap();
            let right = Seq::repeat('x').take(b).unwrap();
            let zipped = left.zip_with(&right, |n, c| (n, c));
            let len = zipped.take(k).unwrap().to_list().unwrap().len();
            prop_assert_eq!(len, k.min(a).min(b));
        }

        #[test]
        fn zip_of_infinite_has_requested_length(k in 0usize..100) {
            let len = fizzbuzz().zip(&naturals()).take(k).unwrap().to_list().unwrap().len();
            prop_assert_eq!(len, k);
        }

        #[test]
        fn drop_drop_is_drop_sum(a in 0usize..40, b in 0usize..40) {
            let seq = Seq::cycle_of(vec![3, 1, 4, 1, 5]).unwrap();
            let twice = seq.drop(a).unwrap().drop(b).unwrap();
            let once = seq.drop(a + b).unwrap();
            prop_assert_eq!(twice.slice(0, 20).unwrap(), once.slice(0, 20).unwrap());
        }

        #[test]
        fn drop_drop_on_finite_matches_vec(len in 0i64..30, a in 0usize..40, b in 0usize..40) {
            let seq = Seq::from_range(0, len);
            let twice = seq.drop(a).unwrap().drop(b).unwrap();
            let expected: Vec<i64> = (0..len).skip(a + b).collect();
            prop_assert_eq!(twice.extent(), Extent::Exact(expected.len()));
            prop_assert_eq!(twice.to_list().unwrap(), expected);
        }

        #[test]
        fn slice_matches_drop_then_take(offset in 0usize..100, count in 0usize..50) {
            let direct = odds().slice(offset, count).unwrap();
            let composed = odds().drop(offset).unwrap().take(count).unwrap().to_list().unwrap();
            prop_assert_eq!(direct, composed);
        }

        #[test]
        fn negative_counts_are_invalid(n in i64::MIN..0) {
            prop_assert!(
                matches!(naturals().take(n), Err(SeqError::InvalidArgument { .. })),
                "take accepted a negative count"
            );
            prop_assert!(
                matches!(naturals().drop(n), Err(SeqError::InvalidArgument { .. })),
                "drop accepted a negative count"
            );
        }

        #[test]
        fn filter_matches_vec_filter(values in prop::collection::vec(0u32..100, 0..40)) {
            let seq = Seq::from_vec(values.clone()).filter(|x| x % 3 == 0);
            let expected: Vec<u32> = values.into_iter().filter(|x| x % 3 == 0).collect();
            prop_assert_eq!(seq.to_list().unwrap(), expected);
        }
    }
}
