//! Property-based tests for the capped deque using proptest
//!
//! Random operation sequences are replayed against both the deque and a plain
//! `VecDeque` model, and the two must agree after every step.

use super::Deque;
use crate::Error;
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Op {
    Append(u8),
    AppendLeft(u8),
    Pop,
    PopLeft,
    Extend(Vec<u8>),
    Remove(u8),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u8>().prop_map(Op::Append),
        4 => any::<u8>().prop_map(Op::AppendLeft),
        2 => Just(Op::Pop),
        2 => Just(Op::PopLeft),
        1 => prop::collection::vec(any::<u8>(), 0..8).prop_map(Op::Extend),
        // Small value range so removals actually hit
        2 => (0u8..8).prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

/// Reference model: same front/back convention as `Deque`
fn model_insert(model: &mut VecDeque<u8>, capacity: usize, value: u8, front: bool) {
    if capacity > 0 && model.len() == capacity {
        if front {
            model.pop_back();
        } else {
            model.pop_front();
        }
    }
    if front {
        model.push_front(value);
    } else {
        model.push_back(value);
    }
}

proptest! {
    #[test]
    fn test_matches_model(
        capacity in 0usize..6,
        ops in prop::collection::vec(op_strategy(), 1..200)
    ) {
        let deque = Deque::bounded(capacity);
        let mut model: VecDeque<u8> = VecDeque::new();

        for op in ops {
            match op {
                Op::Append(v) => {
                    deque.append(v);
                    model_insert(&mut model, capacity, v, true);
                }
                Op::AppendLeft(v) => {
                    deque.append_left(v);
                    model_insert(&mut model, capacity, v, false);
                }
                Op::Pop => {
                    prop_assert_eq!(deque.pop(), model.pop_front().ok_or(Error::EmptyQueue));
                }
                Op::PopLeft => {
                    prop_assert_eq!(deque.pop_left(), model.pop_back().ok_or(Error::EmptyQueue));
                }
                Op::Extend(values) => {
                    deque.extend(values.iter().copied());
                    for v in values {
                        model_insert(&mut model, capacity, v, true);
                    }
                }
                Op::Remove(v) => {
                    let expected = if model.is_empty() {
                        Err(Error::EmptyQueue)
                    } else {
                        let position = model.iter().position(|item| *item == v);
                        position
                            .and_then(|index| model.remove(index))
                            .ok_or(Error::NotFound)
                    };
                    prop_assert_eq!(deque.remove(&v), expected);
                }
                Op::Clear => {
                    deque.clear();
                    model.clear();
                }
            }

            if capacity > 0 {
                prop_assert!(deque.len() <= capacity);
            }
            prop_assert_eq!(deque.len(), model.len());
        }

        prop_assert_eq!(deque.items(), model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_bounded_retains_most_recent(
        capacity in 1usize..20,
        values in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let front = Deque::bounded(capacity);
        let back = Deque::bounded(capacity);
        for &v in &values {
            front.append(v);
            back.append_left(v);
        }

        let kept = values.len().min(capacity);
        let recent = &values[values.len() - kept..];

        let mut expected_front = recent.to_vec();
        expected_front.reverse();
        prop_assert_eq!(front.items(), expected_front);
        prop_assert_eq!(back.items(), recent.to_vec());
    }

    #[test]
    fn test_lifo_and_fifo(values in prop::collection::vec(any::<i32>(), 1..50)) {
        let stack = Deque::unbounded();
        let queue = Deque::unbounded();
        for &v in &values {
            stack.append(v);
            queue.append(v);
        }

        for &v in values.iter().rev() {
            prop_assert_eq!(stack.pop(), Ok(v));
        }
        for &v in &values {
            prop_assert_eq!(queue.pop_left(), Ok(v));
        }
        prop_assert_eq!(stack.pop(), Err(Error::EmptyQueue));
        prop_assert_eq!(queue.pop_left(), Err(Error::EmptyQueue));
    }

    #[test]
    fn test_remove_decrements_count_by_one(
        values in prop::collection::vec(0u8..5, 0..40),
        target in 0u8..5
    ) {
        let deque = Deque::unbounded();
        deque.extend(values.iter().copied());

        let before = deque.count(&target);
        let result = deque.remove(&target);
        let after = deque.count(&target);

        if before > 0 {
            prop_assert_eq!(result, Ok(target));
            prop_assert_eq!(after, before - 1);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(after, 0);
            prop_assert_eq!(deque.len(), values.len());
        }
    }
}
