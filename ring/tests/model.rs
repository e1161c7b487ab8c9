#![cfg(not(feature = "loom"))]

use std::collections::VecDeque;

use proptest::prelude::*;
use quotaring::{LockedQueue, Ring};

#[derive(Debug, Clone)]
enum Op {
    Push(u16),
    Pop,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![any::<u16>().prop_map(Op::Push), Just(Op::Pop)]
}

proptest! {
    /// Single-threaded, the ring behaves like a FIFO with a hard limit.
    #[test]
    fn test_sequential_ops_match_bounded_fifo(
        capacity in -4i64..12,
        ops in prop::collection::vec(op(), 0..200),
    ) {
        let ring = Ring::<_, LockedQueue<_>>::with_capacity(capacity);
        let limit = capacity.max(0) as usize;
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    let result = ring.push(v);
                    if model.len() < limit {
                        prop_assert!(result.is_ok());
                        model.push_back(v);
                    } else {
                        prop_assert_eq!(result.unwrap_err().into_inner(), v);
                    }
                }
                Op::Pop => {
                    prop_assert_eq!(ring.pop(), model.pop_front());
                }
            }
            prop_assert_eq!(ring.occupancy(), model.len() as i64);
            prop_assert_eq!(ring.is_full(), model.len() >= limit);
        }
    }
}
