//! Property-based tests for the invariants the design calls out explicitly:
//! the queue's count never leaves `[0, capacity]`, and what comes out is a
//! prefix of what went in, in order.

use linepipe_core::BoundedQueue;
use proptest::prelude::*;

proptest! {
    /// `0 <= count <= capacity` at every quiescent point, for any sequence
    /// of puts followed by gets on a single-threaded caller (no blocking
    /// possible here, so this only exercises the accounting, not the wait
    /// discipline — the threaded tests cover that).
    #[test]
    fn count_stays_within_capacity(
        capacity in 1usize..32,
        puts in 0usize..64,
    ) {
        let queue = BoundedQueue::new(capacity).unwrap();
        let actual_puts = puts.min(capacity);
        for i in 0..actual_puts {
            queue.put(i.to_string());
            prop_assert!(queue.len() <= capacity);
        }
        for _ in 0..actual_puts {
            queue.get();
            prop_assert!(queue.len() <= capacity);
        }
        prop_assert_eq!(queue.len(), 0);
    }

    /// The sequence of strings returned by successive `get` calls is a
    /// prefix, in order, of the sequence accepted by successive `put`
    /// calls.
    #[test]
    fn get_is_fifo_prefix_of_put(
        items in prop::collection::vec(".{0,8}", 0..40),
        capacity in 1usize..16,
    ) {
        let queue = BoundedQueue::new(capacity).unwrap();
        let mut drained = Vec::new();

        for chunk in items.chunks(capacity.max(1)) {
            for item in chunk {
                queue.put(item.clone());
            }
            for _ in chunk {
                drained.push(queue.get().unwrap());
            }
        }

        prop_assert_eq!(drained, items);
    }
}
