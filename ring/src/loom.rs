#[cfg(all(test, feature = "loom"))]
mod tests {
    use crate::{LockedQueue, Ring};
    use loom::{model::Builder, sync::Arc, thread};

    fn builder() -> Builder {
        let mut builder = Builder::new();
        if builder.preemption_bound.is_none() {
            builder.preemption_bound = Some(3);
        }
        builder
    }

    #[test]
    fn test_racing_producers_at_boundary() {
        builder().check(|| {
            let ring = Arc::new(Ring::<_, LockedQueue<_>>::with_capacity(1));

            let handles: Vec<_> = (0..2u32)
                .map(|i| {
                    let ring = ring.clone();
                    thread::spawn(move || ring.push(i).is_ok())
                })
                .collect();
            let admitted = handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|ok| *ok)
                .count();

            assert_eq!(admitted, 1);
            assert_eq!(ring.occupancy(), 1);
            assert!(ring.pop().is_some());
            assert_eq!(ring.occupancy(), 0);
        });
    }

    #[test]
    fn test_push_races_pop() {
        builder().check(|| {
            let ring = Arc::new(Ring::<_, LockedQueue<_>>::with_capacity(1));
            ring.push(0u32).unwrap();

            let producer = {
                let ring = ring.clone();
                thread::spawn(move || ring.push(1).is_ok())
            };
            let consumer = {
                let ring = ring.clone();
                thread::spawn(move || ring.pop())
            };

            let admitted = producer.join().unwrap();
            assert_eq!(consumer.join().unwrap(), Some(0));

            let remaining = std::iter::from_fn(|| ring.pop()).count();
            assert_eq!(remaining, usize::from(admitted));
            assert_eq!(ring.occupancy(), 0);
        });
    }

    #[test]
    fn test_rejected_push_never_leaks() {
        builder().check(|| {
            let ring = Arc::new(Ring::<_, LockedQueue<_>>::with_capacity(0));

            let handles: Vec<_> = (0..2u32)
                .map(|i| {
                    let ring = ring.clone();
                    thread::spawn(move || ring.push(i).is_err())
                })
                .collect();
            for h in handles {
                assert!(h.join().unwrap());
            }

            assert_eq!(ring.occupancy(), 0);
            assert_eq!(ring.pop(), None);
        });
    }
}
