use std::sync::Arc;
use std::thread;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quotaring::{BackingQueue, LockedQueue, Ring};

const OPS_PER_ITER: u64 = 10_000;

fn push_pop_cycle<Q: BackingQueue<u64>>(ring: &Ring<u64, Q>) {
    for i in 0..OPS_PER_ITER {
        if ring.push(black_box(i)).is_err() {
            black_box(ring.pop());
        }
    }
    while ring.pop().is_some() {}
}

/// Single thread: push until full, then pop one per rejected push.
fn bench_single_thread(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_single_thread");
    group.throughput(Throughput::Elements(OPS_PER_ITER));

    for capacity in [8i64, 1024] {
        group.bench_with_input(BenchmarkId::new("segqueue", capacity), &capacity, |b, &cap| {
            let ring = Ring::new(cap);
            b.iter(|| push_pop_cycle(&ring))
        });
        group.bench_with_input(BenchmarkId::new("locked", capacity), &capacity, |b, &cap| {
            let ring = Ring::<_, LockedQueue<_>>::with_capacity(cap);
            b.iter(|| push_pop_cycle(&ring))
        });
    }

    group.finish();
}

fn contended<Q>(ring: Arc<Ring<u64, Q>>, threads: usize)
where
    Q: BackingQueue<u64> + Send + Sync + 'static,
{
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let ring = ring.clone();
            thread::spawn(move || push_pop_cycle(&ring))
        })
        .collect();
    for h in handles {
        let _ = h.join();
    }
}

/// Every thread runs the same push/pop cycle against one shared ring.
fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_contended");

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements(OPS_PER_ITER * threads as u64));
        group.bench_with_input(BenchmarkId::new("segqueue", threads), &threads, |b, &n| {
            let ring = Arc::new(Ring::new(256));
            b.iter(|| contended(ring.clone(), n))
        });
        group.bench_with_input(BenchmarkId::new("locked", threads), &threads, |b, &n| {
            let ring = Arc::new(Ring::<_, LockedQueue<_>>::with_capacity(256));
            b.iter(|| contended(ring.clone(), n))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_thread, bench_contended);
criterion_main!(benches);
