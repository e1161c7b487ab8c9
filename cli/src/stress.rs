//! Multi-threaded soak run against a single ring.
//!
//! Producers push unique tokens and never retry a rejected push. Consumers
//! pop until every producer is done and the ring reads empty. After all
//! threads join, the main thread drains the ring and checks that the
//! occupancy counter settled to exactly what was admitted and not yet
//! removed.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use quotaring::Ring;
use serde::Serialize;
use thiserror::Error;

use crate::config::{ConfigError, StressConfig};

#[derive(Error, Debug)]
pub enum StressError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("invariant violated: {0}")]
    InvariantViolated(String),

    #[error("{0} thread panicked")]
    WorkerPanicked(&'static str),
}

#[derive(Debug, Clone, Serialize)]
pub struct StressReport {
    pub config: StressConfig,
    pub capacity: i64,
    pub accepted: usize,
    pub rejected: usize,
    pub popped: usize,
    /// Items still in the ring once all threads finished.
    pub drained: usize,
    pub elapsed_ms: u64,
    pub pushes_per_sec: f64,
}

struct ProducerOutcome {
    accepted: Vec<u64>,
    rejected: usize,
}

pub fn run(config: &StressConfig) -> Result<StressReport, StressError> {
    config.validate()?;

    let ring = Arc::new(Ring::new(config.capacity));
    let producers_done = Arc::new(AtomicBool::new(false));

    tracing::info!(
        "Starting stress run: capacity {}, {} producers x {} ops, {} consumers",
        ring.capacity(),
        config.producers,
        config.ops_per_producer,
        config.consumers
    );

    let started = Instant::now();

    let producers: Vec<JoinHandle<ProducerOutcome>> = (0..config.producers)
        .map(|id| {
            let ring = ring.clone();
            let ops = config.ops_per_producer;
            thread::spawn(move || produce(&ring, id, ops))
        })
        .collect();

    let consumers: Vec<JoinHandle<Vec<u64>>> = (0..config.consumers)
        .map(|id| {
            let ring = ring.clone();
            let done = producers_done.clone();
            thread::spawn(move || consume(&ring, id, &done))
        })
        .collect();

    let mut admitted = HashSet::new();
    let mut rejected = 0;
    for handle in producers {
        let outcome = handle
            .join()
            .map_err(|_| StressError::WorkerPanicked("producer"))?;
        rejected += outcome.rejected;
        admitted.extend(outcome.accepted);
    }
    producers_done.store(true, Ordering::Release);

    let mut removed = HashSet::new();
    let mut popped = 0;
    for handle in consumers {
        let items = handle
            .join()
            .map_err(|_| StressError::WorkerPanicked("consumer"))?;
        popped += items.len();
        record_removed(&mut removed, items)?;
    }

    let elapsed = started.elapsed();
    let accepted = admitted.len();

    check(accepted + rejected == config.total_attempts(), || {
        format!(
            "{} accepted + {} rejected != {} attempts",
            accepted,
            rejected,
            config.total_attempts()
        )
    })?;

    let settled = ring.occupancy();
    check(settled == accepted as i64 - popped as i64, || {
        format!(
            "occupancy {} after join, expected {} accepted - {} popped",
            settled, accepted, popped
        )
    })?;

    check_within_capacity("settled occupancy", settled, ring.capacity())?;

    let leftovers: Vec<u64> = std::iter::from_fn(|| ring.pop()).collect();
    let drained = leftovers.len();
    record_removed(&mut removed, leftovers)?;

    check_within_capacity("drained items", drained as i64, ring.capacity())?;
    check(drained as i64 == settled, || {
        format!("drained {} items but occupancy was {}", drained, settled)
    })?;
    check(ring.occupancy() == 0, || {
        format!("occupancy {} after draining", ring.occupancy())
    })?;
    check(removed == admitted, || {
        format!(
            "{} items removed, {} admitted, sets differ",
            removed.len(),
            admitted.len()
        )
    })?;

    let secs = elapsed.as_secs_f64();
    let pushes_per_sec = if secs > 0.0 {
        config.total_attempts() as f64 / secs
    } else {
        0.0
    };

    Ok(StressReport {
        config: config.clone(),
        capacity: ring.capacity(),
        accepted,
        rejected,
        popped,
        drained,
        elapsed_ms: elapsed.as_millis() as u64,
        pushes_per_sec,
    })
}

fn produce(ring: &Ring<u64>, id: usize, ops: usize) -> ProducerOutcome {
    let base = (id * ops) as u64;
    let mut accepted = Vec::new();
    let mut rejected = 0;

    for i in 0..ops as u64 {
        let token = base + i;
        match ring.push(token) {
            Ok(()) => accepted.push(token),
            Err(_) => rejected += 1,
        }
    }

    tracing::debug!(
        "Producer {} finished: {} accepted, {} rejected",
        id,
        accepted.len(),
        rejected
    );
    ProducerOutcome { accepted, rejected }
}

fn consume(ring: &Ring<u64>, id: usize, producers_done: &AtomicBool) -> Vec<u64> {
    let mut items = Vec::new();
    loop {
        match ring.pop() {
            Some(token) => items.push(token),
            None if producers_done.load(Ordering::Acquire) => break,
            None => thread::yield_now(),
        }
    }

    tracing::debug!("Consumer {} finished: {} popped", id, items.len());
    items
}

fn record_removed(removed: &mut HashSet<u64>, items: Vec<u64>) -> Result<(), StressError> {
    for token in items {
        if !removed.insert(token) {
            return Err(StressError::InvariantViolated(format!(
                "token {} removed twice",
                token
            )));
        }
    }
    Ok(())
}

fn check_within_capacity(what: &str, count: i64, capacity: i64) -> Result<(), StressError> {
    check(count <= capacity, || {
        format!("{} {} exceeds capacity {}", what, count, capacity)
    })
}

fn check(ok: bool, describe: impl FnOnce() -> String) -> Result<(), StressError> {
    if ok {
        Ok(())
    } else {
        Err(StressError::InvariantViolated(describe()))
    }
}
