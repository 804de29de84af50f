//! Stress tests for prodstore.
//!
//! These helpers drive a store from many threads at once and verify that
//! the final state is intact.

use crate::fixtures::ctx;
use prodstore_core::{ProductStore, ProductUpdate};
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Result of a stress test run.
#[derive(Debug, Clone)]
pub struct StressTestResult {
    /// Total operations performed.
    pub total_ops: usize,
    /// Successful operations.
    pub successful_ops: usize,
    /// Failed operations.
    pub failed_ops: usize,
    /// Total duration.
    pub duration: Duration,
    /// Operations per second.
    pub ops_per_second: f64,
}

impl StressTestResult {
    /// Creates a new result.
    pub fn new(successful: usize, failed: usize, duration: Duration) -> Self {
        let total = successful + failed;
        let ops_per_second = if duration.as_secs_f64() > 0.0 {
            total as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        Self {
            total_ops: total,
            successful_ops: successful,
            failed_ops: failed,
            duration,
            ops_per_second,
        }
    }

}

impl fmt::Display for StressTestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ops ({} ok, {} failed) in {:?}, {:.0} ops/sec",
            self.total_ops, self.successful_ops, self.failed_ops, self.duration, self.ops_per_second
        )
    }
}

/// Configuration for stress tests.
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Operations per thread.
    pub operations: usize,
    /// Number of concurrent threads.
    pub threads: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            operations: 1_000,
            threads: 4,
        }
    }
}

/// Runs concurrent `add` calls from every thread.
///
/// Returns the run result and every id that was handed out.
pub fn stress_concurrent_adds(
    store: Arc<dyn ProductStore>,
    config: &StressConfig,
) -> (StressTestResult, Vec<String>) {
    let failed = Arc::new(AtomicUsize::new(0));
    let start = Instant::now();

    let handles: Vec<_> = (0..config.threads)
        .map(|_| {
            let store = Arc::clone(&store);
            let failed = Arc::clone(&failed);
            let operations = config.operations;

            thread::spawn(move || {
                let mut ids = Vec::with_capacity(operations);
                for _ in 0..operations {
                    match store.add(&ctx()) {
                        Ok(id) => ids.push(id),
                        Err(_) => {
                            failed.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
                ids
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.extend(handle.join().expect("add thread panicked"));
    }

    let result = StressTestResult::new(ids.len(), failed.load(Ordering::Relaxed), start.elapsed());
    (result, ids)
}

/// Runs writers and scanners side by side over a pre-populated store.
///
/// Writers cycle through update, get and add on their own slice of
/// products. Scanners repeatedly call `get_all` and count any snapshot that
/// is not strictly ordered as a failure.
pub fn stress_mixed_operations(
    store: Arc<dyn ProductStore>,
    config: &StressConfig,
) -> StressTestResult {
    let seeded: Vec<String> = (0..config.threads * 8)
        .map(|_| store.add(&ctx()).expect("seeding add should succeed"))
        .collect();
    let seeded = Arc::new(seeded);

    let successful = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));
    let start = Instant::now();

    let mut handles = Vec::new();
    for t in 0..config.threads {
        let writer_store = Arc::clone(&store);
        let writer_seeded = Arc::clone(&seeded);
        let writer_ok = Arc::clone(&successful);
        let writer_failed = Arc::clone(&failed);
        let operations = config.operations;
        let threads = config.threads;

        handles.push(thread::spawn(move || {
            let mine: Vec<&String> = writer_seeded.iter().skip(t).step_by(threads).collect();
            for i in 0..operations {
                let id = mine[i % mine.len()];
                let result = match i % 3 {
                    0 => {
                        let update = ProductUpdate::new(id.as_str()).with_price(1.0 + i as f64);
                        writer_store.update(&ctx(), &update)
                    }
                    1 => writer_store.get(&ctx(), id).map(|_| ()),
                    _ => writer_store.add(&ctx()).map(|_| ()),
                };
                match result {
                    Ok(()) => writer_ok.fetch_add(1, Ordering::Relaxed),
                    Err(_) => writer_failed.fetch_add(1, Ordering::Relaxed),
                };
            }
        }));

        let scanner_store = Arc::clone(&store);
        let scanner_ok = Arc::clone(&successful);
        let scanner_failed = Arc::clone(&failed);
        handles.push(thread::spawn(move || {
            for _ in 0..operations / 10 + 1 {
                let ordered = scanner_store
                    .get_all(&ctx())
                    .map(|all| all.windows(2).all(|w| w[0].id < w[1].id))
                    .unwrap_or(false);
                if ordered {
                    scanner_ok.fetch_add(1, Ordering::Relaxed);
                } else {
                    scanner_failed.fetch_add(1, Ordering::Relaxed);
                }
            }
        }));
    }

    for handle in handles {
        handle.join().expect("stress thread panicked");
    }

    StressTestResult::new(
        successful.load(Ordering::Relaxed),
        failed.load(Ordering::Relaxed),
        start.elapsed(),
    )
}

/// Checks that a store's full scan is strictly ascending and duplicate-free.
pub fn verify_integrity(store: &dyn ProductStore) -> Result<usize, String> {
    let all = store
        .get_all(&ctx())
        .map_err(|e| format!("get_all failed: {e}"))?;

    let mut seen = HashSet::with_capacity(all.len());
    for product in &all {
        if product.id.is_empty() {
            return Err("product with empty id".to_string());
        }
        if !seen.insert(product.id.as_str()) {
            return Err(format!("duplicate id {}", product.id));
        }
    }
    if let Some(w) = all.windows(2).find(|w| w[0].id >= w[1].id) {
        return Err(format!("out of order: {} before {}", w[0].id, w[1].id));
    }
    if all.len() != store.len() {
        return Err(format!("scan has {}, len() is {}", all.len(), store.len()));
    }
    Ok(all.len())
}
