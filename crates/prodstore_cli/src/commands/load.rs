//! Load command implementation.

use prodstore_core::{Context, ProductStore};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Adds `adds` products from each of `threads` threads, then checks that the
/// store holds exactly those products, in order.
pub fn run(
    store: Arc<dyn ProductStore>,
    threads: usize,
    adds: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    if threads == 0 {
        return Err("threads must be at least 1".into());
    }

    tracing::info!(backend = %store.backend(), threads, adds, "load started");
    let start = Instant::now();

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let ctx = Context::background();
                (0..adds).map(|_| store.add(&ctx)).collect::<Result<Vec<_>, _>>()
            })
        })
        .collect();

    let mut issued = HashSet::with_capacity(threads * adds);
    for handle in handles {
        let ids = handle.join().map_err(|_| "writer thread panicked")??;
        issued.extend(ids);
    }
    let elapsed = start.elapsed();

    let all = store.get_all(&Context::background())?;
    let ordered = all.windows(2).all(|w| w[0].id < w[1].id);
    let matches = all.len() == issued.len() && all.iter().all(|p| issued.contains(&p.id));

    println!("Backend: {}", store.backend());
    println!("Products added: {}", issued.len());
    println!("Duration: {:?}", elapsed);
    println!(
        "Throughput: {:.2} adds/sec",
        issued.len() as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );
    println!("Scan ordered: {ordered}");
    println!("Scan matches issued ids: {matches}");

    if !(ordered && matches && issued.len() == threads * adds) {
        return Err("store state does not match the issued ids".into());
    }
    Ok(())
}
