//! Grid launch: hands blocks of work to a fixed set of worker threads.
//!
//! Blocks are queued on a channel up front and workers pull from it until
//! it drains, the way an accelerator schedules thread blocks onto its
//! multiprocessors. Results are returned in block order regardless of which
//! worker ran which block.
//!
//! The workers live in one process-wide pool built on the first launch and
//! reused by every later one, so a launch costs a queue round-trip rather
//! than a thread spawn per worker.

use std::ops::Range;
use std::sync::OnceLock;

use crossbeam_channel::bounded;
use log::{trace, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};

static WORKERS: OnceLock<usize> = OnceLock::new();
static POOL: OnceLock<Option<ThreadPool>> = OnceLock::new();

/// Number of worker threads available to a launch.
fn available_workers() -> usize {
    *WORKERS.get_or_init(|| {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    })
}

/// The shared grid workers, or `None` if the pool could not be started.
fn grid_pool() -> Option<&'static ThreadPool> {
    POOL.get_or_init(|| {
        ThreadPoolBuilder::new()
            .num_threads(available_workers())
            .thread_name(|i| format!("tessera-grid-{i}"))
            .build()
            .map_err(|e| warn!("grid pool unavailable, launches run inline: {e}"))
            .ok()
    })
    .as_ref()
}

/// Split `range` into consecutive blocks of at most `block` indices.
pub(crate) fn block_ranges(range: Range<usize>, block: usize) -> Vec<Range<usize>> {
    let block = block.max(1);
    let mut blocks = Vec::with_capacity(range.len().div_ceil(block));
    let mut start = range.start;
    while start < range.end {
        let end = range.end.min(start.saturating_add(block));
        blocks.push(start..end);
        start = end;
    }
    blocks
}

/// Run `kernel` once per work item and collect the results in item order.
///
/// A single block runs inline on the caller. A panic inside `kernel`
/// propagates to the caller once every worker has stopped.
pub(crate) fn dispatch<W, R, F>(work: Vec<W>, kernel: F) -> Vec<R>
where
    W: Send,
    R: Send,
    F: Fn(W) -> R + Sync,
{
    let blocks = work.len();
    let workers = available_workers().min(blocks);
    trace!("grid launch: {blocks} blocks on {workers} workers");

    let pool = match grid_pool() {
        Some(pool) if workers > 1 => pool,
        _ => return work.into_iter().map(kernel).collect(),
    };

    // Both channels hold every block, so no send can block or fail while
    // the receivers are alive.
    let (work_tx, work_rx) = bounded::<(usize, W)>(blocks);
    let (done_tx, done_rx) = bounded::<(usize, R)>(blocks);
    for item in work.into_iter().enumerate() {
        if work_tx.send(item).is_err() {
            break;
        }
    }
    drop(work_tx);

    pool.scope(|s| {
        for _ in 0..workers {
            let work_rx = work_rx.clone();
            let done_tx = done_tx.clone();
            let kernel = &kernel;
            s.spawn(move |_| {
                for (idx, item) in work_rx.iter() {
                    if done_tx.send((idx, kernel(item))).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(done_tx);

    let mut slots: Vec<Option<R>> = (0..blocks).map(|_| None).collect();
    for (idx, result) in done_rx.try_iter() {
        slots[idx] = Some(result);
    }
    slots.into_iter().flatten().collect()
}
