//! Threaded-host policy set, built on rayon's global thread pool.
//!
//! | Tag | Binding |
//! |-----|---------|
//! | chunk | [`SeqChunk`] |
//! | inner-exec | [`SeqExec`] |
//! | inner-reduce | [`SeqReduce`] |
//! | exec | [`ThreadParallelFor`] |
//! | reduce | [`ThreadReduce`] |
//! | atomic | [`AutoAtomic`] |
//!
//! Rayon's work stealing decides how a reduction is split, so the order in
//! which floating-point partials are combined can vary between runs and
//! thread counts. Results are reproducible only for exactly associative
//! combines (integer sums, min/max, sums of exactly representable values).

use std::ops::Range;

use log::trace;
use rayon::prelude::*;

use crate::atomic::AtomicCell;
use crate::build_config::Backend;
use crate::policy::ExecPolicy;
use crate::seq::{SeqChunk, SeqExec, SeqReduce};
use crate::strategy::{AtomicStrategy, ExecStrategy, ReduceStrategy};

/// Outer loop distributed over the rayon thread pool.
pub struct ThreadParallelFor;

impl ExecStrategy for ThreadParallelFor {
    const NAME: &'static str = "thread-parallel-for";

    fn for_each<F>(range: Range<usize>, body: F)
    where
        F: Fn(usize) + Send + Sync,
    {
        trace!("{}: {} iterations", Self::NAME, range.len());
        range.into_par_iter().for_each(body);
    }

    fn for_each_mut<T, F>(data: &mut [T], body: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Send + Sync,
    {
        trace!("{}: {} elements", Self::NAME, data.len());
        data.par_iter_mut()
            .enumerate()
            .for_each(|(i, slot)| body(i, slot));
    }
}

/// Thread-safe associative combine over the rayon thread pool.
pub struct ThreadReduce;

impl ReduceStrategy for ThreadReduce {
    const NAME: &'static str = "thread-reduce";

    fn reduce<T, M, C>(range: Range<usize>, identity: T, map: M, combine: C) -> T
    where
        T: Copy + Send + Sync,
        M: Fn(usize) -> T + Send + Sync,
        C: Fn(T, T) -> T + Send + Sync,
    {
        trace!("{}: {} iterations", Self::NAME, range.len());
        range.into_par_iter().map(map).reduce(|| identity, combine)
    }
}

/// Best atomic the host offers for the cell's type.
///
/// Integer cells use a single hardware `fetch_add`; float cells fall back
/// to a compare-and-swap update.
pub struct AutoAtomic;

impl AtomicStrategy for AutoAtomic {
    const NAME: &'static str = "auto-atomic";

    #[inline]
    fn fetch_add<C: AtomicCell>(cell: &C, value: C::Value) -> C::Value {
        cell.fetch_add_native(value)
    }
}

/// The threaded-host policy set.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostPolicy;

impl ExecPolicy for HostPolicy {
    const BACKEND: Backend = Backend::ThreadedHost;

    type Chunk = SeqChunk;
    type InnerExec = SeqExec;
    type InnerReduce = SeqReduce;
    type Exec = ThreadParallelFor;
    type Reduce = ThreadReduce;
    type Atomic = AutoAtomic;
}
