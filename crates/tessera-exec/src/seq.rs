//! Sequential strategies shared by every backend for nested loops.

use std::ops::Range;

use crate::strategy::{ChunkStrategy, InnerExecStrategy, ReduceStrategy};

/// Visits chunks one after another on the calling thread.
pub struct SeqChunk;

impl ChunkStrategy for SeqChunk {
    const NAME: &'static str = "seq-chunk";

    fn for_each_chunk<F>(range: Range<usize>, chunk_len: usize, mut body: F)
    where
        F: FnMut(Range<usize>),
    {
        let step = chunk_len.max(1);
        let mut start = range.start;
        while start < range.end {
            let end = range.end.min(start.saturating_add(step));
            body(start..end);
            start = end;
        }
    }
}

/// Runs a loop in index order on the calling thread.
pub struct SeqExec;

impl InnerExecStrategy for SeqExec {
    const NAME: &'static str = "seq-exec";

    #[inline]
    fn for_each<F>(range: Range<usize>, body: F)
    where
        F: FnMut(usize),
    {
        range.for_each(body);
    }
}

/// Left fold in index order: `combine(...combine(identity, m0)..., mN)`.
pub struct SeqReduce;

impl ReduceStrategy for SeqReduce {
    const NAME: &'static str = "seq-reduce";

    #[inline]
    fn reduce<T, M, C>(range: Range<usize>, identity: T, map: M, combine: C) -> T
    where
        T: Copy + Send + Sync,
        M: Fn(usize) -> T + Send + Sync,
        C: Fn(T, T) -> T + Send + Sync,
    {
        range.map(map).fold(identity, combine)
    }
}
