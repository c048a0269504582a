//! Block-parallel accelerator policy set.
//!
//! | Tag | Binding |
//! |-----|---------|
//! | chunk | [`SeqChunk`] |
//! | inner-exec | [`SeqExec`] |
//! | inner-reduce | [`SeqReduce`] |
//! | exec | [`BlockExec<EXEC_BLOCK>`](BlockExec) |
//! | reduce | [`BlockReduce<REDUCE_BLOCK>`](BlockReduce) |
//! | atomic | [`DeviceAtomic`] |
//!
//! Loops are cut into blocks of a fixed number of lanes and the blocks are
//! launched as a grid. Lanes inside a block run sequentially on the worker
//! that owns the block. Block sizes change scheduling granularity only:
//! `for_each` results never depend on them, and reductions over exactly
//! associative combines do not either.
//!
//! Reductions combine each block with a pairwise tree over its lanes, then
//! fold the block partials in block order. For a fixed reduction block size
//! the combine order is therefore fixed, independent of worker count.

mod grid;

use std::ops::Range;

use crate::atomic::AtomicCell;
use crate::build_config::{Backend, DEFAULT_BLOCK_SIZE, MAX_BLOCK_SIZE};
use crate::policy::ExecPolicy;
use crate::seq::{SeqChunk, SeqExec, SeqReduce};
use crate::strategy::{AtomicStrategy, ExecStrategy, ReduceStrategy};

/// Rejects block sizes outside `1..=MAX_BLOCK_SIZE` when a strategy is
/// instantiated, so a bad size fails the build rather than a launch.
struct BlockSize<const BLOCK: usize>;

impl<const BLOCK: usize> BlockSize<BLOCK> {
    const VALID: () = assert!(
        BLOCK > 0 && BLOCK <= MAX_BLOCK_SIZE,
        "accelerator block size must be in 1..=1024"
    );
}

/// Outer loop launched as a grid of `BLOCK`-lane blocks.
pub struct BlockExec<const BLOCK: usize>;

impl<const BLOCK: usize> ExecStrategy for BlockExec<BLOCK> {
    const NAME: &'static str = "block-parallel-for";

    fn for_each<F>(range: Range<usize>, body: F)
    where
        F: Fn(usize) + Send + Sync,
    {
        let () = BlockSize::<BLOCK>::VALID;
        grid::dispatch(grid::block_ranges(range, BLOCK), |block| {
            block.for_each(&body);
        });
    }

    fn for_each_mut<T, F>(data: &mut [T], body: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Send + Sync,
    {
        let () = BlockSize::<BLOCK>::VALID;
        let blocks: Vec<(usize, &mut [T])> = data.chunks_mut(BLOCK).enumerate().collect();
        grid::dispatch(blocks, |(block, lanes)| {
            let base = block * BLOCK;
            for (lane, slot) in lanes.iter_mut().enumerate() {
                body(base + lane, slot);
            }
        });
    }
}

/// Block-parallel reduction with `BLOCK` lanes per block.
pub struct BlockReduce<const BLOCK: usize>;

impl<const BLOCK: usize> ReduceStrategy for BlockReduce<BLOCK> {
    const NAME: &'static str = "block-reduce";

    fn reduce<T, M, C>(range: Range<usize>, identity: T, map: M, combine: C) -> T
    where
        T: Copy + Send + Sync,
        M: Fn(usize) -> T + Send + Sync,
        C: Fn(T, T) -> T + Send + Sync,
    {
        let () = BlockSize::<BLOCK>::VALID;
        let partials = grid::dispatch(grid::block_ranges(range, BLOCK), |block| {
            let mut lanes: Vec<T> = block.map(&map).collect();
            tree_combine(&mut lanes, identity, &combine)
        });
        partials
            .into_iter()
            .fold(identity, |acc, partial| combine(acc, partial))
    }
}

/// Pairwise tree combine of one block's lanes.
///
/// Lanes are padded with `identity` to a power of two, then lane `i` absorbs
/// lane `i + half` until one value remains.
fn tree_combine<T, C>(lanes: &mut Vec<T>, identity: T, combine: &C) -> T
where
    T: Copy,
    C: Fn(T, T) -> T,
{
    let mut width = lanes.len().next_power_of_two();
    lanes.resize(width, identity);
    while width > 1 {
        let half = width / 2;
        for lane in 0..half {
            lanes[lane] = combine(lanes[lane], lanes[lane + half]);
        }
        width = half;
    }
    lanes.first().copied().unwrap_or(identity)
}

/// Device-native atomic: a 64-bit compare-and-swap loop for every type.
///
/// Compare-and-swap is the one read-modify-write primitive accelerators
/// expose at every width, so float and integer cells share one path.
pub struct DeviceAtomic;

impl AtomicStrategy for DeviceAtomic {
    const NAME: &'static str = "device-atomic";

    #[inline]
    fn fetch_add<C: AtomicCell>(cell: &C, value: C::Value) -> C::Value {
        cell.fetch_add_cas(value)
    }
}

/// The block-parallel accelerator policy set.
///
/// `EXEC_BLOCK` sizes general parallel loops, `REDUCE_BLOCK` sizes
/// reductions. Both default to 128 lanes.
#[derive(Clone, Copy, Debug, Default)]
pub struct DevicePolicy<
    const EXEC_BLOCK: usize = DEFAULT_BLOCK_SIZE,
    const REDUCE_BLOCK: usize = DEFAULT_BLOCK_SIZE,
>;

impl<const EXEC_BLOCK: usize, const REDUCE_BLOCK: usize> ExecPolicy
    for DevicePolicy<EXEC_BLOCK, REDUCE_BLOCK>
{
    const BACKEND: Backend = Backend::BlockParallelAccelerator;

    type Chunk = SeqChunk;
    type InnerExec = SeqExec;
    type InnerReduce = SeqReduce;
    type Exec = BlockExec<EXEC_BLOCK>;
    type Reduce = BlockReduce<REDUCE_BLOCK>;
    type Atomic = DeviceAtomic;
}
