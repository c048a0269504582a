//! The six strategy traits an [`ExecPolicy`](crate::ExecPolicy) binds.
//!
//! Strategies are zero-sized types with associated functions only. A kernel
//! names them through the policy's associated types (`P::Exec`,
//! `P::Reduce`, ...), so the concrete mechanism is fixed at monomorphization
//! and there is no runtime dispatch.
//!
//! # Loop bodies
//!
//! Outer loop bodies are `Fn + Send + Sync`: they may run concurrently and
//! in any order, and cannot mutate captured state. Per-element output goes
//! through [`ExecStrategy::for_each_mut`], which hands each iteration
//! exclusive access to its own slot. Writes to locations shared between
//! iterations must go through an [`AtomicStrategy`].
//!
//! Inner strategies run inside one outer iteration and are always
//! sequential, so their bodies may be `FnMut`.

use std::ops::{Add, Range};

use crate::atomic::AtomicCell;

/// Splits an iteration space into consecutive chunks.
pub trait ChunkStrategy {
    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Call `body` once per chunk of at most `chunk_len` indices, in order.
    ///
    /// A `chunk_len` of zero is treated as one.
    fn for_each_chunk<F>(range: Range<usize>, chunk_len: usize, body: F)
    where
        F: FnMut(Range<usize>);
}

/// Executes a loop nested inside one outer iteration.
pub trait InnerExecStrategy {
    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Call `body` for every index in `range`.
    fn for_each<F>(range: Range<usize>, body: F)
    where
        F: FnMut(usize);
}

/// Executes the outer data-parallel loop over a mesh element collection.
///
/// Iterations may run concurrently and unordered. Both functions return
/// only after every iteration has completed.
pub trait ExecStrategy {
    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Call `body` for every index in `range`.
    fn for_each<F>(range: Range<usize>, body: F)
    where
        F: Fn(usize) + Send + Sync;

    /// Call `body(i, &mut data[i])` for every element of `data`.
    fn for_each_mut<T, F>(data: &mut [T], body: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Send + Sync;
}

/// Combines per-iteration values into one result.
///
/// `combine` must be associative and `identity` must be its identity
/// element. Floating-point combines are order-sensitive, so strategies
/// document the order they apply.
pub trait ReduceStrategy {
    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Reduce `map(i)` for every `i` in `range` with `combine`.
    ///
    /// Returns `identity` for an empty range.
    fn reduce<T, M, C>(range: Range<usize>, identity: T, map: M, combine: C) -> T
    where
        T: Copy + Send + Sync,
        M: Fn(usize) -> T + Send + Sync,
        C: Fn(T, T) -> T + Send + Sync;

    /// Sum of `map(i)`, starting from `T::default()`.
    fn sum<T, M>(range: Range<usize>, map: M) -> T
    where
        T: Copy + Send + Sync + Default + Add<Output = T>,
        M: Fn(usize) -> T + Send + Sync,
    {
        Self::reduce(range, T::default(), map, |a, b| a + b)
    }

    /// Minimum of `map(i)`; `+inf` for an empty range.
    fn min<M>(range: Range<usize>, map: M) -> f64
    where
        M: Fn(usize) -> f64 + Send + Sync,
    {
        Self::reduce(range, f64::INFINITY, map, f64::min)
    }

    /// Maximum of `map(i)`; `-inf` for an empty range.
    fn max<M>(range: Range<usize>, map: M) -> f64
    where
        M: Fn(usize) -> f64 + Send + Sync,
    {
        Self::reduce(range, f64::NEG_INFINITY, map, f64::max)
    }
}

/// Read-modify-write on a location shared by concurrent iterations.
pub trait AtomicStrategy {
    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Atomically add `value` to `cell`, returning the previous value.
    fn fetch_add<C: AtomicCell>(cell: &C, value: C::Value) -> C::Value;

    /// Atomically add `value` to `cell`.
    #[inline]
    fn add<C: AtomicCell>(cell: &C, value: C::Value) {
        Self::fetch_add(cell, value);
    }
}
