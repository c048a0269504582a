//! The [`ExecPolicy`] trait and its human-readable summary.

use std::fmt;

use crate::build_config::Backend;
use crate::strategy::{
    AtomicStrategy, ChunkStrategy, ExecStrategy, InnerExecStrategy, ReduceStrategy,
};

/// A bundle of six strategy bindings for one backend.
///
/// Kernels are generic over `P: ExecPolicy` and reach every mechanism
/// through these associated types; they never name a backend. A policy is
/// a type, not a value: it has no constructor and no runtime state.
///
/// ```
/// use tessera_exec::{ExecPolicy, HostPolicy, ReduceStrategy};
///
/// fn sum_of_squares<P: ExecPolicy>(n: usize) -> f64 {
///     P::Reduce::sum(0..n, |i| (i * i) as f64)
/// }
///
/// assert_eq!(sum_of_squares::<HostPolicy>(4), 14.0);
/// ```
pub trait ExecPolicy: Send + Sync + 'static {
    /// The backend this policy set belongs to.
    const BACKEND: Backend;

    /// Splits an element collection into consecutive chunks.
    type Chunk: ChunkStrategy;
    /// Runs loops nested inside one outer iteration.
    type InnerExec: InnerExecStrategy;
    /// Reduces inside one outer iteration.
    type InnerReduce: ReduceStrategy;
    /// Runs the outer data-parallel loop.
    type Exec: ExecStrategy;
    /// Reduces across the outer loop.
    type Reduce: ReduceStrategy;
    /// Updates locations shared between outer iterations.
    type Atomic: AtomicStrategy;
}

/// Names of the six bindings of a policy, for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicySummary {
    /// Backend the policy targets.
    pub backend: Backend,
    /// `chunk` binding.
    pub chunk: &'static str,
    /// `inner-exec` binding.
    pub inner_exec: &'static str,
    /// `inner-reduce` binding.
    pub inner_reduce: &'static str,
    /// `exec` binding.
    pub exec: &'static str,
    /// `reduce` binding.
    pub reduce: &'static str,
    /// `atomic` binding.
    pub atomic: &'static str,
}

impl PolicySummary {
    /// Summarize policy `P`.
    pub fn of<P: ExecPolicy>() -> Self {
        Self {
            backend: P::BACKEND,
            chunk: <P::Chunk as ChunkStrategy>::NAME,
            inner_exec: <P::InnerExec as InnerExecStrategy>::NAME,
            inner_reduce: <P::InnerReduce as ReduceStrategy>::NAME,
            exec: <P::Exec as ExecStrategy>::NAME,
            reduce: <P::Reduce as ReduceStrategy>::NAME,
            atomic: <P::Atomic as AtomicStrategy>::NAME,
        }
    }
}

impl fmt::Display for PolicySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: chunk={} inner-exec={} inner-reduce={} exec={} reduce={} atomic={}",
            self.backend,
            self.chunk,
            self.inner_exec,
            self.inner_reduce,
            self.exec,
            self.reduce,
            self.atomic
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DevicePolicy, HostPolicy};

    #[test]
    fn host_bindings() {
        let s = PolicySummary::of::<HostPolicy>();
        assert_eq!(s.backend, Backend::ThreadedHost);
        assert_eq!(s.exec, "thread-parallel-for");
        assert_eq!(s.reduce, "thread-reduce");
        assert_eq!(s.atomic, "auto-atomic");
        assert_eq!(s.chunk, "seq-chunk");
        assert_eq!(s.inner_exec, "seq-exec");
        assert_eq!(s.inner_reduce, "seq-reduce");
    }

    #[test]
    fn device_bindings() {
        let s = PolicySummary::of::<DevicePolicy>();
        assert_eq!(s.backend, Backend::BlockParallelAccelerator);
        assert_eq!(s.exec, "block-parallel-for");
        assert_eq!(s.reduce, "block-reduce");
        assert_eq!(s.atomic, "device-atomic");
        assert_eq!(s.inner_exec, "seq-exec");
    }

    #[test]
    fn summary_display_names_backend_first() {
        let text = PolicySummary::of::<HostPolicy>().to_string();
        assert!(text.starts_with("threaded-host: "));
        assert!(text.contains("exec=thread-parallel-for"));
    }
}
