//! Interfaces Tessera kernels consume from the mesh runtime.
//!
//! The distributed mesh (ownership, halo exchange, scheduling) lives
//! outside this workspace. Kernels see it through two seams:
//!
//! - [`Partition`]: the points and zones one worker owns, as a flat
//!   coordinate array plus per-zone corner lists.
//! - [`PhaseBarrier`]: the synchronization point every partition reaches
//!   once per phase.
//!
//! [`LocalPartition`] and [`LocalPhaseBarrier`] implement both for a
//! single process, for tests, benchmarks, and shared-memory runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod barrier;
pub mod error;
pub mod partition;

#[cfg(test)]
pub(crate) mod compliance;

pub use barrier::{LocalPhaseBarrier, PhaseBarrier};
pub use error::MeshError;
pub use partition::{LocalPartition, Partition};
