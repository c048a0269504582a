//! Test utilities and mock types for Tessera development.
//!
//! Provides mesh fixtures ([`unit_grid`], [`jittered_grid`],
//! [`mixed_partition`]) and a [`RecordingBarrier`] that stands in for the
//! mesh runtime's phase barrier in single-threaded tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::atomic::{AtomicU64, Ordering};

use tessera_core::Phase;
use tessera_mesh::PhaseBarrier;

pub use fixtures::{jitter, jittered_grid, mixed_partition, unit_grid};

/// Single-participant [`PhaseBarrier`] that counts arrivals.
///
/// Never blocks. Each arrival completes one phase.
#[derive(Debug, Default)]
pub struct RecordingBarrier {
    arrivals: AtomicU64,
}

impl RecordingBarrier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `arrive_and_wait` has been called.
    pub fn arrivals(&self) -> u64 {
        self.arrivals.load(Ordering::SeqCst)
    }
}

impl PhaseBarrier for RecordingBarrier {
    fn arrive_and_wait(&self) -> Phase {
        Phase(self.arrivals.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn phase(&self) -> Phase {
        Phase(self.arrivals())
    }
}
