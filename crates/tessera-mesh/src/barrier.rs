//! Per-step phase synchronization.
//!
//! The mesh runtime advances all partitions in lockstep: after each kernel
//! phase every participant arrives at a [`PhaseBarrier`] and waits until the
//! rest have too. Kernels only arrive; they never decide who participates.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Barrier;

use log::trace;
use tessera_core::Phase;

use crate::error::MeshError;

/// A synchronization point reached once per phase by every participant.
pub trait PhaseBarrier: Send + Sync {
    /// Block until every participant has arrived, then return the phase
    /// that the arrival completed.
    ///
    /// All participants of one round observe the same returned phase.
    fn arrive_and_wait(&self) -> Phase;

    /// Number of completed phases so far.
    fn phase(&self) -> Phase;
}

/// In-process barrier for a fixed number of participating threads.
pub struct LocalPhaseBarrier {
    participants: usize,
    gate: Barrier,
    completed: AtomicU64,
}

// Compile-time assertion: LocalPhaseBarrier must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<LocalPhaseBarrier>();
};

impl LocalPhaseBarrier {
    /// Create a barrier for `participants` threads, starting at phase 0.
    pub fn new(participants: usize) -> Result<Self, MeshError> {
        if participants == 0 {
            return Err(MeshError::ZeroParticipants);
        }
        Ok(Self {
            participants,
            gate: Barrier::new(participants),
            completed: AtomicU64::new(0),
        })
    }

    /// Number of threads that must arrive per phase.
    pub fn participants(&self) -> usize {
        self.participants
    }
}

impl PhaseBarrier for LocalPhaseBarrier {
    fn arrive_and_wait(&self) -> Phase {
        if self.gate.wait().is_leader() {
            self.completed.fetch_add(1, Ordering::Release);
        }
        // Second rendezvous: nobody reads the counter before the leader
        // has advanced it, and nobody re-enters before everyone has read.
        self.gate.wait();
        let phase = Phase(self.completed.load(Ordering::Acquire));
        self.gate.wait();
        trace!("barrier: phase {phase} complete");
        phase
    }

    fn phase(&self) -> Phase {
        Phase(self.completed.load(Ordering::Acquire))
    }
}

impl std::fmt::Debug for LocalPhaseBarrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalPhaseBarrier")
            .field("participants", &self.participants)
            .field("phase", &self.phase())
            .finish()
    }
}
