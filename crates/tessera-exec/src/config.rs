//! The build's resolved execution configuration.
//!
//! `build.rs` resolves the backend feature and the block-size tunables and
//! writes them as constants; this module exposes them together with the
//! [`ActivePolicy`] binding they select.

use std::any::TypeId;
use std::fmt;

use log::debug;

use crate::build_config::Backend;
use crate::policy::{ExecPolicy, PolicySummary};

include!(concat!(env!("OUT_DIR"), "/build_settings.rs"));

/// The policy set bound by this build.
#[cfg(feature = "threaded-host")]
pub type ActivePolicy = crate::host::HostPolicy;

/// The policy set bound by this build.
#[cfg(all(feature = "block-parallel-accelerator", not(feature = "threaded-host")))]
pub type ActivePolicy = crate::device::DevicePolicy<EXEC_BLOCK_SIZE, REDUCE_BLOCK_SIZE>;

/// Snapshot of the execution configuration fixed at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecConfig {
    /// Selected backend.
    pub backend: Backend,
    /// Lanes per block for accelerator parallel loops.
    pub exec_block_size: usize,
    /// Lanes per block for accelerator reductions.
    pub reduce_block_size: usize,
    /// Bindings of [`ActivePolicy`].
    pub policy: PolicySummary,
}

impl ExecConfig {
    /// The configuration this crate was built with.
    pub fn active() -> Self {
        Self {
            backend: ACTIVE_BACKEND,
            exec_block_size: EXEC_BLOCK_SIZE,
            reduce_block_size: REDUCE_BLOCK_SIZE,
            policy: PolicySummary::of::<ActivePolicy>(),
        }
    }

    /// Emit the configuration at debug level.
    pub fn log(&self) {
        debug!("execution config: {self}");
    }
}

impl fmt::Display for ExecConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.policy)?;
        if self.backend == Backend::BlockParallelAccelerator {
            write!(
                f,
                " (exec block {}, reduce block {})",
                self.exec_block_size, self.reduce_block_size
            )?;
        }
        Ok(())
    }
}

/// Whether `P` is exactly [`ActivePolicy`], block sizes included.
///
/// An accelerator policy with other block sizes than the build's is not
/// active even though it targets the same backend.
pub fn is_active<P: ExecPolicy>() -> bool {
    TypeId::of::<P>() == TypeId::of::<ActivePolicy>()
}
