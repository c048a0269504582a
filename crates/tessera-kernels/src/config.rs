//! Runtime knobs shared by the kernels.

use crate::error::KernelError;

/// Configuration for zone-loop kernels.
///
/// Zone loops are cut into chunks of `chunk_size` zones; each chunk is one
/// outer parallel launch. Smaller chunks bound the working set per launch,
/// larger ones amortize launch overhead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KernelConfig {
    /// Zones per outer launch.
    ///
    /// Default: 4096. Must be greater than zero.
    pub chunk_size: usize,
}

impl KernelConfig {
    /// Default number of zones per outer launch.
    pub const DEFAULT_CHUNK_SIZE: usize = 4096;

    /// Config with the given chunk size.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Check the configuration before a kernel runs.
    pub fn validate(&self) -> Result<(), KernelError> {
        if self.chunk_size == 0 {
            return Err(KernelError::InvalidChunkSize);
        }
        Ok(())
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self::with_chunk_size(Self::DEFAULT_CHUNK_SIZE)
    }
}
