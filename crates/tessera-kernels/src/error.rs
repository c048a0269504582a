//! Error types for kernel invocation.

use std::error::Error;
use std::fmt;

use tessera_mesh::MeshError;

/// Errors a kernel reports before touching any data.
///
/// Kernels check their arguments up front and either run to completion or
/// return one of these without writing output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// An output or input buffer does not match the partition.
    LengthMismatch {
        /// Which buffer.
        what: &'static str,
        /// Length the partition requires.
        expected: usize,
        /// Length that was passed.
        actual: usize,
    },
    /// [`KernelConfig::chunk_size`](crate::KernelConfig::chunk_size) is zero.
    InvalidChunkSize,
    /// The partition or barrier could not be set up.
    Mesh(MeshError),
}

impl KernelError {
    pub(crate) fn check_len(
        what: &'static str,
        expected: usize,
        actual: usize,
    ) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::LengthMismatch {
                what,
                expected,
                actual,
            })
        }
    }
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                what,
                expected,
                actual,
            } => write!(f, "{what}: expected length {expected}, got {actual}"),
            Self::InvalidChunkSize => write!(f, "chunk size must be greater than zero"),
            Self::Mesh(e) => write!(f, "mesh error: {e}"),
        }
    }
}

impl Error for KernelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mesh(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MeshError> for KernelError {
    fn from(e: MeshError) -> Self {
        Self::Mesh(e)
    }
}
