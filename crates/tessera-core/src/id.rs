//! Strongly-typed identifiers shared across the Tessera workspace.

use std::fmt;

/// Identifies a point (mesh vertex) within one partition.
///
/// `PointId(n)` indexes the n-th entry of the partition's coordinate array.
/// Zone connectivity is stored as `PointId`s so a corner list cannot be
/// confused with a zone index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct PointId(pub u32);

impl PointId {
    /// The point's position in the partition's flat coordinate array.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PointId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a mesh partition owned by the distribution runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartitionId(pub u32);

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PartitionId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing synchronization phase counter.
///
/// Advanced once each time every participant has reached the per-step
/// synchronization point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phase(pub u64);

impl Phase {
    /// The phase that follows this one.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Phase {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
