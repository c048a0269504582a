//! Error types for partition construction and barrier setup.

use std::fmt;

use tessera_core::PointId;

/// Errors arising from building a partition or a phase barrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Attempted to construct a partition with no points.
    EmptyPartition,
    /// A zone refers to a point the partition does not hold.
    PointOutOfRange {
        /// Index of the offending zone.
        zone: usize,
        /// The out-of-range corner.
        point: PointId,
        /// Number of points in the partition.
        point_count: usize,
    },
    /// A zone has fewer than three corners.
    DegenerateZone {
        /// Index of the offending zone.
        zone: usize,
        /// Number of corners it was given.
        corners: usize,
    },
    /// A barrier was requested for zero participants.
    ZeroParticipants,
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPartition => write!(f, "partition must have at least one point"),
            Self::PointOutOfRange {
                zone,
                point,
                point_count,
            } => write!(
                f,
                "zone {zone} refers to point {point}, partition has {point_count} points"
            ),
            Self::DegenerateZone { zone, corners } => {
                write!(f, "zone {zone} has {corners} corners, need at least 3")
            }
            Self::ZeroParticipants => write!(f, "barrier needs at least one participant"),
        }
    }
}

impl std::error::Error for MeshError {}
