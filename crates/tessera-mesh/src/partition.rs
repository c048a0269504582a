//! The [`Partition`] trait and its in-process implementation.

use log::debug;
use tessera_core::{PartitionId, PointId, Vec2};

use crate::error::MeshError;

/// One partition of the distributed mesh, as seen by a kernel.
///
/// Points are stored as a flat, contiguous coordinate array; zones are
/// polygons whose corners index into it. The runtime that owns the mesh
/// decides which points and zones a partition holds (including any halo
/// copies); kernels only read through this trait.
///
/// # Thread Safety
///
/// `Sync` is required because outer kernel loops read the partition from
/// every worker concurrently.
pub trait Partition: Send + Sync {
    /// Identifier assigned by the mesh runtime.
    fn id(&self) -> PartitionId;

    /// Number of points (vertices) in this partition.
    fn point_count(&self) -> usize;

    /// Number of zones (cells) in this partition.
    fn zone_count(&self) -> usize;

    /// All point coordinates, indexed by [`PointId::index`].
    fn point_coords(&self) -> &[Vec2];

    /// Corner points of `zone` in counter-clockwise order.
    ///
    /// # Panics
    ///
    /// Panics if `zone >= self.zone_count()`.
    fn zone_points(&self, zone: usize) -> &[PointId];

    /// Number of corners of `zone`.
    fn zone_corner_count(&self, zone: usize) -> usize {
        self.zone_points(zone).len()
    }
}

/// A partition held entirely in process memory.
///
/// Zone connectivity is stored in compressed-row form: `offsets[z]..offsets[z + 1]`
/// is the slice of `corners` belonging to zone `z`.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalPartition {
    id: PartitionId,
    coords: Vec<Vec2>,
    offsets: Vec<usize>,
    corners: Vec<PointId>,
}

impl LocalPartition {
    /// Build a partition from point coordinates and per-zone corner lists.
    ///
    /// Every zone must have at least three corners, each naming a point in
    /// `coords`. Corner order is taken as given and should be
    /// counter-clockwise.
    pub fn new<Z>(
        id: PartitionId,
        coords: Vec<Vec2>,
        zones: impl IntoIterator<Item = Z>,
    ) -> Result<Self, MeshError>
    where
        Z: AsRef<[PointId]>,
    {
        if coords.is_empty() {
            return Err(MeshError::EmptyPartition);
        }
        let point_count = coords.len();
        let mut offsets = vec![0];
        let mut corners = Vec::new();
        for (zone, points) in zones.into_iter().enumerate() {
            let points = points.as_ref();
            if points.len() < 3 {
                return Err(MeshError::DegenerateZone {
                    zone,
                    corners: points.len(),
                });
            }
            if let Some(&point) = points.iter().find(|p| p.index() >= point_count) {
                return Err(MeshError::PointOutOfRange {
                    zone,
                    point,
                    point_count,
                });
            }
            corners.extend_from_slice(points);
            offsets.push(corners.len());
        }
        debug!(
            "partition {id}: {point_count} points, {} zones, {} corners",
            offsets.len() - 1,
            corners.len()
        );
        Ok(Self {
            id,
            coords,
            offsets,
            corners,
        })
    }

    /// Mutable access to point coordinates, for moving the mesh between steps.
    ///
    /// Connectivity is fixed at construction and cannot change here.
    pub fn coords_mut(&mut self) -> &mut [Vec2] {
        &mut self.coords
    }

    /// Total number of zone corners across all zones.
    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }
}

impl Partition for LocalPartition {
    fn id(&self) -> PartitionId {
        self.id
    }

    fn point_count(&self) -> usize {
        self.coords.len()
    }

    fn zone_count(&self) -> usize {
        self.offsets.len() - 1
    }

    fn point_coords(&self) -> &[Vec2] {
        &self.coords
    }

    fn zone_points(&self, zone: usize) -> &[PointId] {
        &self.corners[self.offsets[zone]..self.offsets[zone + 1]]
    }
}
