//! Zone-loop drivers shared by the kernels.
//!
//! Every zone kernel walks the partition the same way: the chunk strategy
//! cuts the zone range into `chunk_size` pieces, and each piece is one
//! launch of the outer exec strategy.

use smallvec::SmallVec;
use tessera_core::Vec2;
use tessera_exec::{ChunkStrategy, ExecPolicy, ExecStrategy, InnerExecStrategy};
use tessera_mesh::Partition;

use crate::config::KernelConfig;

/// Corner coordinates of one zone. Eight inline slots cover quads and
/// the polygons a typical unstructured mesh produces.
pub(crate) type Corners = SmallVec<[Vec2; 8]>;

/// Run `body(zone, &mut out[zone])` for every zone, chunk by chunk.
pub(crate) fn for_each_zone_mut<P, T, F>(config: &KernelConfig, out: &mut [T], body: F)
where
    P: ExecPolicy,
    T: Send,
    F: Fn(usize, &mut T) + Send + Sync,
{
    let zones = out.len();
    P::Chunk::for_each_chunk(0..zones, config.chunk_size, |chunk| {
        let base = chunk.start;
        P::Exec::for_each_mut(&mut out[chunk], |i, slot| body(base + i, slot));
    });
}

/// Run `body(zone)` for every zone of `part`, chunk by chunk.
pub(crate) fn for_each_zone<P, M, F>(config: &KernelConfig, part: &M, body: F)
where
    P: ExecPolicy,
    M: Partition + ?Sized,
    F: Fn(usize) + Send + Sync,
{
    P::Chunk::for_each_chunk(0..part.zone_count(), config.chunk_size, |chunk| {
        P::Exec::for_each(chunk, &body);
    });
}

/// Gather the corner coordinates of `zone` in counter-clockwise order.
pub(crate) fn gather_corners<P, M>(part: &M, zone: usize) -> Corners
where
    P: ExecPolicy,
    M: Partition + ?Sized,
{
    let coords = part.point_coords();
    let points = part.zone_points(zone);
    let mut corners = Corners::with_capacity(points.len());
    P::InnerExec::for_each(0..points.len(), |c| {
        corners.push(coords[points[c].index()]);
    });
    corners
}
