//! Reusable mesh fixtures.
//!
//! - [`unit_grid`]: structured quad grid, exact coordinates.
//! - [`jittered_grid`]: the same grid with interior points displaced
//!   deterministically.
//! - [`mixed_partition`]: quads and triangles sharing points.

use tessera_core::{PartitionId, PointId, Vec2};
use tessera_mesh::LocalPartition;

/// Row-major point index of grid vertex `(i, j)`.
fn vertex(nx: usize, i: usize, j: usize) -> PointId {
    PointId((j * (nx + 1) + i) as u32)
}

fn grid_zones(nx: usize, ny: usize) -> Vec<[PointId; 4]> {
    let mut zones = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            zones.push([
                vertex(nx, i, j),
                vertex(nx, i + 1, j),
                vertex(nx, i + 1, j + 1),
                vertex(nx, i, j + 1),
            ]);
        }
    }
    zones
}

/// `nx` x `ny` quad grid with lower-left corner at the origin.
///
/// Points are numbered row-major, `(nx + 1)` per row. Zones are numbered
/// row-major with corners counter-clockwise from the lower-left.
pub fn unit_grid(nx: usize, ny: usize, spacing: f64) -> LocalPartition {
    let coords = (0..=ny)
        .flat_map(|j| (0..=nx).map(move |i| Vec2::new(i as f64 * spacing, j as f64 * spacing)))
        .collect();
    LocalPartition::new(PartitionId(0), coords, grid_zones(nx, ny))
        .expect("grid connectivity is always valid")
}

/// Deterministic value in `[-1, 1)` for `(seed, index)`.
pub fn jitter(seed: u64, index: u64) -> f64 {
    let mut h = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(index.wrapping_mul(1442695040888963407));
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51afd7ed558ccd);
    h ^= h >> 33;
    (h >> 11) as f64 / (1u64 << 52) as f64 - 1.0
}

/// [`unit_grid`] with every interior point moved by up to
/// `amplitude * spacing` on each axis.
///
/// Boundary points stay put, so the domain area is unchanged. Amplitudes
/// below `0.25` keep every zone convex and positively oriented.
pub fn jittered_grid(
    nx: usize,
    ny: usize,
    spacing: f64,
    amplitude: f64,
    seed: u64,
) -> LocalPartition {
    let mut grid = unit_grid(nx, ny, spacing);
    for (k, p) in grid.coords_mut().iter_mut().enumerate() {
        let (i, j) = (k % (nx + 1), k / (nx + 1));
        if i == 0 || j == 0 || i == nx || j == ny {
            continue;
        }
        let k = k as u64;
        p.x += amplitude * spacing * jitter(seed, 2 * k);
        p.y += amplitude * spacing * jitter(seed, 2 * k + 1);
    }
    grid
}

/// Three quads and two triangles over a 3 x 2 box, area 6.
///
/// ```text
/// 6-----7-----------8
/// |  1  |       4 / |
/// |     |     /   3 |
/// 3-----4-----------5
/// |  0  |     2     |
/// 0-----1-----------2
/// ```
pub fn mixed_partition() -> LocalPartition {
    let coords = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(3.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(3.0, 1.0),
        Vec2::new(0.0, 2.0),
        Vec2::new(1.0, 2.0),
        Vec2::new(3.0, 2.0),
    ];
    let ids = |raw: &[u32]| raw.iter().copied().map(PointId).collect::<Vec<_>>();
    let zones = vec![
        ids(&[0, 1, 4, 3]),
        ids(&[3, 4, 7, 6]),
        ids(&[1, 2, 5, 4]),
        ids(&[4, 5, 8]),
        ids(&[4, 8, 7]),
    ];
    LocalPartition::new(PartitionId(1), coords, zones).expect("fixture connectivity is valid")
}
