//! Benchmark profiles and utilities for Tessera kernels.
//!
//! - [`reference_profile`]: 100x100 jittered quad grid (10K zones)
//! - [`stress_profile`]: 316x316 jittered quad grid (~100K zones)
//! - [`pressure_field`]: deterministic per-zone pressure

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_mesh::{LocalPartition, Partition};
use tessera_test_utils::{jitter, jittered_grid};

/// A partition plus the per-zone input a force kernel needs.
pub struct BenchMesh {
    /// The mesh.
    pub partition: LocalPartition,
    /// One pressure value per zone.
    pub pressure: Vec<f64>,
}

/// 100x100 zones on the unit square, interior points jittered by 20%.
pub fn reference_profile(seed: u64) -> BenchMesh {
    profile(100, seed)
}

/// 316x316 zones (~100K) on the unit square.
pub fn stress_profile(seed: u64) -> BenchMesh {
    profile(316, seed)
}

fn profile(n: usize, seed: u64) -> BenchMesh {
    let partition = jittered_grid(n, n, 1.0 / n as f64, 0.2, seed);
    let pressure = pressure_field(partition.zone_count(), seed);
    BenchMesh {
        partition,
        pressure,
    }
}

/// Pressures in `[0.5, 1.5)`, deterministic in `seed`.
pub fn pressure_field(zones: usize, seed: u64) -> Vec<f64> {
    (0..zones as u64)
        .map(|z| 1.0 + 0.5 * jitter(seed ^ 0x9e37_79b9, z))
        .collect()
}
