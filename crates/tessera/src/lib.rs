//! Tessera: portable execution policies and 2D vector kernels for
//! mesh-based physics.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tessera sub-crates. For most users, adding `tessera` as a single
//! dependency is sufficient.
//!
//! The execution backend is chosen with exactly one cargo feature:
//! `threaded-host` (default) or `block-parallel-accelerator`.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! // One unit-square quad and one triangle sharing an edge.
//! let coords = vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(1.0, 0.0),
//!     Vec2::new(1.0, 1.0),
//!     Vec2::new(0.0, 1.0),
//!     Vec2::new(2.0, 0.0),
//! ];
//! let zones = vec![
//!     vec![PointId(0), PointId(1), PointId(2), PointId(3)],
//!     vec![PointId(1), PointId(4), PointId(2)],
//! ];
//! let part = LocalPartition::new(PartitionId(0), coords, zones).unwrap();
//!
//! let config = KernelConfig::default();
//! let mut areas = vec![0.0; part.zone_count()];
//! zone_areas::<ActivePolicy, _>(&config, &part, &mut areas).unwrap();
//! assert_eq!(areas, vec![1.0, 0.5]);
//! assert_eq!(total_area::<ActivePolicy>(&areas), 1.5);
//!
//! // Deposit a unit force at every corner; point 1 is shared by both zones.
//! let acc = PointAccumulator::new(part.point_count());
//! scatter_corner_forces::<ActivePolicy, _, _>(&config, &part, |_, _| Vec2::new(1.0, 0.0), &acc)
//!     .unwrap();
//! assert_eq!(acc.get(PointId(1)), Vec2::new(2.0, 0.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | `Vec2` and its algebra, ids |
//! | [`exec`] | `tessera-exec` | Execution policy sets and strategies |
//! | [`mesh`] | `tessera-mesh` | Partition and phase-barrier interfaces |
//! | [`kernels`] | `tessera-kernels` | Geometry and corner-force kernels |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The 2D vector kernel and identifiers (`tessera-core`).
///
/// [`types::Vec2`] plus the free functions [`types::dot`],
/// [`types::cross`], [`types::rotate_ccw`], [`types::project`] and the rest
/// of the algebra.
pub use tessera_core as types;

/// Execution policy sets (`tessera-exec`).
///
/// [`exec::HostPolicy`], [`exec::DevicePolicy`], and the build-selected
/// [`exec::ActivePolicy`].
pub use tessera_exec as exec;

/// Mesh collaborator interfaces (`tessera-mesh`).
pub use tessera_mesh as mesh;

/// Mesh kernels (`tessera-kernels`).
pub use tessera_kernels as kernels;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Vector kernel and ids
    pub use tessera_core::{
        cross, dot, length, length2, project, rotate_ccw, rotate_cw, PartitionId, Phase, PointId,
        Vec2,
    };

    // Execution policies
    pub use tessera_exec::{
        ActivePolicy, AtomicStrategy, ChunkStrategy, DevicePolicy, ExecConfig, ExecPolicy,
        ExecStrategy, HostPolicy, InnerExecStrategy, ReduceStrategy,
    };

    // Mesh
    pub use tessera_mesh::{LocalPartition, LocalPhaseBarrier, MeshError, Partition, PhaseBarrier};

    // Kernels
    pub use tessera_kernels::{
        geometry_phase, min_area, scatter_corner_forces, scatter_pressure_forces, total_area,
        zone_areas, zone_centers, KernelConfig, KernelError, PointAccumulator, ZoneGeometry,
    };
}
