//! Mesh kernels written against Tessera execution policies.
//!
//! Every kernel is generic over `P: ExecPolicy` and names only the six
//! policy tags, so one body serves both backends. Pass
//! [`ActivePolicy`](tessera_exec::ActivePolicy) for the build's backend, or
//! a concrete policy to pin one.
//!
//! # Step order
//!
//! 1. [`geometry_phase`]: zone centers and areas, then the phase barrier
//! 2. [`scatter_corner_forces`] / [`scatter_pressure_forces`]: corner
//!    forces deposited into a [`PointAccumulator`]
//!
//! [`total_area`] and [`min_area`] reduce the area array for conservation
//! and tangling checks.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod accum;
pub mod config;
pub mod error;
pub mod forces;
pub mod geometry;
mod zones;

pub use accum::PointAccumulator;
pub use config::KernelConfig;
pub use error::KernelError;
pub use forces::{pressure_corner_force, scatter_corner_forces, scatter_pressure_forces};
pub use geometry::{
    geometry_phase, min_area, total_area, zone_area, zone_areas, zone_center, zone_centers,
    ZoneGeometry,
};
