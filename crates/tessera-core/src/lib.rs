//! Core value types for Tessera mesh simulations.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! 2D vector kernel ([`Vec2`] and its algebra) used by every geometry and
//! force computation, plus the strongly-typed identifiers shared with the
//! mesh interface.
//!
//! Nothing in this crate knows about execution policies. The vector kernel
//! is reused verbatim by code dispatched under any backend.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod vec2;

pub use id::{PartitionId, Phase, PointId};
pub use vec2::{
    cross, dot, length, length2, make, plus, project, rotate_ccw, rotate_cw, Vec2,
};
