//! Execution policy sets for Tessera kernels.
//!
//! A kernel written against [`ExecPolicy`] runs unmodified on every
//! backend. Each policy binds six named strategies:
//!
//! | Tag | Trait | Threaded host | Block-parallel accelerator |
//! |-----|-------|---------------|----------------------------|
//! | chunk | [`ChunkStrategy`] | [`SeqChunk`] | [`SeqChunk`] |
//! | inner-exec | [`InnerExecStrategy`] | [`SeqExec`] | [`SeqExec`] |
//! | inner-reduce | [`ReduceStrategy`] | [`SeqReduce`] | [`SeqReduce`] |
//! | exec | [`ExecStrategy`] | [`ThreadParallelFor`] | [`BlockExec`] |
//! | reduce | [`ReduceStrategy`] | [`ThreadReduce`] | [`BlockReduce`] |
//! | atomic | [`AtomicStrategy`] | [`AutoAtomic`] | [`DeviceAtomic`] |
//!
//! # Backend selection
//!
//! The backend is chosen at build time with exactly one of the
//! `threaded-host` (default) or `block-parallel-accelerator` features, and
//! [`ActivePolicy`] names the resulting set. Enabling neither or both fails
//! the build. Accelerator block sizes are read from the
//! `TESSERA_EXEC_BLOCK_SIZE` and `TESSERA_REDUCE_BLOCK_SIZE` build
//! environment variables (default 128, at most 1024).
//!
//! Both [`HostPolicy`] and [`DevicePolicy`] are always compiled, so tests
//! can run the same kernel under each and compare results.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod atomic;
mod build_config;
pub mod config;
pub mod device;
pub mod host;
pub mod policy;
pub mod seq;
pub mod strategy;

pub use atomic::{AtomicCell, AtomicF64};
pub use build_config::{
    parse_block_size, Backend, ConfigError, DEFAULT_BLOCK_SIZE, EXEC_BLOCK_SIZE_VAR,
    MAX_BLOCK_SIZE, REDUCE_BLOCK_SIZE_VAR,
};
pub use config::{
    is_active, ActivePolicy, ExecConfig, ACTIVE_BACKEND, EXEC_BLOCK_SIZE, REDUCE_BLOCK_SIZE,
};
pub use device::{BlockExec, BlockReduce, DeviceAtomic, DevicePolicy};
pub use host::{AutoAtomic, HostPolicy, ThreadParallelFor, ThreadReduce};
pub use policy::{ExecPolicy, PolicySummary};
pub use seq::{SeqChunk, SeqExec, SeqReduce};
pub use strategy::{
    AtomicStrategy, ChunkStrategy, ExecStrategy, InnerExecStrategy, ReduceStrategy,
};
