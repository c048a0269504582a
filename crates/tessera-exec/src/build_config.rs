//! Backend identifiers and block-size tunables.
//!
//! This module is compiled twice: once into the library and once into
//! `build.rs` (via `#[path]`), so the build script and the crate agree on
//! the closed set of backends and on the tunable limits. It must only
//! depend on `std`.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Block size used when a tunable is not set.
pub const DEFAULT_BLOCK_SIZE: usize = 128;

/// Largest accepted block size (lanes per block).
pub const MAX_BLOCK_SIZE: usize = 1024;

/// Build environment variable for the general parallel-loop block size.
pub const EXEC_BLOCK_SIZE_VAR: &str = "TESSERA_EXEC_BLOCK_SIZE";

/// Build environment variable for the reduction-loop block size.
pub const REDUCE_BLOCK_SIZE_VAR: &str = "TESSERA_REDUCE_BLOCK_SIZE";

/// The execution substrate a build targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Multi-core host: thread-parallel loops and reductions.
    ThreadedHost,
    /// Block-parallel accelerator: loops dispatched as fixed-size blocks.
    BlockParallelAccelerator,
}

impl Backend {
    /// Every supported backend.
    pub const ALL: [Backend; 2] = [Backend::ThreadedHost, Backend::BlockParallelAccelerator];

    /// The identifier used for this backend in cargo features and config.
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::ThreadedHost => "threaded-host",
            Self::BlockParallelAccelerator => "block-parallel-accelerator",
        }
    }

    /// Resolve the backend from the set of enabled backend features.
    ///
    /// Exactly one must be enabled.
    pub fn from_features(threaded_host: bool, accelerator: bool) -> Result<Self, ConfigError> {
        match (threaded_host, accelerator) {
            (true, false) => Ok(Self::ThreadedHost),
            (false, true) => Ok(Self::BlockParallelAccelerator),
            (false, false) => Err(ConfigError::NoBackendSelected),
            (true, true) => Err(ConfigError::ConflictingBackends),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.identifier() == s)
            .ok_or_else(|| ConfigError::UnknownBackend {
                identifier: s.to_string(),
            })
    }
}

/// Errors detected while resolving the build configuration.
///
/// All of these are fatal at build time; the library only surfaces them
/// for tooling that validates identifiers ahead of a build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The backend identifier is not one of the supported set.
    UnknownBackend {
        /// The rejected identifier.
        identifier: String,
    },
    /// No backend feature is enabled.
    NoBackendSelected,
    /// More than one backend feature is enabled.
    ConflictingBackends,
    /// A block-size tunable is not an integer in `1..=MAX_BLOCK_SIZE`.
    InvalidBlockSize {
        /// Name of the environment variable.
        variable: String,
        /// The rejected raw value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBackend { identifier } => write!(
                f,
                "unknown backend '{identifier}', expected one of: {}, {}",
                Backend::ThreadedHost,
                Backend::BlockParallelAccelerator
            ),
            Self::NoBackendSelected => write!(
                f,
                "no backend selected: enable exactly one of the '{}' or '{}' features",
                Backend::ThreadedHost,
                Backend::BlockParallelAccelerator
            ),
            Self::ConflictingBackends => write!(
                f,
                "conflicting backends: '{}' and '{}' are both enabled, enable exactly one",
                Backend::ThreadedHost,
                Backend::BlockParallelAccelerator
            ),
            Self::InvalidBlockSize { variable, value } => write!(
                f,
                "{variable}={value:?} is not a block size in 1..={MAX_BLOCK_SIZE}"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Parse a block-size tunable, falling back to [`DEFAULT_BLOCK_SIZE`] when unset.
pub fn parse_block_size(variable: &str, raw: Option<&str>) -> Result<usize, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_BLOCK_SIZE);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if (1..=MAX_BLOCK_SIZE).contains(&n) => Ok(n),
        _ => Err(ConfigError::InvalidBlockSize {
            variable: variable.to_string(),
            value: raw.to_string(),
        }),
    }
}
