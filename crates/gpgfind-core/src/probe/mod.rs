//! Locating a candidate on the search path and checking its version output.
//!
//! The probe is split into small, focused modules:
//! - `env`: environment variable access (injectable for testing)
//! - `fs`: executable-file checks (injectable for testing)
//! - `runner`: launching `<candidate> --version` (injectable for testing)
//! - `search`: search-path lookup
//! - `version_probe`: the probe itself
//! - `types`: `ProbeReport` and `ProbeOutcome`

mod env;
mod fs;
mod runner;
mod search;
mod types;
mod version_probe;

pub use env::{EnvProvider, SystemEnv};
pub use fs::{FsProvider, SystemFs};
pub use runner::{CommandRunner, SystemRunner};
pub use search::ExecutableSearcher;
pub use types::{ProbeOutcome, ProbeReport};
pub use version_probe::{VERSION_FLAG, VersionProbe};

#[cfg(test)]
pub use env::MockEnv;
#[cfg(test)]
pub use fs::MockFs;
#[cfg(test)]
pub use runner::MockRunner;
