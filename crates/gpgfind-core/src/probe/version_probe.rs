//! The `--version` probe.

use super::env::{EnvProvider, SystemEnv};
use super::fs::{FsProvider, SystemFs};
use super::runner::{CommandRunner, SystemRunner};
use super::search::ExecutableSearcher;
use super::types::{ProbeOutcome, ProbeReport};
use crate::config::FinderConfig;
use std::ffi::OsString;
use std::sync::Arc;

/// Flag every candidate is launched with.
pub const VERSION_FLAG: &str = "--version";

/// Checks whether a candidate executable reports an expected version marker.
///
/// Cheap to clone; all providers are shared. Holds no state between calls, so
/// every probe looks at the search path afresh.
#[derive(Clone)]
pub struct VersionProbe {
    env: Arc<dyn EnvProvider>,
    fs: Arc<dyn FsProvider>,
    runner: Arc<dyn CommandRunner>,
    search_path: Option<OsString>,
    skip_version_check: bool,
}

impl VersionProbe {
    /// Probe against the real process environment, filesystem and processes.
    pub fn system() -> Self {
        Self::with_providers(
            Arc::new(SystemEnv),
            Arc::new(SystemFs),
            Arc::new(SystemRunner),
        )
    }

    /// System probe honouring the search path and version-check settings of
    /// `config`.
    pub fn from_config(config: &FinderConfig) -> Self {
        Self::system()
            .with_search_path(config.search_path.clone())
            .with_skip_version_check(config.skip_version_check)
    }

    /// Probe with injected providers.
    pub fn with_providers(
        env: Arc<dyn EnvProvider>,
        fs: Arc<dyn FsProvider>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            env,
            fs,
            runner,
            search_path: None,
            skip_version_check: false,
        }
    }

    /// Search this path instead of the `PATH` variable (`None` restores it).
    #[must_use]
    pub fn with_search_path(mut self, search_path: Option<OsString>) -> Self {
        self.search_path = search_path;
        self
    }

    /// Accept any candidate that runs successfully, whatever its output.
    #[must_use]
    pub fn with_skip_version_check(mut self, skip: bool) -> Self {
        self.skip_version_check = skip;
        self
    }

    /// `true` iff `candidate --version` exited successfully and printed
    /// `marker`.
    pub fn probe(&self, candidate: &str, marker: &str) -> bool {
        self.inspect(candidate, marker).outcome.is_match()
    }

    /// Probe `candidate` and report how far it got.
    pub fn inspect(&self, candidate: &str, marker: &str) -> ProbeReport {
        let searcher = ExecutableSearcher::new(
            self.env.as_ref(),
            self.fs.as_ref(),
            self.search_path.as_deref(),
        );

        let located = searcher.locate(candidate);
        let outcome = match &located {
            None => ProbeOutcome::NotFound,
            Some(path) => match self.runner.combined_output(path, VERSION_FLAG) {
                Err(e) => ProbeOutcome::RunFailed(e.to_string()),
                Ok(_) if self.skip_version_check => ProbeOutcome::Matched,
                Ok(output) if output.contains(marker) => ProbeOutcome::Matched,
                Ok(_) => ProbeOutcome::MarkerMismatch,
            },
        };

        tracing::debug!(
            candidate,
            located = ?located,
            marker,
            outcome = %outcome,
            "Probed candidate"
        );

        ProbeReport {
            candidate: candidate.to_string(),
            located,
            marker: marker.to_string(),
            outcome,
        }
    }
}

impl Default for VersionProbe {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Debug for VersionProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionProbe")
            .field("search_path", &self.search_path)
            .field("skip_version_check", &self.skip_version_check)
            .finish_non_exhaustive()
    }
}
