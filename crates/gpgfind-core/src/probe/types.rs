//! Types describing a single probe.

use serde::Serialize;
use std::path::PathBuf;

/// What happened when one candidate was probed.
///
/// Only `Matched` counts as success; finders treat every other outcome the
/// same way. The distinction is kept for logs and the CLI trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// Version output contained the expected marker.
    Matched,
    /// Launched, but the marker was absent from the output.
    MarkerMismatch,
    /// No executable of that name on the search path.
    NotFound,
    /// Located, but the process could not be started or exited with a
    /// failure status.
    RunFailed(String),
}

impl ProbeOutcome {
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Matched)
    }
}

impl std::fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Matched => write!(f, "OK"),
            Self::MarkerMismatch => write!(f, "version marker not found"),
            Self::NotFound => write!(f, "not found"),
            Self::RunFailed(reason) => write!(f, "failed to run: {reason}"),
        }
    }
}

/// Record of probing one candidate name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    /// Candidate basename as listed by the finder.
    pub candidate: String,
    /// Where the candidate was found on the search path, if anywhere.
    pub located: Option<PathBuf>,
    /// Marker the output was checked for.
    pub marker: String,
    /// Result of the probe.
    pub outcome: ProbeOutcome,
}

impl std::fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = if self.outcome.is_match() { '✓' } else { '✗' };
        match &self.located {
            Some(path) => write!(
                f,
                "{mark} {} ({}) [{}]: {}",
                self.candidate,
                path.display(),
                self.marker,
                self.outcome
            ),
            None => write!(
                f,
                "{mark} {} [{}]: {}",
                self.candidate, self.marker, self.outcome
            ),
        }
    }
}
