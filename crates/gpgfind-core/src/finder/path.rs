//! Single-generation finder over candidate names on the search path.

use super::{GpgFinder, Resolution, Role};
use crate::error::{FinderError, FinderResult};
use crate::probe::{ProbeReport, VersionProbe};
use crate::version::GpgVersion;

/// Finds executables of one GnuPG generation.
///
/// Candidates are probed in list order and the first one whose version
/// output carries the marker wins; later names are never probed. Order, not
/// "best version", decides between e.g. `gpg` and `gpg1`.
#[derive(Debug, Clone)]
pub struct PathGpgFinder {
    gpg_names: Vec<String>,
    gpgv_names: Vec<String>,
    expected_marker: String,
    version: GpgVersion,
    error_message: String,
    probe: VersionProbe,
}

impl PathGpgFinder {
    /// Finder for `version` using its standard marker, with no candidates yet
    /// and the system probe.
    pub fn new(version: GpgVersion, error_message: impl Into<String>) -> Self {
        Self {
            gpg_names: Vec::new(),
            gpgv_names: Vec::new(),
            expected_marker: version.marker().to_string(),
            version,
            error_message: error_message.into(),
            probe: VersionProbe::system(),
        }
    }

    /// Candidate names for signing, highest priority first.
    #[must_use]
    pub fn with_gpg_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gpg_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Candidate names for verification, highest priority first.
    #[must_use]
    pub fn with_gpgv_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gpgv_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the marker looked for in `--version` output.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.expected_marker = marker.into();
        self
    }

    /// Replace the probe (search path, providers, version-check setting).
    #[must_use]
    pub fn with_probe(mut self, probe: VersionProbe) -> Self {
        self.probe = probe;
        self
    }

    pub const fn version(&self) -> GpgVersion {
        self.version
    }

    pub fn expected_marker(&self) -> &str {
        &self.expected_marker
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    fn names(&self, role: Role) -> &[String] {
        match role {
            Role::Sign => &self.gpg_names,
            Role::Verify => &self.gpgv_names,
        }
    }

    #[tracing::instrument(skip(self), fields(version = %self.version))]
    fn resolve(&self, role: Role) -> FinderResult<Resolution> {
        for name in self.names(role) {
            let report = self.probe.inspect(name, &self.expected_marker);
            if report.outcome.is_match()
                && let Some(path) = report.located
            {
                tracing::info!(executable = %name, path = %path.display(), "Resolved GnuPG executable");
                return Ok(Resolution {
                    executable: name.clone(),
                    version: self.version,
                    path,
                });
            }
        }

        tracing::debug!(candidates = ?self.names(role), "No candidate reported the expected version");
        Err(FinderError::not_found(&self.error_message))
    }
}

impl GpgFinder for PathGpgFinder {
    fn find_gpg(&self) -> FinderResult<Resolution> {
        self.resolve(Role::Sign)
    }

    fn find_gpgv(&self) -> FinderResult<Resolution> {
        self.resolve(Role::Verify)
    }

    fn probe_trail(&self, role: Role) -> Vec<ProbeReport> {
        self.names(role)
            .iter()
            .map(|name| self.probe.inspect(name, &self.expected_marker))
            .collect()
    }
}
