//! Chained finder: first sub-finder that succeeds wins.

use super::{GpgFinder, Resolution, Role};
use crate::error::{FinderError, FinderResult};
use crate::probe::ProbeReport;

/// Tries a list of finders in order and returns the first success unchanged.
///
/// When every finder fails, their individual messages are dropped and the
/// chain's own message is reported instead.
pub struct IteratingGpgFinder {
    finders: Vec<Box<dyn GpgFinder>>,
    error_message: String,
}

impl IteratingGpgFinder {
    pub fn new(finders: Vec<Box<dyn GpgFinder>>, error_message: impl Into<String>) -> Self {
        Self {
            finders,
            error_message: error_message.into(),
        }
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    #[tracing::instrument(skip(self), fields(finders = self.finders.len()))]
    fn resolve(&self, role: Role) -> FinderResult<Resolution> {
        for (index, finder) in self.finders.iter().enumerate() {
            match finder.find(role) {
                Ok(resolution) => return Ok(resolution),
                Err(e) => tracing::debug!(index, error = %e, "Finder exhausted, trying next"),
            }
        }

        Err(FinderError::not_found(&self.error_message))
    }
}

impl GpgFinder for IteratingGpgFinder {
    fn find_gpg(&self) -> FinderResult<Resolution> {
        self.resolve(Role::Sign)
    }

    fn find_gpgv(&self) -> FinderResult<Resolution> {
        self.resolve(Role::Verify)
    }

    fn probe_trail(&self, role: Role) -> Vec<ProbeReport> {
        self.finders
            .iter()
            .flat_map(|finder| finder.probe_trail(role))
            .collect()
    }
}

impl std::fmt::Debug for IteratingGpgFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IteratingGpgFinder")
            .field("finders", &self.finders.len())
            .field("error_message", &self.error_message)
            .finish()
    }
}
