//! Finder configuration.
//!
//! Everything that used to be a process-wide switch is a field here and is
//! handed to the finder constructors, so two finders built with different
//! settings never affect each other.

use crate::probe::EnvProvider;
use std::ffi::OsString;

/// Environment variable that turns off the version-marker check.
pub const SKIP_VERSION_CHECK_ENV: &str = "GPGFIND_SKIP_VERSION_CHECK";

/// Environment variable holding a search path to use instead of `PATH`.
pub const SEARCH_PATH_ENV: &str = "GPGFIND_PATH";

/// Settings shared by every probe a finder performs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinderConfig {
    /// Accept the first candidate that launches, without looking for the
    /// version marker. Candidates missing from the search path still fail.
    pub skip_version_check: bool,

    /// Search path to probe instead of the process `PATH`.
    pub search_path: Option<OsString>,
}

impl FinderConfig {
    /// Read settings from `GPGFIND_SKIP_VERSION_CHECK` and `GPGFIND_PATH`.
    ///
    /// Unset variables leave the defaults in place; an unrecognised value for
    /// the skip flag is logged and treated as `false`.
    pub fn from_env(env: &dyn EnvProvider) -> Self {
        let skip_version_check = env
            .get(SKIP_VERSION_CHECK_ENV)
            .is_some_and(|raw| parse_flag(&raw.to_string_lossy()));

        let search_path = env.get(SEARCH_PATH_ENV).filter(|p| !p.is_empty());

        Self {
            skip_version_check,
            search_path,
        }
    }

    #[must_use]
    pub fn with_skip_version_check(mut self, skip: bool) -> Self {
        self.skip_version_check = skip;
        self
    }

    #[must_use]
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }
}

fn parse_flag(raw: &str) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "" | "0" | "false" | "no" | "off" => false,
        other => {
            tracing::warn!(
                value = other,
                "Ignoring unrecognised {SKIP_VERSION_CHECK_ENV} value"
            );
            false
        }
    }
}
