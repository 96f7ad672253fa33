//! Finders: strategies that pick the `gpg` / `gpgv` executable to use.
//!
//! - `path`: [`PathGpgFinder`], one GnuPG generation probed over a list of
//!   candidate names
//! - `iterating`: [`IteratingGpgFinder`], tries other finders in order
//! - `presets`: the named constructors callers normally use

mod iterating;
mod path;
mod presets;

pub use iterating::IteratingGpgFinder;
pub use path::PathGpgFinder;
pub use presets::{
    DEFAULT_NOT_FOUND, GPG1_NOT_FOUND, GPG2_NOT_FOUND, GenerationPreference, default_finder,
    default_finder_with, finder_for, gpg1_finder, gpg1_finder_with, gpg2_finder, gpg2_finder_with,
};

use crate::error::FinderResult;
use crate::probe::ProbeReport;
use crate::version::GpgVersion;
use serde::Serialize;
use std::path::PathBuf;

/// The job an executable is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// `gpg`: signing, key import and other keyring operations.
    Sign,
    /// `gpgv`: signature verification only.
    Verify,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sign => write!(f, "sign"),
            Self::Verify => write!(f, "verify"),
        }
    }
}

/// An executable a finder settled on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Candidate name as listed by the finder (e.g. `gpg1`).
    pub executable: String,
    /// Generation of the finder that matched.
    pub version: GpgVersion,
    /// Where the executable was found on the search path.
    pub path: PathBuf,
}

/// Something that can resolve the signing and verification executables.
///
/// Implementations hold no state between calls: every call probes the search
/// path again.
pub trait GpgFinder: Send + Sync {
    /// Resolve the executable used for signing (`gpg`).
    fn find_gpg(&self) -> FinderResult<Resolution>;

    /// Resolve the executable used for verification (`gpgv`).
    fn find_gpgv(&self) -> FinderResult<Resolution>;

    /// Resolve by role.
    fn find(&self, role: Role) -> FinderResult<Resolution> {
        match role {
            Role::Sign => self.find_gpg(),
            Role::Verify => self.find_gpgv(),
        }
    }

    /// Probe every candidate for `role` without stopping at the first match.
    ///
    /// Diagnostic only; finders that do not probe anything return nothing.
    fn probe_trail(&self, role: Role) -> Vec<ProbeReport> {
        let _ = role;
        Vec::new()
    }
}

impl<F: GpgFinder + ?Sized> GpgFinder for Box<F> {
    fn find_gpg(&self) -> FinderResult<Resolution> {
        (**self).find_gpg()
    }

    fn find_gpgv(&self) -> FinderResult<Resolution> {
        (**self).find_gpgv()
    }

    fn probe_trail(&self, role: Role) -> Vec<ProbeReport> {
        (**self).probe_trail(role)
    }
}
