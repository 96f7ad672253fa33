//! Signer and verifier handles built from a finder.
//!
//! These are the starting point for the code that actually signs or
//! verifies: they pin the executables a finder resolved and hand out
//! commands pointing at exactly those files. Argument lists for signing and
//! verification belong to the callers.

use crate::error::FinderResult;
use crate::finder::{GpgFinder, Resolution};
use crate::version::GpgVersion;
use std::process::Command;

/// Handle for signing through the resolved `gpg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpgSigner {
    gpg: Resolution,
}

impl GpgSigner {
    /// Resolve `gpg` through `finder`.
    ///
    /// Fails with the finder's message when nothing suitable is installed;
    /// callers decide whether that is fatal.
    #[tracing::instrument(skip(finder))]
    pub fn new(finder: &dyn GpgFinder) -> FinderResult<Self> {
        let gpg = finder.find_gpg()?;
        Ok(Self { gpg })
    }

    pub fn gpg(&self) -> &Resolution {
        &self.gpg
    }

    pub fn version(&self) -> GpgVersion {
        self.gpg.version
    }

    /// A fresh command for the resolved `gpg`.
    pub fn command(&self) -> Command {
        Command::new(&self.gpg.path)
    }
}

/// Handle for verification through the resolved `gpgv`.
///
/// `gpg` is resolved as well because keyrings are prepared with it before
/// `gpgv` checks signatures against them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpgVerifier {
    gpg: Resolution,
    gpgv: Resolution,
}

impl GpgVerifier {
    #[tracing::instrument(skip(finder))]
    pub fn new(finder: &dyn GpgFinder) -> FinderResult<Self> {
        let gpg = finder.find_gpg()?;
        let gpgv = finder.find_gpgv()?;
        Ok(Self { gpg, gpgv })
    }

    pub fn gpg(&self) -> &Resolution {
        &self.gpg
    }

    pub fn gpgv(&self) -> &Resolution {
        &self.gpgv
    }

    /// A fresh command for the resolved `gpgv`.
    pub fn gpgv_command(&self) -> Command {
        Command::new(&self.gpgv.path)
    }

    /// A fresh command for the resolved `gpg`.
    pub fn gpg_command(&self) -> Command {
        Command::new(&self.gpg.path)
    }
}
