//! Runtime resolution of the GnuPG command-line tools.
//!
//! Callers that sign or verify by shelling out to `gpg` / `gpgv` ask a
//! [`GpgFinder`] for the executable to use instead of hard-coding a binary
//! name. The finder walks the executable search path, runs each candidate
//! with `--version` and picks the first one whose output carries the
//! expected generation marker (`(GnuPG) 1.` or `(GnuPG) 2.`).
//!
//! ## Architecture
//!
//! - `probe`: search-path lookup and the `--version` probe, with injectable
//!   environment, filesystem and process providers
//! - `finder`: the [`GpgFinder`] trait, the single-generation
//!   [`PathGpgFinder`], the chained [`IteratingGpgFinder`] and the named
//!   constructors
//! - `backend`: signer/verifier handles built from a finder
//! - `config`: [`FinderConfig`], the explicit replacement for process-wide
//!   switches
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gpgfind_core::{GpgFinder, default_finder};
//!
//! let finder = default_finder();
//! match finder.find_gpg() {
//!     Ok(gpg) => println!("signing with {} ({})", gpg.executable, gpg.version),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

#![deny(unsafe_code)]

pub mod backend;
pub mod config;
pub mod error;
pub mod finder;
pub mod probe;
pub mod version;

pub use backend::{GpgSigner, GpgVerifier};
pub use config::FinderConfig;
pub use error::{FinderError, FinderResult};
pub use finder::{
    GenerationPreference, GpgFinder, IteratingGpgFinder, PathGpgFinder, Resolution, Role,
    default_finder, default_finder_with, finder_for, gpg1_finder, gpg1_finder_with, gpg2_finder,
    gpg2_finder_with,
};
pub use probe::{ProbeOutcome, ProbeReport, VersionProbe};
pub use version::GpgVersion;
