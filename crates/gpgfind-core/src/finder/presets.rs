//! Named finder constructors.

use super::{GpgFinder, IteratingGpgFinder, PathGpgFinder};
use crate::config::FinderConfig;
use crate::probe::VersionProbe;
use crate::version::GpgVersion;

/// Reported when no GnuPG 1.x executable is available.
pub const GPG1_NOT_FOUND: &str = "Couldn't find a suitable gpg executable. Make sure gnupg1 is available as either gpg(v) or gpg(v)1 in $PATH";

/// Reported when no GnuPG 2.x executable is available.
pub const GPG2_NOT_FOUND: &str = "Couldn't find a suitable gpg executable. Make sure gnupg2 is available as either gpg(v) or gpg(v)2 in $PATH";

/// Reported by the default chain when neither generation is available.
pub const DEFAULT_NOT_FOUND: &str =
    "Couldn't find a suitable gpg executable. Make sure gnupg is installed";

/// Finder for GnuPG 1.x only: `gpg`/`gpg1` and `gpgv`/`gpgv1`.
pub fn gpg1_finder() -> PathGpgFinder {
    gpg1_finder_with(&FinderConfig::default())
}

pub fn gpg1_finder_with(config: &FinderConfig) -> PathGpgFinder {
    PathGpgFinder::new(GpgVersion::V1, GPG1_NOT_FOUND)
        .with_gpg_names(["gpg", "gpg1"])
        .with_gpgv_names(["gpgv", "gpgv1"])
        .with_probe(VersionProbe::from_config(config))
}

/// Finder for GnuPG 2.x only: `gpg`/`gpg2` and `gpgv`/`gpgv2`.
pub fn gpg2_finder() -> PathGpgFinder {
    gpg2_finder_with(&FinderConfig::default())
}

pub fn gpg2_finder_with(config: &FinderConfig) -> PathGpgFinder {
    PathGpgFinder::new(GpgVersion::V2, GPG2_NOT_FOUND)
        .with_gpg_names(["gpg", "gpg2"])
        .with_gpgv_names(["gpgv", "gpgv2"])
        .with_probe(VersionProbe::from_config(config))
}

/// Prefers GnuPG 1.x and falls back to 2.x.
pub fn default_finder() -> IteratingGpgFinder {
    default_finder_with(&FinderConfig::default())
}

pub fn default_finder_with(config: &FinderConfig) -> IteratingGpgFinder {
    let finders: Vec<Box<dyn GpgFinder>> = vec![
        Box::new(gpg1_finder_with(config)),
        Box::new(gpg2_finder_with(config)),
    ];
    IteratingGpgFinder::new(finders, DEFAULT_NOT_FOUND)
}

/// Which generations a caller is willing to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationPreference {
    /// GnuPG 1.x if present, otherwise 2.x.
    #[default]
    Auto,
    /// GnuPG 1.x only.
    Gpg1,
    /// GnuPG 2.x only.
    Gpg2,
}

impl std::fmt::Display for GenerationPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Gpg1 => write!(f, "1"),
            Self::Gpg2 => write!(f, "2"),
        }
    }
}

/// Build the finder matching `preference`.
pub fn finder_for(preference: GenerationPreference, config: &FinderConfig) -> Box<dyn GpgFinder> {
    match preference {
        GenerationPreference::Auto => Box::new(default_finder_with(config)),
        GenerationPreference::Gpg1 => Box::new(gpg1_finder_with(config)),
        GenerationPreference::Gpg2 => Box::new(gpg2_finder_with(config)),
    }
}
