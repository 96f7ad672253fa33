//! GnuPG generation tag.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Major GnuPG generation a resolved executable belongs to.
///
/// The tag comes from the finder that matched, never from parsing the
/// tool's version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum GpgVersion {
    /// GnuPG 1.x
    V1 = 1,
    /// GnuPG 2.x
    V2 = 2,
}

impl GpgVersion {
    /// Numeric major version.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Literal substring `gpg --version` prints for this generation.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::V1 => "(GnuPG) 1.",
            Self::V2 => "(GnuPG) 2.",
        }
    }
}

impl std::fmt::Display for GpgVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GnuPG {}.x", self.as_u8())
    }
}

/// Error for a number that is not a known GnuPG generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unsupported GnuPG generation: {0} (expected 1 or 2)")]
pub struct UnsupportedVersion(pub u8);

impl TryFrom<u8> for GpgVersion {
    type Error = UnsupportedVersion;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            other => Err(UnsupportedVersion(other)),
        }
    }
}

impl From<GpgVersion> for u8 {
    fn from(version: GpgVersion) -> Self {
        version.as_u8()
    }
}

// Serialized as the bare major number, which is what consumers compare against.
impl Serialize for GpgVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}
