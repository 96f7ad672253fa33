//! Throw-away search paths populated with fake GnuPG executables.

#![allow(dead_code)]

use std::ffi::OsString;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use gpgfind_core::FinderConfig;
use tempfile::TempDir;

pub const GPG1_VERSION: &str = "gpg (GnuPG) 1.4.23\nCopyright (C) 2015 Free Software Foundation, Inc.";
pub const GPG2_VERSION: &str = "gpg (GnuPG) 2.2.40\nlibgcrypt 1.10.1";
pub const GPGV1_VERSION: &str = "gpgv (GnuPG) 1.4.23";
pub const GPGV2_VERSION: &str = "gpgv (GnuPG) 2.2.40\nlibgcrypt 1.10.1";

// Executing a script while another thread still holds a write handle to a
// freshly created file fails with ETXTBSY, so fixture setup and probing are
// serialised across the tests of one binary.
static SPAWN_LOCK: Mutex<()> = Mutex::new(());

pub fn serial() -> MutexGuard<'static, ()> {
    SPAWN_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// One directory of the search path.
pub struct BinDir {
    dir: TempDir,
}

impl BinDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp bin dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add `name` printing `version_text` on stdout.
    #[must_use]
    pub fn with_tool(self, name: &str, version_text: &str) -> Self {
        let body = format!("#!/bin/sh\ncat <<'EOF'\n{version_text}\nEOF\n");
        self.write_script(name, &body);
        self
    }

    /// Add `name` printing `version_text` on stderr.
    #[must_use]
    pub fn with_stderr_tool(self, name: &str, version_text: &str) -> Self {
        let body = format!("#!/bin/sh\ncat >&2 <<'EOF'\n{version_text}\nEOF\n");
        self.write_script(name, &body);
        self
    }

    /// Add `name` printing `version_text` on stderr and exiting non-zero.
    #[must_use]
    pub fn with_failing_tool(self, name: &str, version_text: &str) -> Self {
        let body = format!("#!/bin/sh\ncat >&2 <<'EOF'\n{version_text}\nEOF\nexit 2\n");
        self.write_script(name, &body);
        self
    }

    /// Add a file called `name` without execute permission.
    #[must_use]
    pub fn with_plain_file(self, name: &str) -> Self {
        std::fs::write(self.dir.path().join(name), "not a program\n").expect("write plain file");
        self
    }

    fn write_script(&self, name: &str, body: &str) {
        let path = self.dir.path().join(name);
        std::fs::write(&path, body).expect("write fake tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("chmod fake tool");
    }

    pub fn tool(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Search path made of `dirs`, earliest first.
pub fn search_path(dirs: &[&BinDir]) -> OsString {
    std::env::join_paths(dirs.iter().map(|d| d.path())).expect("join search path")
}

/// Config probing only `dirs`.
pub fn config_for(dirs: &[&BinDir]) -> FinderConfig {
    FinderConfig::default().with_search_path(search_path(dirs))
}

// Fixture layouts used across the suites.

/// `gpg` is GnuPG 1.x.
pub fn gpg1() -> BinDir {
    BinDir::new().with_tool("gpg", GPG1_VERSION)
}

/// `gpg` is GnuPG 2.x and `gpg1` is GnuPG 1.x.
pub fn gpg2_and_1() -> BinDir {
    BinDir::new()
        .with_tool("gpg", GPG2_VERSION)
        .with_tool("gpg1", GPG1_VERSION)
}

/// Only a GnuPG 2.x `gpg`.
pub fn gpg2_only() -> BinDir {
    BinDir::new().with_tool("gpg", GPG2_VERSION)
}

/// `gpgv` is GnuPG 1.x.
pub fn gpgv1() -> BinDir {
    BinDir::new().with_tool("gpgv", GPGV1_VERSION)
}

/// `gpgv` is GnuPG 2.x and `gpgv1` is GnuPG 1.x.
pub fn gpgv2_and_1() -> BinDir {
    BinDir::new()
        .with_tool("gpgv", GPGV2_VERSION)
        .with_tool("gpgv1", GPGV1_VERSION)
}

/// Only a GnuPG 2.x `gpgv`.
pub fn gpgv2_only() -> BinDir {
    BinDir::new().with_tool("gpgv", GPGV2_VERSION)
}
