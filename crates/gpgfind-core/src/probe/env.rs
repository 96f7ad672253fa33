//! Where `PATH`, `PATHEXT` and the `GPGFIND_*` settings are read from.

use std::ffi::OsString;

/// Lookup of a single environment variable.
pub trait EnvProvider: Send + Sync {
    fn get(&self, key: &str) -> Option<OsString>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Environment holding only the variables a test sets; nothing is
/// inherited from the process.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockEnv {
    vars: std::collections::HashMap<String, OsString>,
}

#[cfg(test)]
impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment whose `PATH` lists `dirs`, earliest first.
    pub fn with_path_dirs(dirs: &[&str]) -> Self {
        let path = std::env::join_paths(dirs).expect("search path entries are joinable");
        Self::new().with_var("PATH", path)
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
impl EnvProvider for MockEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}
