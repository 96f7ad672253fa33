//! Search-path lookup for bare command names.

use super::env::EnvProvider;
use super::fs::FsProvider;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Search path used when `PATH` is unset, as `execvp` does.
#[cfg(unix)]
pub const DEFAULT_SEARCH_PATH: &str = "/bin:/usr/bin";

/// Locates a command the way the OS shell would: the first directory on the
/// search path holding an executable of that name wins.
pub struct ExecutableSearcher<'a> {
    env: &'a dyn EnvProvider,
    fs: &'a dyn FsProvider,
    search_path: Option<&'a OsStr>,
}

impl<'a> ExecutableSearcher<'a> {
    /// Searcher over `PATH` as reported by `env`, or over `search_path` when
    /// it is given.
    pub fn new(
        env: &'a dyn EnvProvider,
        fs: &'a dyn FsProvider,
        search_path: Option<&'a OsStr>,
    ) -> Self {
        Self {
            env,
            fs,
            search_path,
        }
    }

    /// Return the location of `command`, or `None` if no directory has it.
    pub fn locate(&self, command: &str) -> Option<PathBuf> {
        let command_path = Path::new(command);
        if command_path.is_absolute() {
            return self
                .fs
                .is_executable(command_path)
                .then(|| command_path.to_path_buf());
        }

        let path_var = self.path_var()?;
        for entry in std::env::split_paths(&path_var) {
            // An empty entry names the current directory.
            let dir = if entry.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                entry
            };

            for variant in self.name_variants(command) {
                let candidate = dir.join(&variant);
                if self.fs.is_executable(&candidate) {
                    return Some(candidate);
                }
            }
        }

        None
    }

    fn path_var(&self) -> Option<OsString> {
        match self.search_path {
            Some(explicit) => Some(explicit.to_os_string()),
            None => self.env.get("PATH").or_else(default_search_path),
        }
    }

    /// File names to try for `command` inside one directory.
    #[cfg(not(windows))]
    fn name_variants(&self, command: &str) -> Vec<String> {
        let _ = self;
        vec![command.to_string()]
    }

    /// PATHEXT variants (e.g. gpg -> [gpg, gpg.com, gpg.exe, ...]).
    #[cfg(windows)]
    fn name_variants(&self, command: &str) -> Vec<String> {
        let mut variants = vec![command.to_string()];

        if let Some(pathext) = self.env.get("PATHEXT")
            && let Some(pathext_str) = pathext.to_str()
        {
            for ext in pathext_str.split(';') {
                if !ext.is_empty() {
                    variants.push(format!("{command}{ext}"));
                }
            }
        } else {
            for ext in [".exe", ".cmd", ".bat", ".com"] {
                variants.push(format!("{command}{ext}"));
            }
        }

        variants
    }
}

#[cfg(unix)]
fn default_search_path() -> Option<OsString> {
    Some(OsString::from(DEFAULT_SEARCH_PATH))
}

#[cfg(not(unix))]
fn default_search_path() -> Option<OsString> {
    None
}
