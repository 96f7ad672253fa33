//! Launching a candidate with the version flag.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs a program with a single argument and captures its output
/// (injectable for testing).
pub trait CommandRunner: Send + Sync {
    /// Run `program arg` to completion and return stdout followed by stderr.
    ///
    /// An `Err` means the process could not be started or exited with a
    /// failure status; its output is discarded in that case.
    fn combined_output(&self, program: &Path, arg: &str) -> io::Result<String>;
}

/// Spawns real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn combined_output(&self, program: &Path, arg: &str) -> io::Result<String> {
        let output = Command::new(program)
            .arg(arg)
            .stdin(Stdio::null())
            .output()?;

        if !output.status.success() {
            return Err(io::Error::other(format!("exited with {}", output.status)));
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }
}

/// Canned outputs keyed by program path, for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MockRunner {
    outputs: std::collections::HashMap<std::path::PathBuf, (String, bool)>,
    calls: std::sync::Mutex<Vec<std::path::PathBuf>>,
}

#[cfg(test)]
impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_output(
        mut self,
        program: impl Into<std::path::PathBuf>,
        output: impl Into<String>,
    ) -> Self {
        self.outputs.insert(program.into(), (output.into(), true));
        self
    }

    /// Like `with_output`, but the program exits with a failure status.
    #[must_use]
    pub fn with_failing_output(
        mut self,
        program: impl Into<std::path::PathBuf>,
        output: impl Into<String>,
    ) -> Self {
        self.outputs.insert(program.into(), (output.into(), false));
        self
    }

    /// Programs launched so far, in order.
    pub fn calls(&self) -> Vec<std::path::PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl CommandRunner for MockRunner {
    fn combined_output(&self, program: &Path, _arg: &str) -> io::Result<String> {
        self.calls.lock().unwrap().push(program.to_path_buf());
        match self.outputs.get(program) {
            Some((text, true)) => Ok(text.clone()),
            Some((_, false)) => Err(io::Error::other("exited with exit status: 2")),
            None => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "exec format error",
            )),
        }
    }
}
