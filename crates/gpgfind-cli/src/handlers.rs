//! Command handlers.

use std::ffi::OsString;
use std::io::Write;

use gpgfind_core::probe::EnvProvider;
use gpgfind_core::{FinderConfig, ProbeReport, Resolution, Role, finder_for};
use serde_json::json;

use crate::error::CliError;
use crate::parser::{Cli, Commands};

/// Build the finder configuration: environment first, flags on top.
pub fn finder_config(cli: &Cli, env: &dyn EnvProvider) -> FinderConfig {
    let mut config = FinderConfig::from_env(env);
    if cli.skip_version_check {
        config.skip_version_check = true;
    }
    if let Some(path) = &cli.search_path {
        config.search_path = Some(OsString::from(path));
    }
    config
}

/// Resolve the requested role and write the result to `out`.
pub fn run(cli: &Cli, config: &FinderConfig, out: &mut dyn Write) -> Result<(), CliError> {
    let role = match cli.command {
        Commands::Sign => Role::Sign,
        Commands::Verify => Role::Verify,
    };

    tracing::debug!(%role, generation = ?cli.generation, ?config, "Resolving");
    let finder = finder_for(cli.generation.into(), config);

    let trail = if cli.trace {
        finder.probe_trail(role)
    } else {
        Vec::new()
    };
    let result = finder.find(role);

    if cli.json {
        let body = match &result {
            Ok(resolution) if cli.trace => json!({ "resolution": resolution, "trail": trail }),
            Ok(resolution) => serde_json::to_value(resolution)?,
            Err(e) => json!({ "error": e.message(), "trail": trail }),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    } else {
        if !trail.is_empty() {
            writeln!(out, "{}", render_trail(&trail))?;
        }
        if let Ok(resolution) = &result {
            writeln!(out, "{}", render(resolution))?;
        }
    }

    result.map(|_| ()).map_err(CliError::from)
}

/// One-line human summary of a resolution.
pub fn render(resolution: &Resolution) -> String {
    format!(
        "{} ({}) at {}",
        resolution.executable,
        resolution.version,
        resolution.path.display()
    )
}

/// Human summary of a probe trail, one report per line.
pub fn render_trail(trail: &[ProbeReport]) -> String {
    trail
        .iter()
        .map(|r| format!("  {r}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use gpgfind_core::GpgVersion;
    use gpgfind_core::config::SEARCH_PATH_ENV;
    use gpgfind_core::finder::{DEFAULT_NOT_FOUND, GPG2_NOT_FOUND};
    use serde_json::Value;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct NoEnv;

    impl EnvProvider for NoEnv {
        fn get(&self, _key: &str) -> Option<OsString> {
            None
        }
    }

    /// Only `GPGFIND_PATH` is set.
    struct SearchPathEnv(&'static str);

    impl EnvProvider for SearchPathEnv {
        fn get(&self, key: &str) -> Option<OsString> {
            (key == SEARCH_PATH_ENV).then(|| OsString::from(self.0))
        }
    }

    // Spawning while another test still holds a fresh script open for
    // writing fails with ETXTBSY.
    #[cfg(unix)]
    static SPAWN_LOCK: Mutex<()> = Mutex::new(());

    /// Temp dir holding a `gpg` that reports GnuPG 2.x.
    #[cfg(unix)]
    fn gpg2_dir() -> TempDir {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let gpg = dir.path().join("gpg");
        std::fs::write(&gpg, "#!/bin/sh\necho 'gpg (GnuPG) 2.2.40'\n").unwrap();
        std::fs::set_permissions(&gpg, std::fs::Permissions::from_mode(0o755)).unwrap();
        dir
    }

    #[cfg(unix)]
    fn run_in(dir: &TempDir, args: &[&str]) -> String {
        let search_path = dir.path().to_str().unwrap();
        let cli = Cli::parse_from(
            ["gpgfind"]
                .into_iter()
                .chain(args.iter().copied())
                .chain(["--search-path", search_path]),
        );
        let config = finder_config(&cli, &NoEnv);
        let mut out = Vec::new();

        run(&cli, &config, &mut out).unwrap();

        String::from_utf8(out).unwrap()
    }

    const EMPTY_DIR: &str = "/nonexistent/gpgfind-cli-tests";

    #[test]
    fn test_flags_override_environment() {
        let cli = Cli::parse_from([
            "gpgfind",
            "sign",
            "--skip-version-check",
            "--search-path",
            "/opt/gnupg/bin",
        ]);

        let config = finder_config(&cli, &NoEnv);

        assert!(config.skip_version_check);
        assert_eq!(config.search_path, Some(OsString::from("/opt/gnupg/bin")));
    }

    #[test]
    fn test_environment_used_without_flags() {
        let cli = Cli::parse_from(["gpgfind", "verify"]);
        let config = finder_config(&cli, &NoEnv);
        assert_eq!(config, FinderConfig::default());

        let config = finder_config(&cli, &SearchPathEnv("/opt/gnupg/bin"));
        assert_eq!(config.search_path, Some(OsString::from("/opt/gnupg/bin")));
        assert!(!config.skip_version_check);
    }

    #[cfg(unix)]
    #[test]
    fn test_sign_prints_resolution() {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let dir = gpg2_dir();

        let out = run_in(&dir, &["sign"]);

        assert_eq!(
            out,
            format!("gpg (GnuPG 2.x) at {}\n", dir.path().join("gpg").display())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_json_prints_bare_resolution() {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let dir = gpg2_dir();

        let out = run_in(&dir, &["sign", "--json", "-g", "2"]);

        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            json!({
                "executable": "gpg",
                "version": 2,
                "path": dir.path().join("gpg"),
            })
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_json_trace_wraps_resolution_and_trail() {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let dir = gpg2_dir();

        let out = run_in(&dir, &["sign", "--json", "--trace"]);

        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["resolution"]["executable"], "gpg");
        assert_eq!(value["resolution"]["version"], 2);

        let trail: Vec<_> = value["trail"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| {
                (
                    r["candidate"].as_str().unwrap().to_string(),
                    r["outcome"]["kind"].as_str().unwrap().to_string(),
                )
            })
            .collect();
        assert_eq!(
            trail,
            [
                ("gpg".to_string(), "marker_mismatch".to_string()),
                ("gpg1".to_string(), "not_found".to_string()),
                ("gpg".to_string(), "matched".to_string()),
                ("gpg2".to_string(), "not_found".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_gnupg_reports_chain_message() {
        let cli = Cli::parse_from(["gpgfind", "sign", "--search-path", EMPTY_DIR]);
        let config = finder_config(&cli, &NoEnv);
        let mut out = Vec::new();

        let err = run(&cli, &config, &mut out).unwrap_err();

        assert_eq!(err.to_string(), DEFAULT_NOT_FOUND);
        assert_eq!(err.exit_code(), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_single_generation_message() {
        let cli = Cli::parse_from(["gpgfind", "verify", "-g", "2", "--search-path", EMPTY_DIR]);
        let config = finder_config(&cli, &NoEnv);

        let err = run(&cli, &config, &mut Vec::new()).unwrap_err();

        assert_eq!(err.to_string(), GPG2_NOT_FOUND);
    }

    #[test]
    fn test_json_trace_on_failure() {
        let cli = Cli::parse_from([
            "gpgfind",
            "sign",
            "--json",
            "--trace",
            "--search-path",
            EMPTY_DIR,
        ]);
        let config = finder_config(&cli, &NoEnv);
        let mut out = Vec::new();

        assert!(run(&cli, &config, &mut out).is_err());

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["error"], DEFAULT_NOT_FOUND);
        let candidates: Vec<_> = value["trail"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["candidate"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(candidates, ["gpg", "gpg1", "gpg", "gpg2"]);
        assert_eq!(value["trail"][0]["outcome"]["kind"], "not_found");
    }

    #[test]
    fn test_render() {
        let resolution = Resolution {
            executable: "gpg1".to_string(),
            version: GpgVersion::V1,
            path: PathBuf::from("/usr/bin/gpg1"),
        };
        assert_eq!(render(&resolution), "gpg1 (GnuPG 1.x) at /usr/bin/gpg1");
    }
}
