//! Command-line definition.

use clap::{Parser, Subcommand, ValueEnum};
use gpgfind_core::GenerationPreference;

/// Find the GnuPG executable to sign or verify with.
#[derive(Debug, Parser)]
#[command(name = "gpgfind")]
#[command(about = "Resolve which gpg/gpgv executable to use for signing and verification")]
#[command(version)]
pub struct Cli {
    /// GnuPG generation to look for
    #[arg(long, short = 'g', value_enum, default_value_t = Generation::Auto, global = true)]
    pub generation: Generation,

    /// Accept the first candidate that runs, without checking its version
    /// [also: GPGFIND_SKIP_VERSION_CHECK]
    #[arg(long, global = true)]
    pub skip_version_check: bool,

    /// Search these directories instead of $PATH [also: GPGFIND_PATH]
    #[arg(long, global = true)]
    pub search_path: Option<String>,

    /// Print the resolution as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Also list every candidate that was probed and why it was rejected
    #[arg(long, global = true)]
    pub trace: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Resolve the signing executable (gpg)
    Sign,
    /// Resolve the verification executable (gpgv)
    Verify,
}

/// `--generation` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Generation {
    /// Prefer GnuPG 1.x, fall back to 2.x
    Auto,
    /// GnuPG 1.x only
    #[value(name = "1")]
    One,
    /// GnuPG 2.x only
    #[value(name = "2")]
    Two,
}

impl From<Generation> for GenerationPreference {
    fn from(generation: Generation) -> Self {
        match generation {
            Generation::Auto => Self::Auto,
            Generation::One => Self::Gpg1,
            Generation::Two => Self::Gpg2,
        }
    }
}
