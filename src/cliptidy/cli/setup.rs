use clap::{Args, Parser, Subcommand};
use cliptidy::model::{CaseMode, Transform};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2026-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "cliptidy", bin_name = "cliptidy", version = get_version())]
#[command(about = "Clean up and reshape clipboard text and notes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub io: IoArgs,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct IoArgs {
    /// Read input from a file
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Input/Output")]
    pub file: Option<PathBuf>,

    /// Read input from the system clipboard
    #[arg(long, global = true, help_heading = "Input/Output")]
    pub clipboard: bool,

    /// Copy the result to the system clipboard
    #[arg(short, long, global = true, help_heading = "Input/Output")]
    pub copy: bool,

    /// Print a per-step report to stderr
    #[arg(short, long, global = true, help_heading = "Input/Output")]
    pub report: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove blank and duplicate lines
    #[command(alias = "dedup", display_order = 1)]
    Dedupe {
        /// Text to transform (words are joined with spaces; put text starting with `-` after `--`)
        text: Vec<String>,
    },

    /// Trim lines, collapse spaces and drop blank lines
    #[command(alias = "format", display_order = 2)]
    Cleanup {
        /// Text to transform (words are joined with spaces; put text starting with `-` after `--`)
        text: Vec<String>,
    },

    /// Turn lines, sentences or comma-separated items into a bulleted list
    #[command(alias = "bullets", display_order = 3)]
    List {
        /// Text to transform (words are joined with spaces; put text starting with `-` after `--`)
        text: Vec<String>,
    },

    /// Fix spacing after punctuation and capitalization (joins lines)
    #[command(alias = "fix", display_order = 4)]
    Grammar {
        /// Text to transform (words are joined with spaces; put text starting with `-` after `--`)
        text: Vec<String>,
    },

    /// Change case: upper, lower, title, sentence (or 0-3)
    #[command(display_order = 5)]
    Case {
        /// Mode name or code; unknown codes leave the text unchanged
        #[arg(allow_negative_numbers = true)]
        mode: CaseMode,

        /// Text to transform (words are joined with spaces; put text starting with `-` after `--`)
        text: Vec<String>,
    },

    /// Run several steps in order (the configured pipeline if none given)
    #[command(display_order = 10)]
    Run {
        /// A step to apply, repeatable (e.g. -s cleanup -s case:title)
        #[arg(short, long = "step", value_name = "STEP")]
        steps: Vec<Transform>,

        /// Text to transform (words are joined with spaces; put text starting with `-` after `--`)
        text: Vec<String>,
    },

    /// List the available steps
    #[command(display_order = 20)]
    Steps,

    /// Get or set configuration
    #[command(display_order = 21)]
    Config {
        /// Configuration key (pipeline, copy-result, show-report)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
