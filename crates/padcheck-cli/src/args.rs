use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "padcheck")]
#[command(about = "Detect the zero-padding convention of numbered names")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.padcheck)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Position {
    First,
    Last,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Inconclusive {
    Unpadded,
    MinLength,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify numeric strings (reads stdin lines when none are given)
    Check {
        /// Numbers to classify (e.g., 001 002 010)
        samples: Vec<String>,

        /// Print JSON
        #[arg(long, conflicts_with = "code")]
        json: bool,

        /// Print only the integer code (0, 1, width, -1, -min_length)
        #[arg(long)]
        code: bool,

        /// Reject samples that are not plain digit strings
        #[arg(long)]
        strict: bool,
    },

    /// Classify the numbered files of a directory
    Scan {
        /// Directory to scan
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Glob matched against file names (e.g., "*.exr")
        #[arg(short, long)]
        pattern: Option<String>,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Which digit run of the name is the number
        #[arg(long, value_enum)]
        position: Option<Position>,

        /// Include dotfiles and dot-directories
        #[arg(long)]
        hidden: bool,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the numbers that follow the samples, in their convention
    Next {
        /// Existing numbers (reads stdin lines when none are given)
        samples: Vec<String>,

        /// How many numbers to print
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Padding when the samples are inconclusive
        #[arg(long, value_enum)]
        inconclusive: Option<Inconclusive>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., scan.pattern)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., scan.recursive)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Create config file with defaults
    Init,
}
