//! Command line argument parsing for Verba CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::spelling::{EditMethod, SearchAlgorithm};

/// Verba - A dictionary-backed spell checker
#[derive(Parser, Debug, Clone)]
#[command(name = "verba")]
#[command(about = "A dictionary-backed spell checker with single-edit corrections")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Verba Contributors")]
#[command(long_about = None)]
pub struct VerbaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Word list file, one word per line
    #[arg(short, long, value_name = "WORD_LIST", env = "VERBA_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Search algorithm used for dictionary lookups (overrides the config file)
    #[arg(short, long)]
    pub algorithm: Option<SearchAlgorithm>,

    /// Checker configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl VerbaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check whether words are in the dictionary
    Check(CheckArgs),

    /// Count the correctly spelled words of a sentence
    Count(SentenceArgs),

    /// Report every word of a sentence with its corrections
    Correct(SentenceArgs),

    /// List single-edit corrections for one word
    Suggest(SuggestArgs),
}

/// Arguments for checking words
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Words to check
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for sentence commands
#[derive(Parser, Debug, Clone)]
pub struct SentenceArgs {
    /// Sentence to check; multiple arguments are joined with spaces
    #[arg(value_name = "SENTENCE", required = true, num_args = 1..)]
    pub sentence: Vec<String>,
}

impl SentenceArgs {
    /// The sentence as a single string
    pub fn text(&self) -> String {
        self.sentence.join(" ")
    }
}

/// Arguments for suggesting corrections
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word to correct
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Edit family to try
    #[arg(short, long, default_value = "all")]
    pub method: EditMethod,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
