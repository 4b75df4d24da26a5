//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, VerbaArgs};
use crate::error::Result;
use crate::spelling::{CorrectionReport, EditMethod, SearchAlgorithm};

/// Results that can be rendered as plain text lines.
pub trait HumanOutput {
    /// One line per item, without trailing newlines.
    fn human_lines(&self) -> Vec<String>;
}

/// Result of checking a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCheckResult {
    pub word: String,
    pub correct: bool,
}

/// Result structure for the check command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResults {
    pub algorithm: SearchAlgorithm,
    pub results: Vec<WordCheckResult>,
}

/// Result structure for the count command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    pub algorithm: SearchAlgorithm,
    pub total_words: usize,
    pub correct_words: usize,
}

/// Result structure for the suggest command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestResult {
    pub word: String,
    pub method: EditMethod,
    pub candidates: Vec<String>,
}

impl HumanOutput for CheckResults {
    fn human_lines(&self) -> Vec<String> {
        self.results
            .iter()
            .map(|r| {
                if r.correct {
                    format!("{} - OK", r.word)
                } else {
                    format!("{} - NOT FOUND", r.word)
                }
            })
            .collect()
    }
}

impl HumanOutput for CountResult {
    fn human_lines(&self) -> Vec<String> {
        vec![format!(
            "{} of {} words are correct",
            self.correct_words, self.total_words
        )]
    }
}

impl HumanOutput for SuggestResult {
    fn human_lines(&self) -> Vec<String> {
        vec![format!(
            "Possible corrections for '{}' ({}) : [{}]",
            self.word,
            self.method,
            self.candidates.join(", ")
        )]
    }
}

impl HumanOutput for CorrectionReport {
    fn human_lines(&self) -> Vec<String> {
        self.lines()
    }
}

/// Render a result in the requested format.
pub fn format_result<T>(result: &T, args: &VerbaArgs) -> Result<String>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => Ok(result.human_lines().join("\n")),
        OutputFormat::Json => format_json(result, args.pretty),
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(result: &T, args: &VerbaArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let rendered = format_result(result, args)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

fn format_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
