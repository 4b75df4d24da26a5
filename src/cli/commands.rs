//! Command implementations for Verba CLI.

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::*;

/// Execute a CLI command.
pub fn execute_command(args: VerbaArgs) -> Result<()> {
    let checker = build_checker(&args)?;

    match &args.command {
        Command::Check(check_args) => output_result(&check_words(&checker, check_args), &args),
        Command::Count(sentence_args) => {
            output_result(&count_words(&checker, sentence_args), &args)
        }
        Command::Correct(sentence_args) => {
            output_result(&checker.check_sentence(&sentence_args.text()), &args)
        }
        Command::Suggest(suggest_args) => {
            output_result(&suggest_word(&checker, suggest_args), &args)
        }
    }
}

/// Load the configuration and dictionary named on the command line.
pub fn build_checker(args: &VerbaArgs) -> Result<SpellChecker> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading config from: {}", path.display());
            CheckerConfig::load_from_file(path)?
        }
        None => CheckerConfig::default(),
    };

    if let Some(algorithm) = args.algorithm {
        config.search_algorithm = algorithm;
    }

    let dictionary = Dictionary::load_from_file(&args.dictionary)?;
    info!(
        "Using {} words from {} with {} search",
        dictionary.len(),
        args.dictionary.display(),
        config.search_algorithm
    );

    SpellChecker::new(dictionary, config)
}

/// Check each word independently.
fn check_words(checker: &SpellChecker, args: &CheckArgs) -> CheckResults {
    let results = args
        .words
        .iter()
        .map(|word| WordCheckResult {
            word: word.to_lowercase(),
            correct: checker.word_is_correct(word),
        })
        .collect();

    CheckResults {
        algorithm: checker.search_algorithm(),
        results,
    }
}

/// Count the correct words of a sentence.
fn count_words(checker: &SpellChecker, args: &SentenceArgs) -> CountResult {
    let sentence = args.text();

    CountResult {
        algorithm: checker.search_algorithm(),
        total_words: checker.tokenize(&sentence).len(),
        correct_words: checker.count_correct_words(&sentence),
    }
}

/// Generate corrections for one word.
fn suggest_word(checker: &SpellChecker, args: &SuggestArgs) -> SuggestResult {
    SuggestResult {
        word: args.word.to_lowercase(),
        method: args.method,
        candidates: checker.correct_with(args.method, &args.word).into_vec(),
    }
}
