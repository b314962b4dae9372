//! Text statistics extraction.
//!
//! A single pass over whitespace-delimited tokens produces the five counts
//! every readability formula consumes: characters, words, sentences,
//! syllables, and polysyllables. The result is an immutable value — scoring
//! functions take it by reference and never mutate shared state.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::syllables;

/// Punctuation marks that end a sentence.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '?', '!'];

/// Counts extracted from a block of text.
///
/// Invariants upheld by [`analyze`]:
///
/// - `sentences >= 1` for every input, including empty text (the implicit
///   final sentence rule below);
/// - `syllables >= words`, because each word counts at least one syllable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextStatistics {
    /// Sum of character lengths of all tokens. Includes punctuation inside
    /// tokens, excludes the whitespace between them.
    pub characters: usize,
    /// Number of non-empty whitespace-delimited tokens.
    pub words: usize,
    /// Number of sentences (see [`analyze`] for the trailing-text rule).
    pub sentences: usize,
    /// Total syllables across all words.
    pub syllables: usize,
    /// Number of words with more than 2 syllables.
    pub polysyllables: usize,
}

/// Extract [`TextStatistics`] from raw text.
///
/// Tokens are maximal runs of non-whitespace characters. Each token adds its
/// character length, one word, its syllable count, and — when it ends in
/// `.`, `?`, or `!` — one sentence. After the pass, one more sentence is
/// added if the text itself (trimmed of trailing whitespace) does not end in
/// terminal punctuation, so unpunctuated text still counts as one sentence.
/// The trailing check operates on the trimmed text's last character; a token
/// that already ended a sentence is not counted twice.
///
/// Never fails: empty or whitespace-only input yields all-zero counts except
/// `sentences`, which is 1.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str) -> TextStatistics {
    let mut stats = TextStatistics::default();

    for token in text.split_whitespace() {
        stats.characters += token.chars().count();
        stats.words += 1;
        if token.ends_with(SENTENCE_TERMINATORS) {
            stats.sentences += 1;
        }
        let syllables = syllables::count_syllables(token);
        stats.syllables += syllables;
        if syllables > 2 {
            stats.polysyllables += 1;
        }
    }

    if !text.trim_end().ends_with(SENTENCE_TERMINATORS) {
        stats.sentences += 1;
    }

    tracing::debug!(
        words = stats.words,
        sentences = stats.sentences,
        "text analyzed"
    );
    stats
}
