//! Heuristic syllable counting.
//!
//! A deterministic letter-walk over the Latin alphabet: vowel runs count
//! once, a trailing `e` is silent, and every word reports at least one
//! syllable. The readability formulas are defined relative to this exact
//! heuristic — including its known misses (e.g. "apple" counts as 1) — so
//! callers must not substitute a dictionary-backed counter.

/// `y` counts as a vowel.
const fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Count syllables in a single word.
///
/// Non-letter characters are stripped before counting, so tokens may carry
/// punctuation ("happy!", "don't"). The walk counts a syllable at each vowel
/// except:
///
/// - a vowel immediately preceded by another vowel (clusters count once, at
///   the run's first vowel);
/// - a trailing `e` that is the word's last letter.
///
/// Words with no countable vowels still report one syllable.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let mut syllables = 0;
    for (i, &ch) in letters.iter().enumerate() {
        if !is_vowel(ch) {
            continue;
        }
        if i > 0 && is_vowel(letters[i - 1]) {
            continue;
        }
        if i == letters.len() - 1 && ch == 'e' {
            continue;
        }
        syllables += 1;
    }

    syllables.max(1)
}
