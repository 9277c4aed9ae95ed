use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::InputProblem;

pub trait Preprocessor {
    // Default Latin preprocessor
    fn process(&self, text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Matching key for one word: punctuation stripped, diacritics folded, lowercased
    fn normalize_word(&self, word: &str) -> String {
        fold_diacritics(strip_punctuation(word)).to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Reject input the engine must not silently repair
pub fn validate(text: &str, max_chars: usize) -> Result<(), InputProblem> {
    let length = text.chars().count();
    if length > max_chars {
        return Err(InputProblem::TooLong {
            length,
            max: max_chars,
        });
    }

    if let Some(c) = text.chars().find(|c| c.is_control() && !c.is_whitespace()) {
        return Err(InputProblem::ControlCharacter(c));
    }

    if text.trim().is_empty() {
        return Err(InputProblem::Empty);
    }

    Ok(())
}

/// Remove leading and trailing punctuation from a word
pub fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Drop macrons, breves, diaereses and other combining marks; expand ligatures
pub fn fold_diacritics(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(|c| {
            let expanded: &[char] = match c {
                'æ' => &['a', 'e'],
                'Æ' => &['A', 'E'],
                'œ' => &['o', 'e'],
                'Œ' => &['O', 'E'],
                _ => return vec![c],
            };
            expanded.to_vec()
        })
        .collect()
}
