//! Search parameter types and validation

use serde::{Deserialize, Serialize};

/// Kind of puzzle being solved
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PuzzleType {
    #[default]
    Crossword,
    Anagram,
    WordGame,
}

impl PuzzleType {
    /// Human-readable label as rendered into prompts
    pub fn label(&self) -> &'static str {
        match self {
            Self::Crossword => "crossword",
            Self::Anagram => "anagram",
            Self::WordGame => "word game",
        }
    }
}

/// Difficulty filter
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    Any,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Any => "any",
        }
    }
}

/// Word category filter
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    Any,
    Nouns,
    Verbs,
    Adjectives,
    ProperNames,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Nouns => "nouns",
            Self::Verbs => "verbs",
            Self::Adjectives => "adjectives",
            Self::ProperNames => "proper-names",
        }
    }
}

/// Parameters describing one word search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Target word length
    pub word_length: usize,
    /// Known letters by position; `None` marks an unknown slot
    pub letters: Vec<Option<char>>,
    /// Free-text clue, may be empty
    pub clue: String,
    /// Puzzle type
    pub puzzle_type: PuzzleType,
    /// Difficulty filter
    pub difficulty: Difficulty,
    /// Category filter
    pub category: Category,
}

/// Errors rejected at parameter construction time
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("word length must be positive")]
    ZeroLength,
    #[error("expected {expected} letter slots, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("invalid letter {0:?} at position {1}")]
    InvalidLetter(char, usize),
}

impl SearchParams {
    /// Create validated search parameters.
    ///
    /// The letter sequence must match `word_length` exactly and every known
    /// slot must hold an alphabetic character.
    pub fn new(
        word_length: usize,
        letters: Vec<Option<char>>,
        clue: impl Into<String>,
        puzzle_type: PuzzleType,
        difficulty: Difficulty,
        category: Category,
    ) -> Result<Self, ParamsError> {
        if word_length == 0 {
            return Err(ParamsError::ZeroLength);
        }
        if letters.len() != word_length {
            return Err(ParamsError::LengthMismatch {
                expected: word_length,
                actual: letters.len(),
            });
        }
        for (i, slot) in letters.iter().enumerate() {
            if let Some(c) = slot {
                if !c.is_ascii_alphabetic() {
                    return Err(ParamsError::InvalidLetter(*c, i));
                }
            }
        }

        Ok(Self {
            word_length,
            letters,
            clue: clue.into(),
            puzzle_type,
            difficulty,
            category,
        })
    }

    /// Build parameters from a textual pattern such as `"a??e"`.
    ///
    /// `?` and space both mark unknown slots.
    pub fn from_pattern(
        pattern: &str,
        clue: impl Into<String>,
        puzzle_type: PuzzleType,
        difficulty: Difficulty,
        category: Category,
    ) -> Result<Self, ParamsError> {
        let letters: Vec<Option<char>> = pattern
            .chars()
            .map(|c| if c == '?' || c == ' ' { None } else { Some(c) })
            .collect();
        Self::new(letters.len(), letters, clue, puzzle_type, difficulty, category)
    }

    /// Known-letter pattern, lower-cased with `?` for unknown slots.
    ///
    /// Returns `None` when every slot is unknown.
    pub fn pattern(&self) -> Option<String> {
        if self.letters.iter().all(|slot| slot.is_none()) {
            return None;
        }
        Some(self.pattern_or_wildcards())
    }

    /// Pattern string even when fully unknown (all `?`)
    pub fn pattern_or_wildcards(&self) -> String {
        self.letters
            .iter()
            .map(|slot| slot.map(|c| c.to_ascii_lowercase()).unwrap_or('?'))
            .collect()
    }

    /// Clue with surrounding whitespace removed
    pub fn trimmed_clue(&self) -> &str {
        self.clue.trim()
    }

    /// Canonical serialization used for cache fingerprinting.
    ///
    /// Stable field order, lower-cased letters and clue, so semantically
    /// identical parameters serialize identically.
    pub fn canonical_string(&self) -> String {
        format!(
            "len={};letters={};clue={};type={};difficulty={};category={}",
            self.word_length,
            self.pattern_or_wildcards(),
            self.trimmed_clue().to_lowercase(),
            self.puzzle_type.label(),
            self.difficulty.label(),
            self.category.label(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pattern: &str, clue: &str) -> SearchParams {
        SearchParams::from_pattern(
            pattern,
            clue,
            PuzzleType::Crossword,
            Difficulty::Any,
            Category::Any,
        )
        .unwrap()
    }

    #[test]
    fn test_length_validation() {
        let err = SearchParams::new(
            3,
            vec![None, None],
            "",
            PuzzleType::Crossword,
            Difficulty::Any,
            Category::Any,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParamsError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_rejects_non_alphabetic() {
        let err = SearchParams::new(
            2,
            vec![Some('a'), Some('3')],
            "",
            PuzzleType::Crossword,
            Difficulty::Any,
            Category::Any,
        )
        .unwrap_err();
        assert_eq!(err, ParamsError::InvalidLetter('3', 1));
    }

    #[test]
    fn test_pattern_omitted_when_all_blank() {
        let p = params("????", "");
        assert_eq!(p.pattern(), None);
        assert_eq!(p.pattern_or_wildcards(), "????");
    }

    #[test]
    fn test_pattern_lowercased_with_wildcards() {
        let p = params("A??e", "");
        assert_eq!(p.pattern(), Some("a??e".to_string()));
    }

    #[test]
    fn test_canonical_string_normalizes_clue_and_case() {
        let a = params("A??e", "  Feline Friend ");
        let b = params("a??E", "feline friend");
        assert_eq!(a.canonical_string(), b.canonical_string());
    }
}
