//! Prompt construction for the completion endpoint
//!
//! Pure string building; no I/O. The user prompt describes the search and
//! a fixed instruction block pins the response to a JSON array the parser
//! can extract.

use crate::query::{Category, Difficulty, SearchParams};

/// System message sent with every completion request
pub const SYSTEM_PROMPT: &str = "You are a word puzzle solving assistant. \
You suggest candidate words that fit the given constraints, with accurate \
dictionary definitions and usage examples. You always answer with JSON only.";

/// Fixed instruction block appended to every user prompt
const RESPONSE_INSTRUCTIONS: &str = "Respond with a JSON array of objects, \
each with the fields \"word\", \"definition\", \"example\" and \"confidence\", \
sorted by relevance. Words must be uppercase. Confidence must be a decimal \
between 0 and 1. Do not wrap the JSON in markdown.";

/// Build the user prompt for a search
pub fn build_user_prompt(params: &SearchParams) -> String {
    let mut prompt = format!("Find {}-letter words", params.word_length);

    if let Some(pattern) = params.pattern() {
        prompt.push_str(&format!(
            " matching the pattern \"{}\" where \"?\" is an unknown letter",
            pattern
        ));
    }
    prompt.push('.');

    let clue = params.trimmed_clue();
    if !clue.is_empty() {
        prompt.push_str(&format!(" The clue is: \"{}\".", clue));
    }

    prompt.push_str(&format!(
        " This is for a {} puzzle.",
        params.puzzle_type.label()
    ));

    if params.difficulty != Difficulty::Any {
        prompt.push_str(&format!(
            " The difficulty level is {}.",
            params.difficulty.label()
        ));
    }

    if params.category != Category::Any {
        prompt.push_str(&format!(
            " The word should be a {}.",
            singularize(params.category)
        ));
    }

    prompt.push(' ');
    prompt.push_str(RESPONSE_INSTRUCTIONS);
    prompt
}

/// Singular form of a category label.
///
/// Drops the trailing character for the regular plurals, which is what the
/// original did; irregular plurals would come out wrong but none of the
/// current categories are irregular.
fn singularize(category: Category) -> String {
    match category {
        Category::ProperNames => "proper name".to_string(),
        other => {
            let label = other.label();
            label[..label.len() - 1].to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Category, Difficulty, PuzzleType, SearchParams};

    fn params(
        pattern: &str,
        clue: &str,
        difficulty: Difficulty,
        category: Category,
    ) -> SearchParams {
        SearchParams::from_pattern(pattern, clue, PuzzleType::Crossword, difficulty, category)
            .unwrap()
    }

    #[test]
    fn test_always_states_length_and_type() {
        let prompt = build_user_prompt(&params("????", "", Difficulty::Any, Category::Any));
        assert!(prompt.contains("Find 4-letter words"));
        assert!(prompt.contains("crossword puzzle"));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn test_pattern_clause_only_with_known_letters() {
        let blank = build_user_prompt(&params("?????", "", Difficulty::Any, Category::Any));
        assert!(!blank.contains("pattern"));

        let known = build_user_prompt(&params("A??e", "", Difficulty::Any, Category::Any));
        assert!(known.contains("\"a??e\""));
    }

    #[test]
    fn test_clue_clause_only_when_present() {
        let without = build_user_prompt(&params("????", "   ", Difficulty::Any, Category::Any));
        assert!(!without.contains("clue"));

        let with = build_user_prompt(&params("????", "feline", Difficulty::Any, Category::Any));
        assert!(with.contains("The clue is: \"feline\"."));
    }

    #[test]
    fn test_difficulty_clause_skipped_for_any() {
        let any = build_user_prompt(&params("????", "", Difficulty::Any, Category::Any));
        assert!(!any.contains("difficulty"));

        let hard = build_user_prompt(&params("????", "", Difficulty::Hard, Category::Any));
        assert!(hard.contains("difficulty level is hard"));
    }

    #[test]
    fn test_category_singularization() {
        let nouns = build_user_prompt(&params("????", "", Difficulty::Any, Category::Nouns));
        assert!(nouns.contains("should be a noun."));

        let names = build_user_prompt(&params("????", "", Difficulty::Any, Category::ProperNames));
        assert!(names.contains("should be a proper name."));
    }

    #[test]
    fn test_deterministic() {
        let p = params("A??e", "feline", Difficulty::Easy, Category::Nouns);
        assert_eq!(build_user_prompt(&p), build_user_prompt(&p));
    }
}
