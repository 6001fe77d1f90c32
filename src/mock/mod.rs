//! Mock word source
//!
//! A hardcoded word bank standing in for the remote model, used for demos
//! and offline operation. Filtering mirrors the original demo behavior:
//! positional pattern match, clue keywords against definition and example
//! text, and a fallback slice when nothing matches.

use crate::error::SearchError;
use crate::query::SearchParams;
use crate::results::WordResult;
use crate::search::WordSource;
use async_trait::async_trait;

/// Cap on mock results per search
const MOCK_RESULT_LIMIT: usize = 10;

/// Bank entries fall back to the first few when filters match nothing
const FALLBACK_COUNT: usize = 5;

struct BankEntry {
    word: &'static str,
    definition: &'static str,
    example: &'static str,
}

const BANK_4: &[BankEntry] = &[
    BankEntry { word: "ABLE", definition: "Having the power, skill, means, or opportunity to do something.", example: "She was able to solve the puzzle quickly." },
    BankEntry { word: "ACID", definition: "A chemical substance with a pH less than 7.", example: "Citric acid gives lemons their sour taste." },
    BankEntry { word: "AGED", definition: "Having lived or existed for a specified length of time.", example: "The aged cheese had a strong flavor." },
    BankEntry { word: "ALSO", definition: "In addition; too; besides.", example: "She sings and also plays guitar." },
    BankEntry { word: "AREA", definition: "A particular part of a place, piece of land, or country.", example: "This area of the city is known for its restaurants." },
    BankEntry { word: "ARMY", definition: "A large organized body of armed personnel trained for war.", example: "He joined the army after college." },
    BankEntry { word: "AWAY", definition: "To or at a distance from a particular place or person.", example: "She walked away without saying goodbye." },
    BankEntry { word: "BABY", definition: "A very young child.", example: "The baby smiled at its mother." },
    BankEntry { word: "BACK", definition: "The rear surface of the human body.", example: "He hurt his back lifting the heavy box." },
    BankEntry { word: "BALL", definition: "A solid or hollow spherical object used in games.", example: "They played with a beach ball." },
];

const BANK_5: &[BankEntry] = &[
    BankEntry { word: "ABOUT", definition: "On the subject of; concerning.", example: "They were talking about you." },
    BankEntry { word: "ABOVE", definition: "In or to a higher place.", example: "The clouds above were dark and threatening." },
    BankEntry { word: "ACTOR", definition: "A person who performs in a play, film, etc.", example: "The actor won an award for his performance." },
    BankEntry { word: "ADAPT", definition: "To adjust or modify to suit new conditions.", example: "The company had to adapt to the changing market." },
    BankEntry { word: "ADMIT", definition: "To acknowledge or confess something.", example: "She admitted her mistake." },
    BankEntry { word: "ADOPT", definition: "To legally take another's child as one's own.", example: "They decided to adopt a baby from overseas." },
    BankEntry { word: "ADULT", definition: "A person who is fully grown or developed.", example: "The movie is intended for adult audiences." },
    BankEntry { word: "AFTER", definition: "Later in time than; following.", example: "We'll meet after dinner." },
    BankEntry { word: "AGAIN", definition: "Once more; another time.", example: "Can you say that again?" },
    BankEntry { word: "AGENT", definition: "A person who acts on behalf of another.", example: "He's a real estate agent." },
    BankEntry { word: "AGREE", definition: "To have the same opinion.", example: "We all agree on the plan." },
    BankEntry { word: "AHEAD", definition: "In front; in advance.", example: "The team is ahead by two points." },
    BankEntry { word: "ALARM", definition: "A warning of danger.", example: "The fire alarm went off." },
];

const BANK_6: &[BankEntry] = &[
    BankEntry { word: "ACTION", definition: "The process of doing something.", example: "The government took action on climate change." },
    BankEntry { word: "ACTIVE", definition: "Engaging or ready to engage in physically energetic pursuits.", example: "He leads an active lifestyle." },
    BankEntry { word: "ACTUAL", definition: "Existing in fact, real.", example: "The actual cost was higher than expected." },
    BankEntry { word: "ADJUST", definition: "To alter or move something slightly to achieve the desired fit or appearance.", example: "You need to adjust your posture when sitting." },
    BankEntry { word: "ADMIRE", definition: "To regard with respect or warm approval.", example: "I admire your courage." },
    BankEntry { word: "ADVICE", definition: "Guidance or recommendations offered with regard to future action.", example: "She gave me some good advice." },
    BankEntry { word: "AFFORD", definition: "To have enough money to pay for something.", example: "We can't afford a new car right now." },
    BankEntry { word: "AFRAID", definition: "Feeling fear or anxiety; frightened.", example: "She's afraid of spiders." },
    BankEntry { word: "AGENCY", definition: "A business or organization providing a particular service.", example: "They hired an advertising agency." },
    BankEntry { word: "AGENDA", definition: "A list of items to be discussed at a meeting.", example: "The first item on the agenda is the budget." },
];

fn bank_for_length(length: usize) -> &'static [BankEntry] {
    match length {
        4 => BANK_4,
        5 => BANK_5,
        6 => BANK_6,
        _ => &[],
    }
}

/// Word source backed by the hardcoded bank
#[derive(Debug, Clone, Copy, Default)]
pub struct MockWordBank;

impl MockWordBank {
    pub fn new() -> Self {
        Self
    }

    fn matches_pattern(word: &str, pattern: &str) -> bool {
        word.len() == pattern.len()
            && word
                .chars()
                .zip(pattern.chars())
                .all(|(w, p)| p == '?' || p.to_ascii_uppercase() == w)
    }

    fn matches_clue(entry: &BankEntry, clue: &str) -> bool {
        let haystack = format!("{} {}", entry.definition, entry.example).to_lowercase();
        clue.to_lowercase()
            .split_whitespace()
            .any(|word| haystack.contains(word))
    }

    fn generate(&self, params: &SearchParams) -> Vec<WordResult> {
        let bank = bank_for_length(params.word_length);
        let pattern = params.pattern_or_wildcards();

        // The pattern filter only applies while at least one slot is
        // unknown; a fully specified pattern falls through to the whole
        // bank
        let mut matched: Vec<&BankEntry> = if pattern.contains('?') {
            bank.iter()
                .filter(|entry| Self::matches_pattern(entry.word, &pattern))
                .collect()
        } else {
            bank.iter().collect()
        };

        let clue = params.trimmed_clue();
        if !clue.is_empty() {
            matched.retain(|entry| Self::matches_clue(entry, clue));
        }

        // Never come back empty-handed while the bank has words
        if matched.is_empty() {
            matched = bank.iter().take(FALLBACK_COUNT).collect();
        }

        matched
            .into_iter()
            .take(MOCK_RESULT_LIMIT)
            .enumerate()
            .map(|(index, entry)| {
                WordResult::new(
                    index,
                    entry.word,
                    entry.definition,
                    Some(entry.example.to_string()),
                    0.95 - index as f64 * 0.07,
                )
            })
            .collect()
    }
}

#[async_trait]
impl WordSource for MockWordBank {
    async fn search(&self, params: &SearchParams) -> Result<Vec<WordResult>, SearchError> {
        Ok(self.generate(params))
    }
}
