//! Completion-text parsing
//!
//! Turns free-form model output into a validated result list. Models
//! occasionally wrap the JSON in prose or markdown fencing, so the parser
//! extracts the first array-of-objects shaped substring before decoding.

use crate::error::ParseError;
use crate::results::{generate_id, WordResult, FALLBACK_DEFINITION};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Matches an array of objects, spanning newlines
static JSON_ARRAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[\s*\{.*\}\s*\]").expect("invalid array regex"));

/// Parse completion text into a result list.
///
/// Field-level damage is repaired in place (placeholder words, fallback
/// definitions, clamped confidence); only a missing or undecodable array
/// is an error. The orchestrator treats that error as an empty result set.
pub fn parse_completion(raw: &str) -> Result<Vec<WordResult>, ParseError> {
    let candidate = JSON_ARRAY_RE
        .find(raw)
        .ok_or(ParseError::NoArrayFound)?
        .as_str();

    let value: Value = serde_json::from_str(candidate)
        .map_err(|e| ParseError::InvalidJson(e.to_string()))?;

    let items = value.as_array().ok_or(ParseError::NotAnArray)?;

    Ok(items
        .iter()
        .enumerate()
        .map(|(index, item)| coerce_result(index, item))
        .collect())
}

/// Map one array element onto a result, defaulting every damaged field
fn coerce_result(index: usize, item: &Value) -> WordResult {
    let word = item
        .get("word")
        .and_then(|w| w.as_str())
        .map(|w| w.to_uppercase())
        .unwrap_or_else(|| format!("UNKNOWN-{}", index));

    let definition = item
        .get("definition")
        .and_then(|d| d.as_str())
        .unwrap_or(FALLBACK_DEFINITION)
        .to_string();

    let example = item
        .get("example")
        .and_then(|e| e.as_str())
        .map(|e| e.to_string());

    let confidence = item
        .get("confidence")
        .and_then(|c| c.as_f64())
        .filter(|c| c.is_finite())
        .map(|c| c.clamp(0.0, 1.0))
        .unwrap_or(0.5);

    WordResult {
        id: generate_id(index),
        word,
        definition,
        example,
        confidence,
        is_saved: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_array_with_surrounding_prose() {
        let raw = "Here is the answer:\n[{\"word\":\"cat\",\"definition\":\"a feline\",\"confidence\":1.4}]";
        let results = parse_completion(raw).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "CAT");
        assert_eq!(results[0].definition, "a feline");
        assert_eq!(results[0].confidence, 1.0);
        assert!(!results[0].is_saved);
    }

    #[test]
    fn test_parses_markdown_fenced_array() {
        let raw = "```json\n[{\"word\":\"dog\",\"definition\":\"a canine\",\"example\":\"The dog barked.\",\"confidence\":0.8}]\n```";
        let results = parse_completion(raw).unwrap();
        assert_eq!(results[0].word, "DOG");
        assert_eq!(results[0].example.as_deref(), Some("The dog barked."));
    }

    #[test]
    fn test_garbage_input_is_an_error_not_a_panic() {
        assert_eq!(
            parse_completion("no structured data here"),
            Err(ParseError::NoArrayFound)
        );
        assert!(matches!(
            parse_completion("text [{ broken json }] more"),
            Err(ParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_damaged_fields_are_defaulted() {
        let raw = r#"[{"definition": 42, "confidence": "high"}, {"word": "owl"}]"#;
        let results = parse_completion(raw).unwrap();

        assert_eq!(results[0].word, "UNKNOWN-0");
        assert_eq!(results[0].definition, FALLBACK_DEFINITION);
        assert_eq!(results[0].example, None);
        assert_eq!(results[0].confidence, 0.5);

        assert_eq!(results[1].word, "OWL");
        assert_eq!(results[1].confidence, 0.5);
    }

    #[test]
    fn test_negative_confidence_clamped_to_zero() {
        let raw = r#"[{"word": "elk", "confidence": -0.3}]"#;
        let results = parse_completion(raw).unwrap();
        assert_eq!(results[0].confidence, 0.0);
    }

    #[test]
    fn test_ids_unique_within_one_parse() {
        let raw = r#"[{"word": "one"}, {"word": "two"}, {"word": "six"}]"#;
        let results = parse_completion(raw).unwrap();
        let mut ids: Vec<_> = results.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
