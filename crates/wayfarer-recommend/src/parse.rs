//! Heuristic post-processing of completion text.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Value, json};
use wayfarer_core::entities::{RecommendationResult, WeatherContext};
use wayfarer_core::enums::ExplorationType;

use crate::fallback::{static_fallback, text_fallback};

const MAX_KEY_POINTS: usize = 8;
const SENTENCE_FALLBACK_COUNT: usize = 5;
const MIN_SENTENCE_CHARS: usize = 10;
const BULLET_MARKERS: [char; 3] = ['•', '-', '*'];
const HIGHLIGHT_WORDS: [&str; 3] = ["must", "popular", "best"];

pub const PARSE_FAILURE: &str = "Failed to parse response";

static JSON_BLOCK: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

/// The span from the first `{` through the last `}`, if any.
#[must_use]
pub fn find_json_block(text: &str) -> Option<&str> {
    JSON_BLOCK
        .get_or_init(|| Regex::new(r"(?s)\{.*\}"))
        .as_ref()
        .ok()?
        .find(text)
        .map(|m| m.as_str())
}

/// Pull highlight lines out of free-form guide text.
///
/// Bulleted lines (marker stripped) and lines mentioning a highlight word are
/// kept, at most eight. Text without any falls back to its first five
/// sentences, keeping only those longer than ten characters.
#[must_use]
pub fn extract_key_points(text: &str) -> Vec<String> {
    let highlights: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter_map(|line| {
            if let Some(rest) = line.strip_prefix(BULLET_MARKERS) {
                Some(rest.trim().to_string())
            } else if HIGHLIGHT_WORDS.iter().any(|word| line.contains(word)) {
                Some(line.to_string())
            } else {
                None
            }
        })
        .filter(|point| !point.is_empty())
        .collect();

    if highlights.is_empty() {
        return text
            .split('.')
            .take(SENTENCE_FALLBACK_COUNT)
            .map(str::trim)
            .filter(|sentence| sentence.chars().count() > MIN_SENTENCE_CHARS)
            .map(str::to_string)
            .collect();
    }

    highlights.into_iter().take(MAX_KEY_POINTS).collect()
}

/// Turn a completion into a [`RecommendationResult`].
///
/// Overview completions become key points. Detailed completions are expected
/// to hold a JSON object, passed through as-is; prose without braces becomes
/// per-day placeholders, and an unparseable brace block becomes the static
/// fallback with `success: false`.
#[must_use]
pub fn parse_completion(
    text: &str,
    context: &WeatherContext,
    exploration: ExplorationType,
) -> RecommendationResult {
    let raw_response = Some(text.to_string());

    if exploration == ExplorationType::DestinationOverview {
        return RecommendationResult {
            success: true,
            recommendations: json!({
                "generalTips": extract_key_points(text),
                "destinationOverview": true,
            }),
            raw_response,
            error: None,
        };
    }

    let Some(block) = find_json_block(text) else {
        tracing::debug!("completion has no JSON object, using text placeholders");
        return RecommendationResult {
            success: true,
            recommendations: text_fallback(text, &context.days),
            raw_response,
            error: None,
        };
    };

    match serde_json::from_str::<Value>(block) {
        Ok(recommendations) => RecommendationResult {
            success: true,
            recommendations,
            raw_response,
            error: None,
        },
        Err(error) => {
            tracing::warn!(%error, "completion JSON did not parse, using static fallback");
            RecommendationResult {
                success: false,
                recommendations: static_fallback(&context.location),
                raw_response,
                error: Some(PARSE_FAILURE.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn context(days: usize) -> WeatherContext {
        let days = (1..=days)
            .map(|d| serde_json::from_value(json!({"date": format!("2024-08-{d:02}")})).unwrap())
            .collect();
        WeatherContext {
            location: "Barcelona".into(),
            days,
        }
    }

    #[test]
    fn bullets_are_stripped_and_kept() {
        let text = "Intro line\n• Sagrada Familia\n- Park Güell\n  * Gothic Quarter  \nOutro";
        assert_eq!(
            extract_key_points(text),
            vec!["Sagrada Familia", "Park Güell", "Gothic Quarter"]
        );
    }

    #[test]
    fn bare_bullets_are_dropped() {
        let text = "- Belém Tower\n-\n•   \n- Time Out Market";
        assert_eq!(
            extract_key_points(text),
            vec!["Belém Tower", "Time Out Market"]
        );
    }

    #[test]
    fn highlight_words_keep_whole_line() {
        let text = "The beach is popular in summer.\nNothing here.\nYou must try tapas.";
        assert_eq!(
            extract_key_points(text),
            vec!["The beach is popular in summer.", "You must try tapas."]
        );
    }

    #[test]
    fn highlight_words_are_case_sensitive() {
        let text = "Best of all, the sea. Short. Another sentence that is long enough";
        let points = extract_key_points(text);
        assert_eq!(points, vec!["Best of all, the sea", "Another sentence that is long enough"]);
    }

    #[test]
    fn key_points_are_capped_at_eight() {
        let text = (1..=12).map(|i| format!("- point {i}")).collect::<Vec<_>>().join("\n");
        let points = extract_key_points(&text);
        assert_eq!(points.len(), 8);
        assert_eq!(points[7], "point 8");
    }

    #[test]
    fn sentence_fallback_takes_first_five_long_fragments() {
        let text = "Barcelona sits on the coast. Go. The food scene is excellent. \
                    Architecture is everywhere you look. Nights run late here. \
                    This sixth sentence is ignored.";
        let points = extract_key_points(text);
        assert_eq!(
            points,
            vec![
                "Barcelona sits on the coast",
                "The food scene is excellent",
                "Architecture is everywhere you look",
                "Nights run late here",
            ]
        );
    }

    #[test]
    fn json_block_spans_first_to_last_brace() {
        let text = "Here you go:\n{\"days\": [{\"dayNumber\": 1}]}\nEnjoy {your} trip";
        assert_eq!(
            find_json_block(text),
            Some("{\"days\": [{\"dayNumber\": 1}]}\nEnjoy {your}")
        );
        assert_eq!(find_json_block("no braces"), None);
    }

    #[test]
    fn overview_result_marks_destination_overview() {
        let result = parse_completion(
            "- Visit the beach",
            &context(0),
            ExplorationType::DestinationOverview,
        );
        assert!(result.success);
        assert_eq!(result.recommendations["destinationOverview"], true);
        assert_eq!(result.recommendations["generalTips"], json!(["Visit the beach"]));
        assert_eq!(result.raw_response.as_deref(), Some("- Visit the beach"));
    }

    #[test]
    fn detailed_json_is_passed_through() {
        let text = "Sure!\n```json\n{\"days\": [], \"generalTips\": [\"Pack light\"], \"extra\": 1}\n```";
        let result = parse_completion(text, &context(2), ExplorationType::DetailedItinerary);
        assert!(result.success);
        assert_eq!(
            result.recommendations,
            json!({"days": [], "generalTips": ["Pack light"], "extra": 1})
        );
        assert_eq!(result.error, None);
    }

    #[test]
    fn detailed_prose_gets_placeholders() {
        let text = "Day one: wander the old town. Day two: beach.";
        let result = parse_completion(text, &context(2), ExplorationType::DetailedItinerary);
        assert!(result.success);
        assert_eq!(result.recommendations["fallback"], true);
        assert_eq!(result.recommendations["days"].as_array().unwrap().len(), 2);
        assert_eq!(result.recommendations["textResponse"], text);
    }

    #[test]
    fn detailed_broken_json_uses_static_fallback() {
        let text = "{\"days\": [ {\"dayNumber\": 1, } }".to_string();
        let result = parse_completion(&text, &context(1), ExplorationType::DetailedItinerary);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some(PARSE_FAILURE));
        assert_eq!(result.recommendations["fallback"], true);
        assert_eq!(
            result.recommendations["generalTips"][0],
            "Explore top attractions in Barcelona"
        );
        assert_eq!(result.raw_response, Some(text));
    }
}
