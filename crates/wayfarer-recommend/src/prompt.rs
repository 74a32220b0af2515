//! Chat prompts for the two recommendation templates.

use std::fmt::Write;

use wayfarer_core::entities::{ForecastDay, WeatherContext};
use wayfarer_core::enums::ExplorationType;

use crate::preferences::{DEFAULT_BUDGET, DEFAULT_GROUP_SIZE, UserPreferences};

const OVERVIEW_SYSTEM: &str = "You are an experienced travel guide. Give practical information about \
destinations: top attractions, activities, culture, food, neighborhoods, transportation, and budget \
tips. Be inspiring but concise.";

const DETAILED_SYSTEM: &str = "You are an experienced travel guide. Give detailed, practical \
recommendations that account for the weather, traveler preferences, budget, and group needs. \
Prioritize safety and cultural sensitivity.";

const JSON_INSTRUCTIONS: &str = r#"Please provide specific recommendations for each day including activities, dining, and weather considerations.

Format as JSON:
{
  "days": [
    {
      "dayNumber": 1,
      "date": "YYYY-MM-DD",
      "overallRecommendation": "brief summary",
      "morningActivities": ["activity 1", "activity 2"],
      "afternoonActivities": ["activity 1", "activity 2"],
      "eveningActivities": ["activity 1", "activity 2"],
      "diningRecommendations": ["restaurant 1", "restaurant 2"]
    }
  ],
  "generalTips": ["tip 1", "tip 2"]
}"#;

const PLAIN_INSTRUCTIONS: &str = "Please provide destination recommendations including attractions, \
activities, dining, and cultural experiences.";

#[must_use]
pub const fn system_prompt(exploration: ExplorationType) -> &'static str {
    match exploration {
        ExplorationType::DestinationOverview => OVERVIEW_SYSTEM,
        ExplorationType::DetailedItinerary => DETAILED_SYSTEM,
    }
}

/// Build the user message for `context` under the template `prefs` selects.
///
/// `prefs` is expected to be normalized already.
#[must_use]
pub fn build_prompt(context: &WeatherContext, prefs: &UserPreferences) -> String {
    match prefs.exploration_type {
        ExplorationType::DestinationOverview => {
            overview_prompt(&context.location, prefs.time_of_year.as_deref())
        }
        ExplorationType::DetailedItinerary => detailed_prompt(context, prefs),
    }
}

fn overview_prompt(location: &str, time_of_year: Option<&str>) -> String {
    let mut prompt = format!("Tell me about visiting {location}");
    if let Some(season) = time_of_year {
        let _ = write!(prompt, " in {season}");
    }
    prompt.push_str(".\n\nI want to know about:\n");
    prompt.push_str("- Top attractions and must-see places\n");
    prompt.push_str("- Activities and experiences\n");
    prompt.push_str("- Local culture and food\n");
    prompt.push_str("- The best neighborhoods\n");
    if let Some(season) = time_of_year {
        let _ = writeln!(prompt, "- What is special about {season}");
        let _ = writeln!(prompt, "- Typical weather in {season}");
    }
    prompt.push_str("- Local customs\n");
    prompt.push_str("- Getting around\n");
    prompt.push_str("- Budget options\n");
    prompt.push_str("- Hidden gems\n\n");
    prompt.push_str("Write an engaging overview in a conversational tone.");
    prompt
}

fn detailed_prompt(context: &WeatherContext, prefs: &UserPreferences) -> String {
    let mut prompt = format!(
        "Planning a {} trip to {}.\n\n",
        prefs.trip_type, context.location
    );

    if !context.days.is_empty() {
        prompt.push_str("Weather forecast:\n");
        for (index, day) in context.days.iter().enumerate() {
            prompt.push_str(&forecast_line(index + 1, day));
            prompt.push('\n');
        }
        prompt.push('\n');
    }

    if prefs.has_trip_details() {
        prompt.push_str("Trip details:\n");
        if prefs.group_size != DEFAULT_GROUP_SIZE {
            let _ = writeln!(prompt, "- Group size: {}", prefs.group_size);
        }
        if prefs.budget != DEFAULT_BUDGET {
            let _ = writeln!(prompt, "- Budget level: {}", prefs.budget);
        }
        if !prefs.activity_types.is_empty() {
            let _ = writeln!(
                prompt,
                "- Preferred activities: {}",
                prefs.activity_types.join(", ")
            );
        }
        if let Some(notes) = &prefs.client_preferences {
            let _ = writeln!(prompt, "- Client notes: {notes}");
        }
        if let Some(notes) = &prefs.additional_notes {
            let _ = writeln!(prompt, "- Additional notes: {notes}");
        }
        prompt.push('\n');
    }

    if context.days.is_empty() {
        prompt.push_str(PLAIN_INSTRUCTIONS);
    } else {
        prompt.push_str(JSON_INSTRUCTIONS);
    }
    prompt
}

/// `Day N (date): temp°F, conditions[, humidity% humidity][, wind mph wind]`
///
/// Zero humidity and zero wind are left out, like missing values.
fn forecast_line(number: usize, day: &ForecastDay) -> String {
    let temp = day
        .temp
        .map_or_else(|| "n/a".to_string(), |t| format!("{t}°F"));
    let conditions = day.conditions.as_deref().unwrap_or("conditions unknown");
    let mut line = format!("Day {number} ({}): {temp}, {conditions}", day.date);
    if let Some(humidity) = day.humidity.filter(|h| *h != 0.0) {
        let _ = write!(line, ", {humidity}% humidity");
    }
    if let Some(wind) = day.windspeed.filter(|w| *w != 0.0) {
        let _ = write!(line, ", {wind} mph wind");
    }
    line
}
