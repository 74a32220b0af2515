//! # wayfarer-recommend
//!
//! Turns a forecast and a set of traveler preferences into a chat prompt, and
//! turns the completion text back into structured recommendations.
//!
//! Two templates exist, chosen by [`ExplorationType`]:
//! - destination overview: conversational guide text, reduced to key points
//! - detailed itinerary: per-day plans requested as JSON and located in the
//!   completion by brace matching
//!
//! Completions that cannot be used degrade to synthesized fallback objects
//! marked with `"fallback": true`; [`Recommender::recommend_or_fallback`]
//! never fails.
//!
//! [`ExplorationType`]: wayfarer_core::enums::ExplorationType

pub mod fallback;
pub mod parse;
pub mod preferences;
pub mod prompt;
pub mod service;

pub use preferences::UserPreferences;
pub use service::Recommender;
