//! Entity structs for all Wayfarer domain objects.
//!
//! Stored records ([`Client`], [`Itinerary`]) and the weather and recommendation
//! types embedded in or returned alongside them. All structs use camelCase on
//! the wire and derive `JsonSchema` for schema validation in tests.

mod client;
mod form;
mod itinerary;
mod recommendation;
mod weather;

pub use client::{Client, LoyaltyMembership};
pub use itinerary::{Activities, DailyPlan, Itinerary, PlanWeather};
pub use recommendation::{DayRecommendation, RecommendationResult, WeatherContext};
pub use weather::{Forecast, ForecastDay, WeatherSnapshot};
