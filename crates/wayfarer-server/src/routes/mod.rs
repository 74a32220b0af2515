//! Route tables, one module per resource.

pub mod health;
pub mod records;
pub mod recommendations;
pub mod weather;

/// Health endpoint path.
pub const HEALTH_PATH: &str = "/health";
/// Forecast proxy path.
pub const FORECAST_PATH: &str = "/api/weather/forecast";
/// Current-conditions proxy path.
pub const CURRENT_WEATHER_PATH: &str = "/api/weather/current";
/// AI recommendation path.
pub const AI_RECOMMENDATIONS_PATH: &str = "/api/weather/ai-recommendations";
/// Destination overview path.
pub const EXPLORE_DESTINATION_PATH: &str = "/api/explore-destination";
/// Client collection path.
pub const CLIENTS_PATH: &str = "/api/clients";
/// Client detail path.
pub const CLIENT_PATH: &str = "/api/clients/:id";
/// Itinerary collection path.
pub const ITINERARIES_PATH: &str = "/api/itineraries";
/// Itinerary detail path.
pub const ITINERARY_PATH: &str = "/api/itineraries/:id";
/// Itinerary forecast refresh path.
pub const ITINERARY_WEATHER_PATH: &str = "/api/itineraries/:id/weather";
