//! Shared handler state.

use std::sync::Arc;

use axum::extract::FromRef;
use wayfarer_config::AppConfig;
use wayfarer_core::entities::{Client, Itinerary};
use wayfarer_recommend::Recommender;
use wayfarer_store::MemoryStore;
use wayfarer_upstream::{ChatClient, UpstreamError, WeatherClient};

/// Everything a handler can reach. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub weather: WeatherClient,
    pub recommender: Recommender,
    pub clients: MemoryStore<Client>,
    pub itineraries: MemoryStore<Itinerary>,
}

impl AppState {
    /// Build upstream clients from `config` and start with empty stores.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Http`] if an HTTP client cannot be built.
    pub fn new(config: AppConfig) -> Result<Self, UpstreamError> {
        let weather = WeatherClient::new(&config.weather)?;
        let recommender = Recommender::new(ChatClient::new(&config.ai)?);
        Ok(Self {
            config: Arc::new(config),
            weather,
            recommender,
            clients: MemoryStore::new(),
            itineraries: MemoryStore::new(),
        })
    }
}

impl FromRef<AppState> for MemoryStore<Client> {
    fn from_ref(state: &AppState) -> Self {
        state.clients.clone()
    }
}

impl FromRef<AppState> for MemoryStore<Itinerary> {
    fn from_ref(state: &AppState) -> Self {
        state.itineraries.clone()
    }
}
