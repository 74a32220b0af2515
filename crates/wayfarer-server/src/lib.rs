//! # wayfarer-server
//!
//! axum HTTP surface for Wayfarer:
//! - `GET /health`
//! - weather proxy: `GET /api/weather/forecast`, `GET /api/weather/current`
//! - AI proxy: `POST /api/weather/ai-recommendations`, `POST /api/explore-destination`
//! - records: `/api/clients[/:id]`, `/api/itineraries[/:id]`,
//!   `POST /api/itineraries/:id/weather`

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;

pub use error::ApiError;
pub use state::AppState;

/// Assemble every route over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .merge(routes::weather::routes())
        .merge(routes::recommendations::routes())
        .merge(routes::records::routes())
        .with_state(state)
}
