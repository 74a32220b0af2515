//! Client and itinerary CRUD routes.
//!
//! Handlers are generic over the record type; each store is pulled out of
//! [`AppState`] through `FromRef`.

use axum::extract::{FromRef, Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use wayfarer_core::entities::{Client, Itinerary};
use wayfarer_core::planning::{DateRange, assemble_daily_plans};
use wayfarer_core::record::{Record, from_body};
use wayfarer_core::responses::DeleteResponse;
use wayfarer_store::MemoryStore;

use super::{CLIENT_PATH, CLIENTS_PATH, ITINERARIES_PATH, ITINERARY_PATH, ITINERARY_WEATHER_PATH};
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(CLIENTS_PATH, get(list::<Client>).post(create::<Client>))
        .route(
            CLIENT_PATH,
            get(fetch::<Client>)
                .put(update::<Client>)
                .delete(remove::<Client>),
        )
        .route(ITINERARIES_PATH, get(list::<Itinerary>).post(create::<Itinerary>))
        .route(
            ITINERARY_PATH,
            get(fetch::<Itinerary>)
                .put(update::<Itinerary>)
                .delete(remove::<Itinerary>),
        )
        .route(ITINERARY_WEATHER_PATH, post(refresh_itinerary_weather))
}

async fn list<T>(State(store): State<MemoryStore<T>>) -> Json<Vec<T>>
where
    T: Record,
    MemoryStore<T>: FromRef<AppState>,
{
    Json(store.list().await)
}

async fn create<T>(
    State(store): State<MemoryStore<T>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<T>), ApiError>
where
    T: Record,
    MemoryStore<T>: FromRef<AppState>,
{
    let record: T = from_body(body)?;
    let created = store.create(record).await?;
    tracing::info!(kind = T::KIND.as_str(), id = created.id(), "record created");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn fetch<T>(
    State(store): State<MemoryStore<T>>,
    Path(id): Path<String>,
) -> Result<Json<T>, ApiError>
where
    T: Record,
    MemoryStore<T>: FromRef<AppState>,
{
    Ok(Json(store.get(&id).await?))
}

async fn update<T>(
    State(store): State<MemoryStore<T>>,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> Result<Json<T>, ApiError>
where
    T: Record,
    MemoryStore<T>: FromRef<AppState>,
{
    Ok(Json(store.update(&id, patch).await?))
}

async fn remove<T>(
    State(store): State<MemoryStore<T>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError>
where
    T: Record,
    MemoryStore<T>: FromRef<AppState>,
{
    let removed = store.delete(&id).await?;
    tracing::info!(kind = T::KIND.as_str(), id = removed.id(), "record deleted");
    Ok(Json(DeleteResponse {
        message: format!("{} deleted successfully", T::KIND),
        id: removed.id().to_string(),
    }))
}

/// Rebuild an itinerary's daily plans from a fresh forecast.
///
/// Only `dailyPlans` is written back, and it is rebuilt from the record as
/// stored once the forecast arrives.
async fn refresh_itinerary_weather(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Itinerary>, ApiError> {
    let itinerary = state.itineraries.get(&id).await?;
    let (Some(start), Some(end)) = (itinerary.start_date, itinerary.end_date) else {
        return Err(ApiError::bad_request(
            "Itinerary needs a start and end date to fetch weather",
        ));
    };
    let range = DateRange::new(start, end)?;

    let forecast = state
        .weather
        .forecast(&itinerary.destination, range)
        .await
        .map_err(|e| ApiError::weather(&e))?;
    let refreshed = state
        .itineraries
        .modify(&id, |current| {
            current.daily_plans =
                assemble_daily_plans(range, &forecast.days, &current.daily_plans);
        })
        .await?;
    tracing::info!(
        id = %refreshed.id,
        days = range.day_count(),
        forecast_days = forecast.days.len(),
        "itinerary weather refreshed"
    );

    Ok(Json(refreshed))
}
