//! Visual Crossing timeline API client.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};
use wayfarer_config::WeatherConfig;
use wayfarer_core::entities::{Forecast, ForecastDay};
use wayfarer_core::planning::DateRange;

use crate::error::UpstreamError;
use crate::http::{build_client, check_response};

/// Daily elements requested for forecasts.
pub const FORECAST_ELEMENTS: &str =
    "datetime,tempmax,tempmin,temp,conditions,description,humidity,windspeed,visibility,uvindex,icon";

/// Elements requested for current conditions.
pub const CURRENT_ELEMENTS: &str =
    "datetime,temp,conditions,description,humidity,windspeed,visibility,uvindex,icon";

const SERVICE: &str = "weather";

#[derive(Deserialize)]
struct Timeline {
    #[serde(default)]
    days: Vec<TimelineDay>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct TimelineDay {
    datetime: NaiveDate,
    temp: Option<f64>,
    tempmax: Option<f64>,
    tempmin: Option<f64>,
    conditions: Option<String>,
    description: Option<String>,
    humidity: Option<f64>,
    windspeed: Option<f64>,
    visibility: Option<f64>,
    uvindex: Option<f64>,
    icon: Option<String>,
}

impl From<TimelineDay> for ForecastDay {
    fn from(day: TimelineDay) -> Self {
        Self {
            date: day.datetime,
            temp: day.temp,
            tempmax: day.tempmax,
            tempmin: day.tempmin,
            conditions: day.conditions,
            description: day.description,
            humidity: day.humidity,
            windspeed: day.windspeed,
            visibility: day.visibility,
            uvindex: day.uvindex,
            icon: day.icon,
        }
    }
}

impl From<Timeline> for Forecast {
    fn from(timeline: Timeline) -> Self {
        Self {
            days: timeline.days.into_iter().map(ForecastDay::from).collect(),
            extra: timeline.extra,
        }
    }
}

/// HTTP client for the weather provider.
///
/// Every call is a fresh upstream request: nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    unit_group: String,
}

impl WeatherClient {
    /// Create a weather client from configuration.
    ///
    /// A missing API key is not an error here; requests fail with
    /// [`UpstreamError::NotConfigured`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Http`] if the underlying client fails to build.
    pub fn new(config: &WeatherConfig) -> Result<Self, UpstreamError> {
        Ok(Self {
            http: build_client(config.timeout_secs)?,
            api_key: config.api_key.trim().to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            unit_group: config.unit_group.clone(),
        })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Fetch the daily forecast for `location` over `range`.
    ///
    /// Days are reshaped into [`ForecastDay`] records; every other top-level
    /// field of the provider response is passed through untouched.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if no key is configured, the request fails,
    /// the provider returns a non-success status, or the body cannot be parsed.
    pub async fn forecast(
        &self,
        location: &str,
        range: DateRange,
    ) -> Result<Forecast, UpstreamError> {
        self.ensure_configured()?;
        let url = format!(
            "{}/{}/{}/{}?key={}&unitGroup={}&include=days&elements={FORECAST_ELEMENTS}",
            self.base_url,
            urlencoding::encode(location),
            range.start(),
            range.end(),
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&self.unit_group),
        );
        tracing::debug!(
            location,
            start = %range.start(),
            end = %range.end(),
            "requesting weather forecast"
        );

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let timeline: Timeline = resp.json().await?;
        let forecast = Forecast::from(timeline);
        tracing::debug!(location, days = forecast.days.len(), "weather forecast received");
        Ok(forecast)
    }

    /// Fetch today's current conditions for `location`, returned as the
    /// provider sent them.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] under the same conditions as [`Self::forecast`].
    pub async fn current(&self, location: &str) -> Result<Value, UpstreamError> {
        self.ensure_configured()?;
        let url = format!(
            "{}/{}/today?key={}&unitGroup={}&include=current&elements={CURRENT_ELEMENTS}",
            self.base_url,
            urlencoding::encode(location),
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&self.unit_group),
        );
        tracing::debug!(location, "requesting current weather");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    fn ensure_configured(&self) -> Result<(), UpstreamError> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(UpstreamError::NotConfigured { service: SERVICE })
        }
    }
}
