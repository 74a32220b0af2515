//! Date ranges and weather-driven daily plan assembly.

use chrono::NaiveDate;

use crate::advice::advise;
use crate::entities::{DailyPlan, ForecastDay, PlanWeather, WeatherSnapshot};
use crate::errors::CoreError;

const ISO_DATE: &str = "%Y-%m-%d";

/// An inclusive, validated range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start > end`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the start date is after the end date.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::validation(
                "Start date must be on or before end date",
            ));
        }
        Ok(Self { start, end })
    }

    /// Parse `YYYY-MM-DD` strings into a range.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for malformed dates or an inverted range.
    pub fn parse(start: &str, end: &str) -> Result<Self, CoreError> {
        Self::new(parse_iso_date(start)?, parse_iso_date(end)?)
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days, counting both ends.
    #[must_use]
    pub fn day_count(&self) -> usize {
        usize::try_from((self.end - self.start).num_days()).unwrap_or(0) + 1
    }

    /// Every day in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if the string is not a valid ISO date.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = value.trim();
    if trimmed.len() != 10 {
        return Err(CoreError::validation("Dates must be in YYYY-MM-DD format"));
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE)
        .map_err(|_| CoreError::validation("Dates must be in YYYY-MM-DD format"))
}

/// Build one daily plan per day of `range`.
///
/// Weather is copied from the forecast day with the same date, when there is
/// one, together with activity advice for it. Activities already planned for a
/// date in `existing` are carried over; every other day starts empty. Undated
/// rows in `existing` are dropped.
#[must_use]
pub fn assemble_daily_plans(
    range: DateRange,
    forecast: &[ForecastDay],
    existing: &[DailyPlan],
) -> Vec<DailyPlan> {
    range
        .days()
        .map(|date| {
            let snapshot = forecast
                .iter()
                .find(|day| day.date == date)
                .map(WeatherSnapshot::from);
            let advice = snapshot.as_ref().map(advise);
            let activities = existing
                .iter()
                .find(|plan| plan.date == Some(date))
                .map(|plan| plan.activities.clone())
                .unwrap_or_default();

            DailyPlan {
                date: Some(date),
                weather: snapshot.map(PlanWeather::Forecast),
                activities,
                advice,
            }
        })
        .collect()
}
