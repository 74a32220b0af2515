//! Entity kinds, exploration modes, outdoor ratings, and service states.
//!
//! Wire names follow the frontend's conventions: exploration modes and outdoor
//! ratings are kebab-case strings, service states are `snake_case`.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// The kinds of stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Client,
    Itinerary,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Itinerary => "itinerary",
        }
    }

    /// Capitalized name used in user-facing messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Itinerary => "Itinerary",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// ExplorationType
// ---------------------------------------------------------------------------

/// Which prompt template the AI proxy uses.
///
/// Only the exact string `destination-overview` selects the overview template.
/// Every other value, including unknown ones, means detailed itinerary
/// planning, so deserialization never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ExplorationType {
    DestinationOverview,
    #[default]
    DetailedItinerary,
}

impl ExplorationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DestinationOverview => "destination-overview",
            Self::DetailedItinerary => "detailed-itinerary",
        }
    }

    #[must_use]
    pub fn parse_lossy(value: &str) -> Self {
        if value == Self::DestinationOverview.as_str() {
            Self::DestinationOverview
        } else {
            Self::DetailedItinerary
        }
    }
}

impl<'de> Deserialize<'de> for ExplorationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map_or_else(Self::default, |v| Self::parse_lossy(&v)))
    }
}

impl fmt::Display for ExplorationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OutdoorRating
// ---------------------------------------------------------------------------

/// How suitable a day's weather is for outdoor activities.
///
/// Ordered from least to most suitable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutdoorRating {
    StayIndoors,
    LimitedOutdoor,
    ModerateOutdoor,
    GoodOutdoor,
    PerfectOutdoor,
}

impl OutdoorRating {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StayIndoors => "stay-indoors",
            Self::LimitedOutdoor => "limited-outdoor",
            Self::ModerateOutdoor => "moderate-outdoor",
            Self::GoodOutdoor => "good-outdoor",
            Self::PerfectOutdoor => "perfect-outdoor",
        }
    }
}

impl fmt::Display for OutdoorRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ServiceStatus
// ---------------------------------------------------------------------------

/// Whether an upstream provider has credentials configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Configured,
    NotConfigured,
}

impl ServiceStatus {
    #[must_use]
    pub const fn from_configured(configured: bool) -> Self {
        if configured {
            Self::Configured
        } else {
            Self::NotConfigured
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Configured => "configured",
            Self::NotConfigured => "not_configured",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
