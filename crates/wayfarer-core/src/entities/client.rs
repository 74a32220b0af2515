use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A traveller managed by the agency.
///
/// `id`, `createdAt` and `updatedAt` are assigned by the store; values sent by
/// callers are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Budget range label, e.g. `$2,500 to $3,500`.
    #[serde(default)]
    pub budget: String,
    /// Preferred activity tags (`Beach`, `Culture`, ...).
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub loyalty_programs: Vec<LoyaltyMembership>,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// Membership in an airline, hotel, or rental loyalty program.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyMembership {
    pub program: String,
    #[serde(default)]
    pub member_id: String,
}
