use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A geographic community area. Incidents and users attach to the nearest
/// neighborhood within the attach radius of their coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub center_lat: f64,
    pub center_lng: f64,
    /// Opaque coverage scalar carried through from registration; compared
    /// against caller-supplied limits but never unit-converted.
    pub radius: f64,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub country: String,
    pub allow_anonymous_reports: bool,
    pub auto_verify_threshold: i32,
    pub total_residents: i32,
    pub total_incidents: i32,
    pub incidents_this_month: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
