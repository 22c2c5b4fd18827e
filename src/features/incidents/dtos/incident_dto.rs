use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::incidents::models::{
    IncidentSeverity, IncidentStatus, IncidentType, VerificationStatus, VoteDirection,
};
use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::types::PaginationMeta;
use crate::shared::validation::TAG_REGEX;

// ============================================================================
// Location
// ============================================================================

/// GeoJSON Point. Coordinates are `[lng, lat]`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = validate_geo_point))]
pub struct GeoPointDto {
    #[serde(rename = "type")]
    pub point_type: String,
    pub coordinates: Vec<f64>,
}

fn validate_geo_point(point: &GeoPointDto) -> Result<(), ValidationError> {
    if point.point_type != "Point" {
        return Err(ValidationError::new("geo_type").with_message("type must be \"Point\"".into()));
    }
    if point.coordinates.len() != 2 {
        return Err(ValidationError::new("geo_coordinates")
            .with_message("coordinates must be [lng, lat]".into()));
    }
    let (lng, lat) = (point.coordinates[0], point.coordinates[1]);
    if !(-180.0..=180.0).contains(&lng) || !(-90.0..=90.0).contains(&lat) {
        return Err(ValidationError::new("geo_range")
            .with_message("coordinates out of lng/lat range".into()));
    }
    Ok(())
}

impl GeoPointDto {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self {
            point_type: "Point".to_string(),
            coordinates: vec![lng, lat],
        }
    }

    pub fn lng(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn lat(&self) -> f64 {
        self.coordinates[1]
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIncidentDto {
    #[validate(length(min = 5, max = 200, message = "Title must be 5-200 characters"))]
    pub title: String,

    #[validate(length(min = 10, max = 2000, message = "Description must be 10-2000 characters"))]
    pub description: String,

    #[serde(rename = "type")]
    pub incident_type: IncidentType,

    #[serde(default = "default_severity")]
    pub severity: IncidentSeverity,

    #[validate(nested)]
    pub location: GeoPointDto,

    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,

    #[serde(default)]
    pub is_anonymous: bool,

    #[validate(custom(function = validate_tags))]
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_severity() -> IncidentSeverity {
    IncidentSeverity::Medium
}

fn validate_tags(tags: &Vec<String>) -> Result<(), ValidationError> {
    if tags.len() > 10 {
        return Err(ValidationError::new("tags").with_message("At most 10 tags".into()));
    }
    for tag in tags {
        if !TAG_REGEX.is_match(tag) {
            return Err(ValidationError::new("tags")
                .with_message("Tags must be lowercase-hyphenated".into()));
        }
    }
    Ok(())
}

/// Moderation update. All fields optional; omitted fields keep their
/// current value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIncidentDto {
    pub verification_status: Option<VerificationStatus>,
    pub verified_source: Option<String>,
    pub status: Option<IncidentStatus>,

    #[validate(length(max = 1000, message = "Resolution notes too long"))]
    pub resolution_notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    #[validate(length(min = 1, max = 500, message = "Comment must be 1-500 characters"))]
    pub text: String,

    #[serde(default)]
    pub is_anonymous: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequestDto {
    pub vote_type: VoteDirection,
}

/// List filters. Proximity filtering activates when `lat`, `lng`, and
/// `radius` (miles) are all present.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct IncidentQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Search radius in miles
    pub radius: Option<f64>,

    #[serde(rename = "type")]
    pub incident_type: Option<IncidentType>,
    pub severity: Option<IncidentSeverity>,
    /// Defaults to "active" when omitted; pass "all" to disable
    pub status: Option<String>,
    /// true → verified only, false → pending only
    pub verified: Option<bool>,

    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    #[serde(default = "default_limit")]
    #[param(minimum = 1, maximum = 100)]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReporterDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodRefDto {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDto {
    pub status: VerificationStatus,
    pub verified_by: Option<Uuid>,
    pub verified_at: Option<DateTime<Utc>>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: Uuid,
    /// Absent when the comment was posted anonymously
    pub author: Option<ReporterDto>,
    pub text: String,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncidentResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    pub severity: IncidentSeverity,
    pub location: GeoPointDto,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub neighborhood: Option<NeighborhoodRefDto>,
    /// Absent when the incident was reported anonymously
    pub reporter: Option<ReporterDto>,
    pub is_anonymous: bool,
    pub verification: VerificationDto,
    pub status: IncidentStatus,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolved_by: Option<Uuid>,
    pub resolution_notes: Option<String>,
    pub upvotes: i64,
    pub downvotes: i64,
    /// The caller's own vote; null for anonymous callers or when no vote
    /// has been cast
    pub user_vote: Option<VoteDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<CommentDto>>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncidentListResponseDto {
    pub incidents: Vec<IncidentResponseDto>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteResultDto {
    pub upvotes: i64,
    pub downvotes: i64,
    pub user_vote: VoteDirection,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeCountDto {
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    pub count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummaryDto {
    pub total: i64,
    pub active: i64,
    pub resolved: i64,
    pub verified: i64,
    pub this_week: i64,
    pub by_type: Vec<TypeCountDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateIncidentDto {
        CreateIncidentDto {
            title: "Car break-in on Elm St".to_string(),
            description: "Rear window smashed, glovebox emptied overnight".to_string(),
            incident_type: IncidentType::Theft,
            severity: IncidentSeverity::Medium,
            location: GeoPointDto::new(-122.4194, 37.7749),
            street: None,
            city: None,
            state: None,
            zip_code: None,
            is_anonymous: false,
            tags: vec!["break-in".to_string()],
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn short_title_rejected() {
        let mut dto = valid_create();
        dto.title = "Hi".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn non_point_geometry_rejected() {
        let mut dto = valid_create();
        dto.location.point_type = "Polygon".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn out_of_range_coordinates_rejected() {
        let mut dto = valid_create();
        dto.location.coordinates = vec![-200.0, 37.7749];
        assert!(dto.validate().is_err());

        dto.location.coordinates = vec![-122.0];
        assert!(dto.validate().is_err());
    }

    #[test]
    fn malformed_tags_rejected() {
        let mut dto = valid_create();
        dto.tags = vec!["Two Words".to_string()];
        assert!(dto.validate().is_err());
    }

    #[test]
    fn vote_request_parses_kebab_directions() {
        let dto: VoteRequestDto = serde_json::from_str(r#"{"voteType":"downvote"}"#).unwrap();
        assert_eq!(dto.vote_type, VoteDirection::Downvote);
    }
}
