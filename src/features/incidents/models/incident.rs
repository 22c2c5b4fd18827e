use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Category of a reported incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "incident_type", rename_all = "snake_case")]
#[serde(rename_all = "kebab-case")]
pub enum IncidentType {
    Theft,
    Vandalism,
    Assault,
    SuspiciousActivity,
    Fire,
    Accident,
    MedicalEmergency,
    RoadHazard,
    BrokenInfrastructure,
    NoiseDisturbance,
    TrafficViolation,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "incident_severity", rename_all = "snake_case")]
#[serde(rename_all = "kebab-case")]
pub enum IncidentSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Lifecycle state of an incident. Transitions are validated in
/// [`IncidentStatus::can_transition_to`]; anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "incident_status", rename_all = "snake_case")]
#[serde(rename_all = "kebab-case")]
pub enum IncidentStatus {
    Active,
    Resolved,
    FalseAlarm,
    Expired,
}

impl IncidentStatus {
    /// Active incidents may close in any direction; closed incidents are
    /// terminal. Identity transitions are always allowed so idempotent
    /// moderation updates do not fail.
    pub fn can_transition_to(self, next: IncidentStatus) -> bool {
        if self == next {
            return true;
        }
        matches!(self, IncidentStatus::Active)
    }
}

/// Community verification state, advanced by moderators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "verification_status", rename_all = "snake_case")]
#[serde(rename_all = "kebab-case")]
pub enum VerificationStatus {
    Pending,
    Verified,
    FalseAlarm,
    Resolved,
}

impl VerificationStatus {
    pub fn can_transition_to(self, next: VerificationStatus) -> bool {
        if self == next {
            return true;
        }
        match self {
            VerificationStatus::Pending => matches!(
                next,
                VerificationStatus::Verified | VerificationStatus::FalseAlarm
            ),
            VerificationStatus::Verified => matches!(next, VerificationStatus::Resolved),
            VerificationStatus::FalseAlarm | VerificationStatus::Resolved => false,
        }
    }
}

/// Direction of a relevance vote. One row per (incident, user) in the
/// ledger, so the two directions are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "vote_direction", rename_all = "snake_case")]
#[serde(rename_all = "kebab-case")]
pub enum VoteDirection {
    Upvote,
    Downvote,
}

#[derive(Debug, Clone, FromRow)]
pub struct Incident {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub incident_type: IncidentType,
    pub severity: IncidentSeverity,
    pub lat: f64,
    pub lng: f64,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub neighborhood_id: Uuid,
    pub reporter_id: Uuid,
    pub is_anonymous: bool,
    pub verification_status: VerificationStatus,
    pub verified_by: Option<Uuid>,
    pub verified_at: Option<DateTime<Utc>>,
    pub verified_source: Option<String>,
    pub status: IncidentStatus,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolved_by: Option<Uuid>,
    pub resolution_notes: Option<String>,
    pub tags: Vec<String>,
    pub push_sent: bool,
    pub email_sent: bool,
    pub sms_sent: bool,
    pub alerts_sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct IncidentComment {
    pub id: Uuid,
    pub incident_id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incident_types_use_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&IncidentType::SuspiciousActivity).unwrap();
        assert_eq!(json, "\"suspicious-activity\"");

        let parsed: IncidentType = serde_json::from_str("\"road-hazard\"").unwrap();
        assert_eq!(parsed, IncidentType::RoadHazard);
    }

    #[test]
    fn active_incidents_can_close_any_way() {
        assert!(IncidentStatus::Active.can_transition_to(IncidentStatus::Resolved));
        assert!(IncidentStatus::Active.can_transition_to(IncidentStatus::FalseAlarm));
        assert!(IncidentStatus::Active.can_transition_to(IncidentStatus::Expired));
    }

    #[test]
    fn closed_incidents_are_terminal() {
        assert!(!IncidentStatus::Resolved.can_transition_to(IncidentStatus::Active));
        assert!(!IncidentStatus::FalseAlarm.can_transition_to(IncidentStatus::Resolved));
        assert!(!IncidentStatus::Expired.can_transition_to(IncidentStatus::Active));
    }

    #[test]
    fn identity_transitions_are_allowed() {
        assert!(IncidentStatus::Resolved.can_transition_to(IncidentStatus::Resolved));
        assert!(VerificationStatus::Verified.can_transition_to(VerificationStatus::Verified));
    }

    #[test]
    fn verification_follows_pending_verified_resolved() {
        assert!(VerificationStatus::Pending.can_transition_to(VerificationStatus::Verified));
        assert!(VerificationStatus::Pending.can_transition_to(VerificationStatus::FalseAlarm));
        assert!(VerificationStatus::Verified.can_transition_to(VerificationStatus::Resolved));

        assert!(!VerificationStatus::Pending.can_transition_to(VerificationStatus::Resolved));
        assert!(!VerificationStatus::Verified.can_transition_to(VerificationStatus::Pending));
        assert!(!VerificationStatus::FalseAlarm.can_transition_to(VerificationStatus::Verified));
    }
}
