use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::incidents::dtos::GeoPointDto;
use crate::features::incidents::models::{IncidentSeverity, IncidentType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentAlertKind {
    New,
    Update,
    Resolved,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncidentAlertDto {
    pub incident_id: Uuid,

    #[serde(rename = "type", default = "default_alert_kind")]
    pub kind: IncidentAlertKind,
}

fn default_alert_kind() -> IncidentAlertKind {
    IncidentAlertKind::New
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyAlertDto {
    #[validate(length(min = 5, max = 200, message = "Title must be 5-200 characters"))]
    pub title: String,

    #[validate(length(min = 10, max = 1000, message = "Message must be 10-1000 characters"))]
    pub message: String,

    #[validate(custom(function = validate_emergency_severity))]
    pub severity: IncidentSeverity,

    #[validate(nested)]
    pub location: GeoPointDto,
}

fn validate_emergency_severity(severity: &IncidentSeverity) -> Result<(), ValidationError> {
    match severity {
        IncidentSeverity::High | IncidentSeverity::Critical => Ok(()),
        _ => Err(ValidationError::new("severity")
            .with_message("Emergency broadcasts must be high or critical severity".into())),
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertDeliveryDto {
    pub recipients: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertHistoryEntryDto {
    pub incident_id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    pub severity: IncidentSeverity,
    pub push_sent: bool,
    pub email_sent: bool,
    pub sms_sent: bool,
    pub alerts_sent_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emergency_rejects_low_severity() {
        let dto = EmergencyAlertDto {
            title: "Gas leak on 5th Ave".to_string(),
            message: "Evacuate the block until the utility crew clears the leak".to_string(),
            severity: IncidentSeverity::Low,
            location: GeoPointDto::new(-122.4194, 37.7749),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn emergency_accepts_critical_severity() {
        let dto = EmergencyAlertDto {
            title: "Gas leak on 5th Ave".to_string(),
            message: "Evacuate the block until the utility crew clears the leak".to_string(),
            severity: IncidentSeverity::Critical,
            location: GeoPointDto::new(-122.4194, 37.7749),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn alert_kind_defaults_to_new() {
        let dto: IncidentAlertDto =
            serde_json::from_str(r#"{"incidentId":"00000000-0000-0000-0000-000000000000"}"#)
                .unwrap();
        assert_eq!(dto.kind, IncidentAlertKind::New);
    }
}
