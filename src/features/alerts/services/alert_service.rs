use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::alerts::dtos::{
    AlertHistoryEntryDto, EmergencyAlertDto, IncidentAlertDto, IncidentAlertKind,
};
use crate::features::auth::AuthenticatedUser;
use crate::features::realtime::events::{
    EVENT_EMERGENCY_ALERT, EVENT_INCIDENT_ALERT, EVENT_TEST_NOTIFICATION,
};
use crate::features::realtime::{AlertPublisher, RealtimeEvent};
use crate::features::users::UserService;
use crate::shared::constants::{DEFAULT_ALERT_RADIUS_MILES, EMERGENCY_ALERT_RADIUS_MILES};
use crate::shared::geo;
use crate::shared::types::{PaginationMeta, PaginationQuery};

#[derive(Debug, FromRow)]
struct HistoryRow {
    id: Uuid,
    title: String,
    incident_type: crate::features::incidents::models::IncidentType,
    severity: crate::features::incidents::models::IncidentSeverity,
    lat: f64,
    lng: f64,
    push_sent: bool,
    email_sent: bool,
    sms_sent: bool,
    alerts_sent_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Exact distance cut after the box prefilter; the box over-selects at the
/// corners.
fn rows_within_radius(rows: Vec<HistoryRow>, lat: f64, lng: f64, radius_m: f64) -> Vec<HistoryRow> {
    rows.into_iter()
        .filter(|r| geo::haversine_distance(lat, lng, r.lat, r.lng) <= radius_m)
        .collect()
}

/// Fan-out of incident and emergency notifications to nearby residents.
pub struct AlertService {
    pool: PgPool,
    users: std::sync::Arc<UserService>,
    publisher: AlertPublisher,
}

impl AlertService {
    pub fn new(
        pool: PgPool,
        users: std::sync::Arc<UserService>,
        publisher: AlertPublisher,
    ) -> Self {
        Self {
            pool,
            users,
            publisher,
        }
    }

    /// Loopback notification so a user can check their own delivery path.
    pub fn send_test(&self, user: &AuthenticatedUser) {
        self.publisher.publish(RealtimeEvent::user(
            user.id,
            EVENT_TEST_NOTIFICATION,
            serde_json::json!({
                "message": "Test notification delivered",
                "sentAt": chrono::Utc::now(),
            }),
        ));
    }

    /// Notify push subscribers near an incident. Recipients come from the
    /// standard alert radius around the incident's coordinates; the incident
    /// is stamped so repeat broadcasts are visible in the history.
    pub async fn send_incident_alert(&self, dto: &IncidentAlertDto) -> Result<i64> {
        let incident = sqlx::query_as::<_, IncidentAlertRow>(
            "SELECT id, title, lat, lng, incident_type, severity FROM incidents WHERE id = $1",
        )
        .bind(dto.incident_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load incident for alert: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Incident {} not found", dto.incident_id)))?;

        let radius_m = geo::miles_to_meters(DEFAULT_ALERT_RADIUS_MILES);
        let recipients = self
            .users
            .push_recipients_near(incident.lat, incident.lng, radius_m)
            .await?;

        let kind = match dto.kind {
            IncidentAlertKind::New => "new",
            IncidentAlertKind::Update => "update",
            IncidentAlertKind::Resolved => "resolved",
        };

        for recipient in &recipients {
            self.publisher.publish(RealtimeEvent::user(
                recipient.id,
                EVENT_INCIDENT_ALERT,
                serde_json::json!({
                    "alertType": kind,
                    "incidentId": incident.id,
                    "title": incident.title,
                    "type": incident.incident_type,
                    "severity": incident.severity,
                }),
            ));
        }

        sqlx::query(
            "UPDATE incidents SET push_sent = TRUE, alerts_sent_at = NOW() WHERE id = $1",
        )
        .bind(incident.id)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            incident_id = %incident.id,
            recipients = recipients.len(),
            "Incident alert sent"
        );

        Ok(recipients.len() as i64)
    }

    /// Broadcast an emergency to SMS-emergency subscribers in a wider
    /// radius. Callers must hold an emergency-capable role.
    pub async fn send_emergency(
        &self,
        sender: &AuthenticatedUser,
        dto: &EmergencyAlertDto,
    ) -> Result<i64> {
        if !sender.can_send_emergency() {
            return Err(AppError::Forbidden(
                "First-responder or admin role required".to_string(),
            ));
        }

        let lat = dto.location.lat();
        let lng = dto.location.lng();
        let radius_m = geo::miles_to_meters(EMERGENCY_ALERT_RADIUS_MILES);
        let recipients = self.users.emergency_recipients_near(lat, lng, radius_m).await?;

        for recipient in &recipients {
            self.publisher.publish(RealtimeEvent::user(
                recipient.id,
                EVENT_EMERGENCY_ALERT,
                serde_json::json!({
                    "title": dto.title,
                    "message": dto.message,
                    "severity": dto.severity,
                    "location": dto.location,
                    "sentBy": sender.id,
                }),
            ));
        }

        tracing::warn!(
            sender_id = %sender.id,
            recipients = recipients.len(),
            "Emergency broadcast sent"
        );

        Ok(recipients.len() as i64)
    }

    /// Broadcast incidents within the caller's alert radius of their home
    /// coordinates, newest first. A caller with no home coordinates on file
    /// was never in range of anything.
    pub async fn history(
        &self,
        caller: &AuthenticatedUser,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<AlertHistoryEntryDto>, PaginationMeta)> {
        let user = self.users.get_by_id(caller.id).await?;
        let (lat, lng) = match (user.lat, user.lng) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => return Ok((Vec::new(), PaginationMeta::new(pagination, 0))),
        };

        let radius_m = geo::miles_to_meters(user.alert_radius_miles);
        let (lat_min, lat_max, lng_min, lng_max) = geo::bounding_box(lat, lng, radius_m);

        let rows = sqlx::query_as::<_, HistoryRow>(
            "SELECT id, title, incident_type, severity, lat, lng, push_sent, email_sent, \
                    sms_sent, alerts_sent_at \
             FROM incidents \
             WHERE push_sent AND alerts_sent_at IS NOT NULL \
               AND lat BETWEEN $1 AND $2 AND lng BETWEEN $3 AND $4 \
             ORDER BY alerts_sent_at DESC",
        )
        .bind(lat_min)
        .bind(lat_max)
        .bind(lng_min)
        .bind(lng_max)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load alert history: {:?}", e);
            AppError::Database(e)
        })?;

        let in_range = rows_within_radius(rows, lat, lng, radius_m);
        let total = in_range.len() as i64;

        let entries = in_range
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .map(|r| AlertHistoryEntryDto {
                incident_id: r.id,
                title: r.title,
                incident_type: r.incident_type,
                severity: r.severity,
                push_sent: r.push_sent,
                email_sent: r.email_sent,
                sms_sent: r.sms_sent,
                alerts_sent_at: r.alerts_sent_at,
            })
            .collect();

        Ok((entries, PaginationMeta::new(pagination, total)))
    }
}

#[derive(Debug, FromRow)]
struct IncidentAlertRow {
    id: Uuid,
    title: String,
    lat: f64,
    lng: f64,
    incident_type: crate::features::incidents::models::IncidentType,
    severity: crate::features::incidents::models::IncidentSeverity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::incidents::models::{IncidentSeverity, IncidentType};

    fn history_row(lat: f64, lng: f64) -> HistoryRow {
        HistoryRow {
            id: Uuid::new_v4(),
            title: "Break-in reported".to_string(),
            incident_type: IncidentType::Theft,
            severity: IncidentSeverity::Medium,
            lat,
            lng,
            push_sent: true,
            email_sent: false,
            sms_sent: false,
            alerts_sent_at: Some(chrono::Utc::now()),
        }
    }

    #[test]
    fn history_keeps_only_rows_inside_callers_radius() {
        let home = (40.7128, -74.0060);
        let radius_m = geo::miles_to_meters(5.0);

        let nearby = history_row(40.72, -74.00);
        let nearby_id = nearby.id;
        // ~290 km away, but inside a naive lat/lng box drawn too wide
        let far = history_row(42.36, -71.06);

        let kept = rows_within_radius(vec![nearby, far], home.0, home.1, radius_m);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, nearby_id);
    }

    #[test]
    fn empty_history_survives_the_cut() {
        let kept = rows_within_radius(Vec::new(), 40.0, -74.0, 1000.0);
        assert!(kept.is_empty());
    }
}
