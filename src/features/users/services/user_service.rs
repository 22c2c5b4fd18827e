use chrono::{Duration, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{LeaderboardEntryDto, UpdateProfileDto, UserStatsDto};
use crate::features::users::models::{CreateUser, User, UserRole};
use crate::shared::constants::{NOTIFY_TYPE_EMERGENCY, NOTIFY_TYPE_INCIDENTS};
use crate::shared::geo;

/// Column list shared by every `SELECT ... FROM users` in this service.
const USER_COLUMNS: &str = "id, email, password_hash, first_name, last_name, phone, \
     street, city, state, zip_code, lat, lng, neighborhood_id, role, is_verified, \
     push_enabled, push_types, email_enabled, email_types, sms_enabled, sms_types, \
     alert_radius_miles, reports_submitted, reports_verified, community_score, \
     last_active, created_at, updated_at";

#[derive(Debug, FromRow)]
struct LeaderboardRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    reports_submitted: i32,
    reports_verified: i32,
    score: i64,
}

/// Service for user accounts, profiles, and alert-recipient lookups.
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: &CreateUser) -> Result<User> {
        let query = format!(
            "INSERT INTO users (email, password_hash, first_name, last_name, phone) \
             VALUES (LOWER($1), $2, $3, $4, $5) \
             RETURNING {USER_COLUMNS}"
        );

        sqlx::query_as::<_, User>(&query)
            .bind(&data.email)
            .bind(&data.password_hash)
            .bind(&data.first_name)
            .bind(&data.last_name)
            .bind(&data.phone)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    AppError::Conflict("Email is already registered".to_string())
                }
                _ => {
                    tracing::error!("Failed to create user: {:?}", e);
                    AppError::Database(e)
                }
            })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<User> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get user: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = LOWER($1)");

        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up user by email: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Name search for member lookup. Case-insensitive substring match on
    /// either name, excluding the caller themselves.
    pub async fn search(&self, term: &str, limit: i64, exclude: Uuid) -> Result<Vec<User>> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE (first_name ILIKE $1 OR last_name ILIKE $1) AND id <> $2 \
             ORDER BY first_name, last_name LIMIT $3"
        );

        sqlx::query_as::<_, User>(&query)
            .bind(format!("%{}%", term))
            .bind(exclude)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to search users: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn update_role(&self, id: Uuid, role: UserRole) -> Result<User> {
        let query = format!(
            "UPDATE users SET role = $2, updated_at = NOW() WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        );

        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(role)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update user role: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Opportunistic activity stamp; failures are logged and swallowed.
    pub async fn touch_last_active(&self, id: Uuid) {
        let result = sqlx::query("UPDATE users SET last_active = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;

        if let Err(e) = result {
            tracing::warn!("Failed to update last_active for {}: {:?}", id, e);
        }
    }

    /// Full member directory, newest members first.
    pub async fn list_community(&self) -> Result<Vec<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC");

        sqlx::query_as::<_, User>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list community members: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn leaderboard(&self, limit: i64) -> Result<Vec<LeaderboardEntryDto>> {
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            "SELECT id, first_name, last_name, reports_submitted, reports_verified, \
                    (reports_submitted * 10 + reports_verified * 20 + community_score)::BIGINT AS score \
             FROM users \
             ORDER BY score DESC, created_at ASC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to build leaderboard: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|r| LeaderboardEntryDto {
                id: r.id,
                first_name: r.first_name,
                last_name: r.last_name,
                reports_submitted: r.reports_submitted,
                reports_verified: r.reports_verified,
                score: r.score,
            })
            .collect())
    }

    /// Personal report statistics for the caller, including incidents near
    /// their home coordinates (when set) within their alert radius.
    pub async fn personal_stats(&self, user: &User) -> Result<UserStatsDto> {
        let (submitted, verified, this_month): (i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), \
                    COUNT(*) FILTER (WHERE verification_status = 'verified'), \
                    COUNT(*) FILTER (WHERE created_at >= $2) \
             FROM incidents WHERE reporter_id = $1",
        )
        .bind(user.id)
        .bind(Utc::now() - Duration::days(30))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to compute user stats: {:?}", e);
            AppError::Database(e)
        })?;

        let nearby_incidents = match (user.lat, user.lng) {
            (Some(lat), Some(lng)) => {
                let radius_m = geo::miles_to_meters(user.alert_radius_miles);
                self.count_incidents_near(lat, lng, radius_m).await?
            }
            _ => 0,
        };

        Ok(UserStatsDto {
            reports_submitted: submitted,
            reports_verified: verified,
            reports_this_month: this_month,
            nearby_incidents,
            community_score: user.community_score,
        })
    }

    async fn count_incidents_near(&self, lat: f64, lng: f64, radius_m: f64) -> Result<i64> {
        let (lat_min, lat_max, lng_min, lng_max) = geo::bounding_box(lat, lng, radius_m);

        let points: Vec<(f64, f64)> = sqlx::query_as(
            "SELECT lat, lng FROM incidents \
             WHERE lat BETWEEN $1 AND $2 AND lng BETWEEN $3 AND $4",
        )
        .bind(lat_min)
        .bind(lat_max)
        .bind(lng_min)
        .bind(lng_max)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count nearby incidents: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(points
            .into_iter()
            .filter(|(p_lat, p_lng)| geo::haversine_distance(lat, lng, *p_lat, *p_lng) <= radius_m)
            .count() as i64)
    }

    pub async fn update_profile(&self, id: Uuid, dto: &UpdateProfileDto) -> Result<User> {
        let prefs = dto.notification_preferences.as_ref();

        let query = format!(
            "UPDATE users SET \
                first_name = COALESCE($2, first_name), \
                last_name = COALESCE($3, last_name), \
                phone = COALESCE($4, phone), \
                street = COALESCE($5, street), \
                city = COALESCE($6, city), \
                state = COALESCE($7, state), \
                zip_code = COALESCE($8, zip_code), \
                lat = COALESCE($9, lat), \
                lng = COALESCE($10, lng), \
                push_enabled = COALESCE($11, push_enabled), \
                push_types = COALESCE($12, push_types), \
                email_enabled = COALESCE($13, email_enabled), \
                email_types = COALESCE($14, email_types), \
                sms_enabled = COALESCE($15, sms_enabled), \
                sms_types = COALESCE($16, sms_types), \
                alert_radius_miles = COALESCE($17, alert_radius_miles), \
                last_active = NOW(), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        );

        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&dto.first_name)
            .bind(&dto.last_name)
            .bind(&dto.phone)
            .bind(&dto.street)
            .bind(&dto.city)
            .bind(&dto.state)
            .bind(&dto.zip_code)
            .bind(dto.lat)
            .bind(dto.lng)
            .bind(prefs.and_then(|p| p.push_enabled))
            .bind(prefs.and_then(|p| p.push_types.clone()))
            .bind(prefs.and_then(|p| p.email_enabled))
            .bind(prefs.and_then(|p| p.email_types.clone()))
            .bind(prefs.and_then(|p| p.sms_enabled))
            .bind(prefs.and_then(|p| p.sms_types.clone()))
            .bind(prefs.and_then(|p| p.alert_radius_miles))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update profile: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Users near a point with push alerts enabled for incident
    /// notifications. Candidates come from a bounding-box scan; the exact
    /// radius cut is applied with Haversine.
    pub async fn push_recipients_near(
        &self,
        lat: f64,
        lng: f64,
        radius_meters: f64,
    ) -> Result<Vec<User>> {
        self.recipients_near(
            lat,
            lng,
            radius_meters,
            "push_enabled AND $5 = ANY(push_types)",
            NOTIFY_TYPE_INCIDENTS,
        )
        .await
    }

    /// Users near a point subscribed to emergency SMS broadcasts.
    pub async fn emergency_recipients_near(
        &self,
        lat: f64,
        lng: f64,
        radius_meters: f64,
    ) -> Result<Vec<User>> {
        self.recipients_near(
            lat,
            lng,
            radius_meters,
            "sms_enabled AND $5 = ANY(sms_types)",
            NOTIFY_TYPE_EMERGENCY,
        )
        .await
    }

    async fn recipients_near(
        &self,
        lat: f64,
        lng: f64,
        radius_meters: f64,
        channel_predicate: &str,
        notify_type: &str,
    ) -> Result<Vec<User>> {
        let (lat_min, lat_max, lng_min, lng_max) = geo::bounding_box(lat, lng, radius_meters);

        let query = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE lat IS NOT NULL AND lng IS NOT NULL \
               AND lat BETWEEN $1 AND $2 AND lng BETWEEN $3 AND $4 \
               AND {channel_predicate}"
        );

        let candidates = sqlx::query_as::<_, User>(&query)
            .bind(lat_min)
            .bind(lat_max)
            .bind(lng_min)
            .bind(lng_max)
            .bind(notify_type)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find alert recipients: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(candidates
            .into_iter()
            .filter(|u| match (u.lat, u.lng) {
                (Some(u_lat), Some(u_lng)) => {
                    geo::haversine_distance(lat, lng, u_lat, u_lng) <= radius_meters
                }
                _ => false,
            })
            .collect())
    }
}
