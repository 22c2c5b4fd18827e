use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::neighborhoods::models::Neighborhood;
use crate::shared::constants::NEIGHBORHOOD_ATTACH_RADIUS_METERS;
use crate::shared::geo;

const NEIGHBORHOOD_COLUMNS: &str = "id, name, description, center_lat, center_lng, radius, \
     city, state, zip_code, country, allow_anonymous_reports, auto_verify_threshold, \
     total_residents, total_incidents, incidents_this_month, created_at, updated_at";

pub const DEFAULT_NEIGHBORHOOD_NAME: &str = "Default Neighborhood";

/// Address fields on a report are optional free text; blank counts as absent.
fn best_effort(field: Option<&str>) -> &str {
    match field {
        Some(s) if !s.trim().is_empty() => s,
        _ => "Unknown",
    }
}

pub struct NeighborhoodService {
    pool: PgPool,
}

impl NeighborhoodService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Neighborhood> {
        let query = format!("SELECT {NEIGHBORHOOD_COLUMNS} FROM neighborhoods WHERE id = $1");

        sqlx::query_as::<_, Neighborhood>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get neighborhood: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Neighborhood {} not found", id)))
    }

    pub async fn list(&self) -> Result<Vec<Neighborhood>> {
        let query = format!("SELECT {NEIGHBORHOOD_COLUMNS} FROM neighborhoods ORDER BY name");

        sqlx::query_as::<_, Neighborhood>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list neighborhoods: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Resolve the neighborhood for a point, creating a default one when no
    /// existing neighborhood center lies within the attach radius. The new
    /// row takes whatever city/state the report carried.
    ///
    /// Runs on a borrowed connection so callers can keep the lookup and any
    /// dependent writes inside one transaction.
    pub async fn resolve_or_create(
        conn: &mut PgConnection,
        lat: f64,
        lng: f64,
        city: Option<&str>,
        state: Option<&str>,
    ) -> Result<Neighborhood> {
        let (lat_min, lat_max, lng_min, lng_max) =
            geo::bounding_box(lat, lng, NEIGHBORHOOD_ATTACH_RADIUS_METERS);

        let query = format!(
            "SELECT {NEIGHBORHOOD_COLUMNS} FROM neighborhoods \
             WHERE center_lat BETWEEN $1 AND $2 AND center_lng BETWEEN $3 AND $4"
        );

        let candidates = sqlx::query_as::<_, Neighborhood>(&query)
            .bind(lat_min)
            .bind(lat_max)
            .bind(lng_min)
            .bind(lng_max)
            .fetch_all(&mut *conn)
            .await?;

        let nearest = candidates
            .into_iter()
            .map(|n| {
                let dist = geo::haversine_distance(lat, lng, n.center_lat, n.center_lng);
                (n, dist)
            })
            .filter(|(_, dist)| *dist <= NEIGHBORHOOD_ATTACH_RADIUS_METERS)
            .min_by(|(_, a), (_, b)| a.total_cmp(b));

        if let Some((neighborhood, _)) = nearest {
            return Ok(neighborhood);
        }

        let insert = format!(
            "INSERT INTO neighborhoods (name, center_lat, center_lng, city, state) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {NEIGHBORHOOD_COLUMNS}"
        );

        let created = sqlx::query_as::<_, Neighborhood>(&insert)
            .bind(DEFAULT_NEIGHBORHOOD_NAME)
            .bind(lat)
            .bind(lng)
            .bind(best_effort(city))
            .bind(best_effort(state))
            .fetch_one(&mut *conn)
            .await?;

        tracing::info!(
            neighborhood_id = %created.id,
            "Created default neighborhood at ({}, {})",
            lat,
            lng
        );

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_fields_pass_through_when_present() {
        assert_eq!(best_effort(Some("Springfield")), "Springfield");
        assert_eq!(best_effort(Some("IL")), "IL");
    }

    #[test]
    fn missing_or_blank_address_fields_fall_back_to_unknown() {
        assert_eq!(best_effort(None), "Unknown");
        assert_eq!(best_effort(Some("")), "Unknown");
        assert_eq!(best_effort(Some("   ")), "Unknown");
    }
}
