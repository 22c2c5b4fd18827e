use std::collections::HashMap;

use chrono::{Duration, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::AuthenticatedUser;
use crate::features::incidents::dtos::*;
use crate::features::incidents::models::{
    Incident, IncidentComment, IncidentStatus, IncidentType, VerificationStatus, VoteDirection,
};
use crate::features::neighborhoods::NeighborhoodService;
use crate::features::realtime::events::{EVENT_INCIDENT_ALERT, EVENT_VOTE_UPDATED};
use crate::features::realtime::{AlertPublisher, RealtimeEvent};
use crate::shared::constants::MAX_PAGE_SIZE;
use crate::shared::geo;

const INCIDENT_COLUMNS: &str = "id, title, description, incident_type, severity, lat, lng, \
     street, city, state, zip_code, neighborhood_id, reporter_id, is_anonymous, \
     verification_status, verified_by, verified_at, verified_source, status, resolved_at, \
     resolved_by, resolution_notes, tags, push_sent, email_sent, sms_sent, alerts_sent_at, \
     created_at, updated_at";

#[derive(Debug, FromRow)]
struct VoteCountRow {
    incident_id: Uuid,
    upvotes: i64,
    downvotes: i64,
}

#[derive(Debug, FromRow)]
struct UserVoteRow {
    incident_id: Uuid,
    direction: VoteDirection,
}

#[derive(Debug, FromRow)]
struct PersonRow {
    id: Uuid,
    first_name: String,
    last_name: String,
}

#[derive(Debug, FromRow)]
struct NeighborhoodRefRow {
    id: Uuid,
    name: String,
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: Uuid,
    text: String,
    is_anonymous: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    author_id: Uuid,
    author_first_name: String,
    author_last_name: String,
}

/// Service for reporting, listing, voting on, and moderating incidents.
pub struct IncidentService {
    pool: PgPool,
    publisher: AlertPublisher,
}

impl IncidentService {
    pub fn new(pool: PgPool, publisher: AlertPublisher) -> Self {
        Self { pool, publisher }
    }

    // ========================================================================
    // Creation
    // ========================================================================

    /// Create an incident. Neighborhood resolution, the insert, and the
    /// reporter/neighborhood counter bumps commit atomically; the realtime
    /// notification goes out only after the commit succeeds.
    pub async fn create(
        &self,
        reporter: &AuthenticatedUser,
        dto: CreateIncidentDto,
    ) -> Result<IncidentResponseDto> {
        let lat = dto.location.lat();
        let lng = dto.location.lng();

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let neighborhood = NeighborhoodService::resolve_or_create(
            &mut *tx,
            lat,
            lng,
            dto.city.as_deref(),
            dto.state.as_deref(),
        )
        .await?;

        let insert = format!(
            "INSERT INTO incidents \
                (title, description, incident_type, severity, lat, lng, street, city, state, \
                 zip_code, neighborhood_id, reporter_id, is_anonymous, tags) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {INCIDENT_COLUMNS}"
        );

        let incident = sqlx::query_as::<_, Incident>(&insert)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.incident_type)
            .bind(dto.severity)
            .bind(lat)
            .bind(lng)
            .bind(&dto.street)
            .bind(&dto.city)
            .bind(&dto.state)
            .bind(&dto.zip_code)
            .bind(neighborhood.id)
            .bind(reporter.id)
            .bind(dto.is_anonymous)
            .bind(&dto.tags)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert incident: {:?}", e);
                AppError::Database(e)
            })?;

        sqlx::query("UPDATE users SET reports_submitted = reports_submitted + 1 WHERE id = $1")
            .bind(reporter.id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE neighborhoods SET total_incidents = total_incidents + 1, \
                 incidents_this_month = incidents_this_month + 1, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(neighborhood.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit incident creation: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            incident_id = %incident.id,
            neighborhood_id = %neighborhood.id,
            "Incident reported"
        );

        self.publisher.publish(RealtimeEvent::neighborhood(
            neighborhood.id,
            EVENT_INCIDENT_ALERT,
            serde_json::json!({
                "alertType": "new",
                "incidentId": incident.id,
                "title": incident.title,
                "type": incident.incident_type,
                "severity": incident.severity,
            }),
        ));

        self.build_response(incident, Some(reporter.id), false).await
    }

    // ========================================================================
    // Listing
    // ========================================================================

    /// Paginated listing, newest first. When `lat`/`lng`/`radius` are all
    /// present the candidate set comes from a bounding-box scan and the
    /// exact radius cut plus pagination happen in memory; otherwise the
    /// database paginates.
    pub async fn list(
        &self,
        query: &IncidentQuery,
        viewer: Option<Uuid>,
    ) -> Result<IncidentListResponseDto> {
        let status_filter = parse_status_filter(query.status.as_deref())?;
        let limit = query.limit.clamp(1, MAX_PAGE_SIZE);
        let page = query.page.max(1);
        let offset = (page - 1) * limit;

        let geo_filter = match (query.lat, query.lng, query.radius) {
            (Some(lat), Some(lng), Some(radius_miles)) => {
                Some((lat, lng, geo::miles_to_meters(radius_miles)))
            }
            _ => None,
        };

        let mut builder = QueryBuilder::<Postgres>::new(format!(
            "SELECT {INCIDENT_COLUMNS} FROM incidents WHERE 1=1"
        ));
        push_filters(&mut builder, query, status_filter, geo_filter);
        builder.push(" ORDER BY created_at DESC");

        let (incidents, total) = if let Some((lat, lng, radius_m)) = geo_filter {
            let candidates = builder
                .build_query_as::<Incident>()
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to list incidents: {:?}", e);
                    AppError::Database(e)
                })?;

            let matched: Vec<Incident> = candidates
                .into_iter()
                .filter(|i| geo::haversine_distance(lat, lng, i.lat, i.lng) <= radius_m)
                .collect();

            let total = matched.len() as i64;
            let page_items = matched
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect();
            (page_items, total)
        } else {
            let mut count_builder =
                QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM incidents WHERE 1=1");
            push_filters(&mut count_builder, query, status_filter, None);

            let (total,): (i64,) = count_builder
                .build_query_as()
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to count incidents: {:?}", e);
                    AppError::Database(e)
                })?;

            builder.push(" LIMIT ").push_bind(limit);
            builder.push(" OFFSET ").push_bind(offset);

            let items = builder
                .build_query_as::<Incident>()
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to list incidents: {:?}", e);
                    AppError::Database(e)
                })?;
            (items, total)
        };

        let dtos = self.build_responses(incidents, viewer).await?;

        let pagination = crate::shared::types::PaginationMeta {
            page,
            limit,
            total,
            pages: if total == 0 { 0 } else { (total + limit - 1) / limit },
        };

        Ok(IncidentListResponseDto {
            incidents: dtos,
            pagination,
        })
    }

    pub async fn get_detail(
        &self,
        id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<IncidentResponseDto> {
        let incident = self.get_by_id(id).await?;
        self.build_response(incident, viewer, true).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Incident> {
        let query = format!("SELECT {INCIDENT_COLUMNS} FROM incidents WHERE id = $1");

        sqlx::query_as::<_, Incident>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get incident: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Incident {} not found", id)))
    }

    // ========================================================================
    // Moderation
    // ========================================================================

    /// Apply a moderation update. Verification and status each follow their
    /// own transition rules; an illegal transition is rejected before any
    /// write happens.
    pub async fn moderate(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
        dto: UpdateIncidentDto,
    ) -> Result<IncidentResponseDto> {
        if !actor.can_moderate() {
            return Err(AppError::Forbidden(
                "Moderator, admin, or first-responder role required".to_string(),
            ));
        }

        let current = self.get_by_id(id).await?;

        if let Some(next) = dto.verification_status {
            if !current.verification_status.can_transition_to(next) {
                return Err(AppError::BadRequest(format!(
                    "Cannot move verification from {:?} to {:?}",
                    current.verification_status, next
                )));
            }
        }
        if let Some(next) = dto.status {
            if !current.status.can_transition_to(next) {
                return Err(AppError::BadRequest(format!(
                    "Cannot move status from {:?} to {:?}",
                    current.status, next
                )));
            }
        }

        let verification_changed = dto
            .verification_status
            .is_some_and(|v| v != current.verification_status);
        let newly_resolved = dto.status == Some(IncidentStatus::Resolved)
            && current.status != IncidentStatus::Resolved;

        let update = format!(
            "UPDATE incidents SET \
                verification_status = COALESCE($2, verification_status), \
                verified_by = CASE WHEN $3 THEN $4 ELSE verified_by END, \
                verified_at = CASE WHEN $3 THEN NOW() ELSE verified_at END, \
                verified_source = COALESCE($5, verified_source), \
                status = COALESCE($6, status), \
                resolved_at = CASE WHEN $7 THEN NOW() ELSE resolved_at END, \
                resolved_by = CASE WHEN $7 THEN $4 ELSE resolved_by END, \
                resolution_notes = COALESCE($8, resolution_notes), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {INCIDENT_COLUMNS}"
        );

        let updated = sqlx::query_as::<_, Incident>(&update)
            .bind(id)
            .bind(dto.verification_status)
            .bind(verification_changed)
            .bind(actor.id)
            .bind(&dto.verified_source)
            .bind(dto.status)
            .bind(newly_resolved)
            .bind(&dto.resolution_notes)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update incident: {:?}", e);
                AppError::Database(e)
            })?;

        // Credit the reporter the first time their report is verified
        if dto.verification_status == Some(VerificationStatus::Verified)
            && current.verification_status != VerificationStatus::Verified
        {
            let result = sqlx::query(
                "UPDATE users SET reports_verified = reports_verified + 1, \
                     community_score = community_score + 5 WHERE id = $1",
            )
            .bind(updated.reporter_id)
            .execute(&self.pool)
            .await;

            if let Err(e) = result {
                tracing::warn!("Failed to credit reporter {}: {:?}", updated.reporter_id, e);
            }
        }

        let alert_type = if newly_resolved { "resolved" } else { "update" };
        self.publisher.publish(RealtimeEvent::neighborhood(
            updated.neighborhood_id,
            EVENT_INCIDENT_ALERT,
            serde_json::json!({
                "alertType": alert_type,
                "incidentId": updated.id,
                "status": updated.status,
                "verificationStatus": updated.verification_status,
            }),
        ));

        self.build_response(updated, Some(actor.id), false).await
    }

    // ========================================================================
    // Voting (relevance ledger)
    // ========================================================================

    /// Cast or change a relevance vote. One row per (incident, user); the
    /// upsert means switching direction replaces the old vote, so a user
    /// can never hold both directions at once.
    pub async fn cast_vote(
        &self,
        voter: &AuthenticatedUser,
        incident_id: Uuid,
        direction: VoteDirection,
    ) -> Result<(i64, i64, VoteDirection)> {
        let incident = self.get_by_id(incident_id).await?;

        sqlx::query(
            "INSERT INTO incident_votes (incident_id, user_id, direction) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (incident_id, user_id) \
             DO UPDATE SET direction = EXCLUDED.direction, updated_at = NOW()",
        )
        .bind(incident_id)
        .bind(voter.id)
        .bind(direction)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to cast vote: {:?}", e);
            AppError::Database(e)
        })?;

        let (upvotes, downvotes): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*) FILTER (WHERE direction = 'upvote'), \
                    COUNT(*) FILTER (WHERE direction = 'downvote') \
             FROM incident_votes WHERE incident_id = $1",
        )
        .bind(incident_id)
        .fetch_one(&self.pool)
        .await?;

        self.publisher.publish(RealtimeEvent::neighborhood(
            incident.neighborhood_id,
            EVENT_VOTE_UPDATED,
            serde_json::json!({
                "incidentId": incident_id,
                "upvotes": upvotes,
                "downvotes": downvotes,
            }),
        ));

        Ok((upvotes, downvotes, direction))
    }

    // ========================================================================
    // Comments
    // ========================================================================

    pub async fn add_comment(
        &self,
        author: &AuthenticatedUser,
        incident_id: Uuid,
        dto: CreateCommentDto,
    ) -> Result<CommentDto> {
        // 404 before insert so a bad id is not a foreign-key 500
        self.get_by_id(incident_id).await?;

        let comment = sqlx::query_as::<_, IncidentComment>(
            "INSERT INTO incident_comments (incident_id, user_id, text, is_anonymous) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, incident_id, user_id, text, is_anonymous, created_at",
        )
        .bind(incident_id)
        .bind(author.id)
        .bind(&dto.text)
        .bind(dto.is_anonymous)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to add comment: {:?}", e);
            AppError::Database(e)
        })?;

        let author_ref = if comment.is_anonymous {
            None
        } else {
            sqlx::query_as::<_, PersonRow>(
                "SELECT id, first_name, last_name FROM users WHERE id = $1",
            )
            .bind(author.id)
            .fetch_optional(&self.pool)
            .await?
            .map(|p| ReporterDto {
                id: p.id,
                first_name: p.first_name,
                last_name: p.last_name,
            })
        };

        Ok(CommentDto {
            id: comment.id,
            author: author_ref,
            text: comment.text,
            is_anonymous: comment.is_anonymous,
            created_at: comment.created_at,
        })
    }

    // ========================================================================
    // Stats
    // ========================================================================

    pub async fn stats_summary(&self) -> Result<StatsSummaryDto> {
        let (total, active, resolved, verified, this_week): (i64, i64, i64, i64, i64) =
            sqlx::query_as(
                "SELECT COUNT(*), \
                        COUNT(*) FILTER (WHERE status = 'active'), \
                        COUNT(*) FILTER (WHERE status = 'resolved'), \
                        COUNT(*) FILTER (WHERE verification_status = 'verified'), \
                        COUNT(*) FILTER (WHERE created_at >= $1) \
                 FROM incidents",
            )
            .bind(Utc::now() - Duration::days(7))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to compute incident stats: {:?}", e);
                AppError::Database(e)
            })?;

        #[derive(FromRow)]
        struct TypeRow {
            incident_type: IncidentType,
            count: i64,
        }

        let by_type = sqlx::query_as::<_, TypeRow>(
            "SELECT incident_type, COUNT(*) AS count FROM incidents \
             GROUP BY incident_type ORDER BY count DESC",
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|r| TypeCountDto {
            incident_type: r.incident_type,
            count: r.count,
        })
        .collect();

        Ok(StatsSummaryDto {
            total,
            active,
            resolved,
            verified,
            this_week,
            by_type,
        })
    }

    // ========================================================================
    // Response assembly
    // ========================================================================

    async fn build_response(
        &self,
        incident: Incident,
        viewer: Option<Uuid>,
        with_comments: bool,
    ) -> Result<IncidentResponseDto> {
        let comments = if with_comments {
            Some(self.load_comments(incident.id).await?)
        } else {
            None
        };

        let mut dtos = self.build_responses(vec![incident], viewer).await?;
        let mut dto = dtos
            .pop()
            .ok_or_else(|| AppError::Internal("Response assembly dropped incident".to_string()))?;
        dto.comments = comments;
        Ok(dto)
    }

    /// Batch-load vote counts, viewer votes, reporter names, and
    /// neighborhood names for a page of incidents.
    async fn build_responses(
        &self,
        incidents: Vec<Incident>,
        viewer: Option<Uuid>,
    ) -> Result<Vec<IncidentResponseDto>> {
        if incidents.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = incidents.iter().map(|i| i.id).collect();

        let counts: HashMap<Uuid, (i64, i64)> = sqlx::query_as::<_, VoteCountRow>(
            "SELECT incident_id, \
                    COUNT(*) FILTER (WHERE direction = 'upvote') AS upvotes, \
                    COUNT(*) FILTER (WHERE direction = 'downvote') AS downvotes \
             FROM incident_votes WHERE incident_id = ANY($1) GROUP BY incident_id",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|r| (r.incident_id, (r.upvotes, r.downvotes)))
        .collect();

        let user_votes: HashMap<Uuid, VoteDirection> = match viewer {
            Some(user_id) => sqlx::query_as::<_, UserVoteRow>(
                "SELECT incident_id, direction FROM incident_votes \
                 WHERE incident_id = ANY($1) AND user_id = $2",
            )
            .bind(&ids)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|r| (r.incident_id, r.direction))
            .collect(),
            None => HashMap::new(),
        };

        let reporter_ids: Vec<Uuid> = incidents
            .iter()
            .filter(|i| !i.is_anonymous)
            .map(|i| i.reporter_id)
            .collect();

        let reporters: HashMap<Uuid, ReporterDto> = sqlx::query_as::<_, PersonRow>(
            "SELECT id, first_name, last_name FROM users WHERE id = ANY($1)",
        )
        .bind(&reporter_ids)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|p| {
            (
                p.id,
                ReporterDto {
                    id: p.id,
                    first_name: p.first_name,
                    last_name: p.last_name,
                },
            )
        })
        .collect();

        let neighborhood_ids: Vec<Uuid> = incidents.iter().map(|i| i.neighborhood_id).collect();
        let neighborhoods: HashMap<Uuid, NeighborhoodRefDto> =
            sqlx::query_as::<_, NeighborhoodRefRow>(
                "SELECT id, name FROM neighborhoods WHERE id = ANY($1)",
            )
            .bind(&neighborhood_ids)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|n| (n.id, NeighborhoodRefDto { id: n.id, name: n.name }))
            .collect();

        Ok(incidents
            .into_iter()
            .map(|incident| {
                let (upvotes, downvotes) =
                    counts.get(&incident.id).copied().unwrap_or((0, 0));
                let reporter = if incident.is_anonymous {
                    None
                } else {
                    reporters.get(&incident.reporter_id).cloned()
                };

                IncidentResponseDto {
                    id: incident.id,
                    title: incident.title,
                    description: incident.description,
                    incident_type: incident.incident_type,
                    severity: incident.severity,
                    location: GeoPointDto::new(incident.lng, incident.lat),
                    street: incident.street,
                    city: incident.city,
                    state: incident.state,
                    zip_code: incident.zip_code,
                    neighborhood: neighborhoods.get(&incident.neighborhood_id).cloned(),
                    reporter,
                    is_anonymous: incident.is_anonymous,
                    verification: VerificationDto {
                        status: incident.verification_status,
                        verified_by: incident.verified_by,
                        verified_at: incident.verified_at,
                        source: incident.verified_source,
                    },
                    status: incident.status,
                    resolved_at: incident.resolved_at,
                    resolved_by: incident.resolved_by,
                    resolution_notes: incident.resolution_notes,
                    upvotes,
                    downvotes,
                    user_vote: user_votes.get(&incident.id).copied(),
                    comments: None,
                    tags: incident.tags,
                    created_at: incident.created_at,
                    updated_at: incident.updated_at,
                }
            })
            .collect())
    }

    async fn load_comments(&self, incident_id: Uuid) -> Result<Vec<CommentDto>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT c.id, c.text, c.is_anonymous, c.created_at, \
                    u.id AS author_id, u.first_name AS author_first_name, \
                    u.last_name AS author_last_name \
             FROM incident_comments c \
             JOIN users u ON u.id = c.user_id \
             WHERE c.incident_id = $1 \
             ORDER BY c.created_at ASC",
        )
        .bind(incident_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load comments: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|r| CommentDto {
                id: r.id,
                author: if r.is_anonymous {
                    None
                } else {
                    Some(ReporterDto {
                        id: r.author_id,
                        first_name: r.author_first_name,
                        last_name: r.author_last_name,
                    })
                },
                text: r.text,
                is_anonymous: r.is_anonymous,
                created_at: r.created_at,
            })
            .collect())
    }
}

fn parse_status_filter(raw: Option<&str>) -> Result<Option<IncidentStatus>> {
    match raw {
        None => Ok(Some(IncidentStatus::Active)),
        Some("all") => Ok(None),
        Some("active") => Ok(Some(IncidentStatus::Active)),
        Some("resolved") => Ok(Some(IncidentStatus::Resolved)),
        Some("false-alarm") => Ok(Some(IncidentStatus::FalseAlarm)),
        Some("expired") => Ok(Some(IncidentStatus::Expired)),
        Some(other) => Err(AppError::BadRequest(format!(
            "Unknown status filter: {}",
            other
        ))),
    }
}

fn push_filters(
    builder: &mut QueryBuilder<'_, Postgres>,
    query: &IncidentQuery,
    status: Option<IncidentStatus>,
    geo_filter: Option<(f64, f64, f64)>,
) {
    if let Some(status) = status {
        builder.push(" AND status = ").push_bind(status);
    }
    if let Some(incident_type) = query.incident_type {
        builder.push(" AND incident_type = ").push_bind(incident_type);
    }
    if let Some(severity) = query.severity {
        builder.push(" AND severity = ").push_bind(severity);
    }
    if let Some(verified) = query.verified {
        let wanted = if verified {
            VerificationStatus::Verified
        } else {
            VerificationStatus::Pending
        };
        builder.push(" AND verification_status = ").push_bind(wanted);
    }
    if let Some((lat, lng, radius_m)) = geo_filter {
        let (lat_min, lat_max, lng_min, lng_max) = geo::bounding_box(lat, lng, radius_m);
        builder.push(" AND lat BETWEEN ").push_bind(lat_min);
        builder.push(" AND ").push_bind(lat_max);
        builder.push(" AND lng BETWEEN ").push_bind(lng_min);
        builder.push(" AND ").push_bind(lng_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_defaults_to_active() {
        assert_eq!(
            parse_status_filter(None).unwrap(),
            Some(IncidentStatus::Active)
        );
    }

    #[test]
    fn status_filter_all_disables_the_filter() {
        assert_eq!(parse_status_filter(Some("all")).unwrap(), None);
    }

    #[test]
    fn status_filter_accepts_kebab_values() {
        assert_eq!(
            parse_status_filter(Some("false-alarm")).unwrap(),
            Some(IncidentStatus::FalseAlarm)
        );
    }

    #[test]
    fn status_filter_rejects_unknown_values() {
        assert!(parse_status_filter(Some("archived")).is_err());
    }
}
