use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::realtime::events::EVENT_VOTE_UPDATED;
use crate::features::realtime::{AlertPublisher, RealtimeEvent};
use crate::features::votes::dtos::VoteSummaryDto;

/// Authenticity-vote ledger. One row per (incident, user); resubmission
/// overwrites the previous judgment.
pub struct VoteService {
    pool: PgPool,
    publisher: AlertPublisher,
}

impl VoteService {
    pub fn new(pool: PgPool, publisher: AlertPublisher) -> Self {
        Self { pool, publisher }
    }

    pub async fn cast(&self, incident_id: Uuid, user_id: Uuid, vote: bool) -> Result<VoteSummaryDto> {
        let neighborhood_id = self.incident_neighborhood(incident_id).await?;

        sqlx::query(
            "INSERT INTO authenticity_votes (incident_id, user_id, vote) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (incident_id, user_id) \
             DO UPDATE SET vote = EXCLUDED.vote, updated_at = NOW()",
        )
        .bind(incident_id)
        .bind(user_id)
        .bind(vote)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to cast authenticity vote: {:?}", e);
            AppError::Database(e)
        })?;

        let summary = self.summary(incident_id, Some(user_id)).await?;

        self.publisher.publish(RealtimeEvent::neighborhood(
            neighborhood_id,
            EVENT_VOTE_UPDATED,
            serde_json::json!({
                "incidentId": incident_id,
                "trueVotes": summary.true_votes,
                "falseVotes": summary.false_votes,
            }),
        ));

        Ok(summary)
    }

    pub async fn summary(&self, incident_id: Uuid, viewer: Option<Uuid>) -> Result<VoteSummaryDto> {
        // 404 for a bad incident rather than an all-zero summary
        self.incident_neighborhood(incident_id).await?;

        let (true_votes, false_votes): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*) FILTER (WHERE vote), COUNT(*) FILTER (WHERE NOT vote) \
             FROM authenticity_votes WHERE incident_id = $1",
        )
        .bind(incident_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to summarize votes: {:?}", e);
            AppError::Database(e)
        })?;

        let user_vote = match viewer {
            Some(user_id) => sqlx::query_scalar::<_, bool>(
                "SELECT vote FROM authenticity_votes WHERE incident_id = $1 AND user_id = $2",
            )
            .bind(incident_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?,
            None => None,
        };

        Ok(VoteSummaryDto {
            incident_id,
            true_votes,
            false_votes,
            user_vote,
        })
    }

    async fn incident_neighborhood(&self, incident_id: Uuid) -> Result<Uuid> {
        sqlx::query_scalar::<_, Uuid>("SELECT neighborhood_id FROM incidents WHERE id = $1")
            .bind(incident_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up incident: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Incident {} not found", incident_id)))
    }
}
