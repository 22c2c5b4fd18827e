use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthenticityVoteDto {
    /// true = "this really happened", false = "this looks fake"
    pub vote: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteSummaryDto {
    pub incident_id: Uuid,
    pub true_votes: i64,
    pub false_votes: i64,
    /// The caller's own judgment; null for anonymous callers or when no
    /// vote has been cast
    pub user_vote: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_carries_incident_id_on_the_wire() {
        let summary = VoteSummaryDto {
            incident_id: Uuid::nil(),
            true_votes: 2,
            false_votes: 1,
            user_vote: Some(false),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json["incidentId"],
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(json["trueVotes"], 2);
        assert_eq!(json["falseVotes"], 1);
        assert_eq!(json["userVote"], false);
    }
}
