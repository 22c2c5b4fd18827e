use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::alerts::{dtos as alerts_dtos, handlers as alerts_handlers};
use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::incidents::{
    dtos as incidents_dtos, handlers as incidents_handlers, models as incidents_models,
};
use crate::features::neighborhoods::{
    handlers as neighborhoods_handlers, models as neighborhoods_models,
};
use crate::features::safety::{data as safety_data, handlers as safety_handlers};
use crate::features::users::{
    dtos as users_dtos, handlers as users_handlers, models as users_models,
};
use crate::features::votes::{dtos as votes_dtos, handlers as votes_handlers};
use crate::shared::types::{ApiResponse, Meta, PaginationMeta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::register,
        auth_handlers::login,
        auth_handlers::me,
        // Users
        users_handlers::get_profile,
        users_handlers::update_profile,
        users_handlers::list_community,
        users_handlers::get_leaderboard,
        users_handlers::get_stats,
        users_handlers::get_public_profile,
        users_handlers::search_users,
        users_handlers::list_all_users,
        users_handlers::update_user_role,
        // Neighborhoods
        neighborhoods_handlers::list_neighborhoods,
        neighborhoods_handlers::get_neighborhood,
        // Incidents
        incidents_handlers::create_incident,
        incidents_handlers::list_incidents,
        incidents_handlers::get_incident,
        incidents_handlers::get_stats_summary,
        incidents_handlers::update_incident,
        incidents_handlers::vote_incident,
        incidents_handlers::add_comment,
        // Votes
        votes_handlers::cast_vote,
        votes_handlers::get_summary,
        // Alerts
        alerts_handlers::send_test,
        alerts_handlers::send_incident_alert,
        alerts_handlers::send_emergency,
        alerts_handlers::get_history,
        // Safety
        safety_handlers::get_contacts,
        safety_handlers::get_tips,
        safety_handlers::get_resources,
    ),
    components(
        schemas(
            // Shared
            Meta,
            PaginationMeta,
            // Auth
            auth_dtos::RegisterDto,
            auth_dtos::LoginDto,
            auth_dtos::AuthResponseDto,
            auth_dtos::MeDto,
            ApiResponse<auth_dtos::AuthResponseDto>,
            ApiResponse<auth_dtos::MeDto>,
            // Users
            users_models::UserRole,
            users_dtos::PublicProfileDto,
            users_dtos::CommunityMemberDto,
            users_dtos::AdminUserDto,
            users_dtos::UpdateRoleDto,
            users_dtos::LeaderboardEntryDto,
            users_dtos::UserStatsDto,
            users_dtos::NotificationPreferencesDto,
            users_dtos::UpdateProfileDto,
            ApiResponse<users_dtos::PublicProfileDto>,
            ApiResponse<Vec<users_dtos::CommunityMemberDto>>,
            ApiResponse<Vec<users_dtos::LeaderboardEntryDto>>,
            ApiResponse<users_dtos::UserStatsDto>,
            ApiResponse<Vec<users_dtos::AdminUserDto>>,
            // Neighborhoods
            neighborhoods_models::Neighborhood,
            ApiResponse<Vec<neighborhoods_models::Neighborhood>>,
            ApiResponse<neighborhoods_models::Neighborhood>,
            // Incidents
            incidents_models::IncidentType,
            incidents_models::IncidentSeverity,
            incidents_models::IncidentStatus,
            incidents_models::VerificationStatus,
            incidents_models::VoteDirection,
            incidents_dtos::GeoPointDto,
            incidents_dtos::CreateIncidentDto,
            incidents_dtos::UpdateIncidentDto,
            incidents_dtos::CreateCommentDto,
            incidents_dtos::VoteRequestDto,
            incidents_dtos::ReporterDto,
            incidents_dtos::NeighborhoodRefDto,
            incidents_dtos::VerificationDto,
            incidents_dtos::CommentDto,
            incidents_dtos::IncidentResponseDto,
            incidents_dtos::IncidentListResponseDto,
            incidents_dtos::VoteResultDto,
            incidents_dtos::TypeCountDto,
            incidents_dtos::StatsSummaryDto,
            ApiResponse<incidents_dtos::IncidentResponseDto>,
            ApiResponse<incidents_dtos::IncidentListResponseDto>,
            ApiResponse<incidents_dtos::VoteResultDto>,
            ApiResponse<incidents_dtos::CommentDto>,
            ApiResponse<incidents_dtos::StatsSummaryDto>,
            // Votes
            votes_dtos::AuthenticityVoteDto,
            votes_dtos::VoteSummaryDto,
            ApiResponse<votes_dtos::VoteSummaryDto>,
            // Alerts
            alerts_dtos::IncidentAlertKind,
            alerts_dtos::IncidentAlertDto,
            alerts_dtos::EmergencyAlertDto,
            alerts_dtos::AlertDeliveryDto,
            alerts_dtos::AlertHistoryEntryDto,
            ApiResponse<alerts_dtos::AlertDeliveryDto>,
            ApiResponse<Vec<alerts_dtos::AlertHistoryEntryDto>>,
            // Safety
            safety_data::EmergencyContact,
            safety_data::SafetyTip,
            safety_data::SafetyResource,
            ApiResponse<Vec<safety_data::EmergencyContact>>,
            ApiResponse<Vec<safety_data::SafetyTip>>,
            ApiResponse<Vec<safety_data::SafetyResource>>,
        )
    ),
    tags(
        (name = "Auth", description = "Registration and bearer-token login"),
        (name = "Users", description = "Profiles, community directory, and personal stats"),
        (name = "Neighborhoods", description = "Neighborhood areas (public)"),
        (name = "Incidents", description = "Incident reporting, listing, voting, and moderation"),
        (name = "Votes", description = "Authenticity judgments per incident"),
        (name = "Alerts", description = "Notification fan-out to nearby residents"),
        (name = "Safety", description = "Static safety reference data (public)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "SafeHood API",
        version = "0.1.0",
        description = "Community incident reporting and alerting backend",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
