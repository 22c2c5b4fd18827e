mod user_dto;

pub use user_dto::{
    AdminUserDto, CommunityMemberDto, LeaderboardEntryDto, NotificationPreferencesDto,
    PublicProfileDto, UpdateProfileDto, UpdateRoleDto, UserSearchQuery, UserStatsDto,
};
