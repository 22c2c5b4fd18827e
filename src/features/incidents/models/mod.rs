mod incident;

pub use incident::{
    Incident, IncidentComment, IncidentSeverity, IncidentStatus, IncidentType, VerificationStatus,
    VoteDirection,
};
