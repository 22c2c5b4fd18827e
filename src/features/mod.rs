pub mod alerts;
pub mod auth;
pub mod incidents;
pub mod neighborhoods;
pub mod realtime;
pub mod safety;
pub mod users;
pub mod votes;
