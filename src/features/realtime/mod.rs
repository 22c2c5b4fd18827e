pub mod events;
pub mod gateway;
pub mod handlers;
pub mod routes;

pub use events::RealtimeEvent;
pub use gateway::{AlertPublisher, RealtimeGateway};
pub use handlers::RealtimeState;
pub use routes::routes;
