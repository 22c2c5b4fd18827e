/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// GEO / ALERTING
// =============================================================================

/// An incident attaches to an existing neighborhood only when its center
/// is within this distance of the reported point.
pub const NEIGHBORHOOD_ATTACH_RADIUS_METERS: f64 = 5000.0;

/// Default fan-out radius for incident push alerts, in miles.
pub const DEFAULT_ALERT_RADIUS_MILES: f64 = 5.0;

/// Emergency broadcasts reach a wider area than regular incident alerts.
pub const EMERGENCY_ALERT_RADIUS_MILES: f64 = 10.0;

/// Notification type keys stored in user preference arrays.
pub const NOTIFY_TYPE_INCIDENTS: &str = "incidents";
pub const NOTIFY_TYPE_EMERGENCY: &str = "emergency";
