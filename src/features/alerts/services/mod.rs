mod alert_service;

pub use alert_service::AlertService;
