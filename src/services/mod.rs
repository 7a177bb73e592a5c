pub mod dashboard_service;
pub mod ping_service;
pub mod view_service;
