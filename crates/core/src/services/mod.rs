pub mod mileage_service;
pub mod projection_service;
pub mod record_service;
pub mod stats_service;
