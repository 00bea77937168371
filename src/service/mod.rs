pub mod deployments_service;
pub mod discord_service;
