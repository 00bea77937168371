mod discord_service_config;

pub use discord_service_config::*;
