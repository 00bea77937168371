mod discord_service;
mod discord_service_impl;
mod dto;
mod error;

pub use discord_service::*;
pub use discord_service_impl::*;
pub use dto::DiscordServiceConfig;
pub use error::*;
