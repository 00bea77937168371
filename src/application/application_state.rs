use super::ApplicationEnv;
use crate::service::{
    deployments_service::{DeploymentsService, DeploymentsServiceImpl},
    discord_service::{DiscordServiceConfig, DiscordServiceImpl},
};
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub deployments_service: Arc<dyn DeploymentsService>,
}

pub fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!("creating services");
    let config = DiscordServiceConfig {
        webhook_url: env.discord_webhook_url.clone(),
    };
    let discord_service = DiscordServiceImpl::new(config)?;
    let discord_service = Arc::new(discord_service);

    let deployments_service = DeploymentsServiceImpl::new(discord_service);
    let deployments_service = Arc::new(deployments_service);

    Ok(ApplicationState {
        deployments_service,
    })
}
