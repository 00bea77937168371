use super::DeploymentsService;
use crate::{
    dto::{input, output},
    embed,
    error::Error,
    service::discord_service::DiscordService,
};
use axum::async_trait;
use std::sync::Arc;

pub const DEPLOYMENTS_USERNAME: &str = "Keel Deployments";

pub struct DeploymentsServiceImpl {
    discord_service: Arc<dyn DiscordService>,
}

impl DeploymentsServiceImpl {
    pub fn new(discord_service: Arc<dyn DiscordService>) -> Self {
        Self { discord_service }
    }
}

#[async_trait]
impl DeploymentsService for DeploymentsServiceImpl {
    async fn relay_notification(
        &self,
        source: input::WebhookSource,
        payload: input::NotificationPayload,
    ) -> Result<(), Error> {
        tracing::info!(%source, "relaying notification");
        tracing::trace!(?payload);

        let embed = embed::create_embed(&payload);
        let message = output::ChatMessage {
            username: DEPLOYMENTS_USERNAME.to_string(),
            avatar_url: None,
            content: None,
            embeds: vec![embed],
        };

        self.discord_service.send(message).await?;

        tracing::info!(%source, "relayed notification");

        Ok(())
    }
}
