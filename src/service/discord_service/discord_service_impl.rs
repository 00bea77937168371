use super::{DiscordService, DiscordServiceConfig, Error};
use crate::dto::output;
use axum::async_trait;
use reqwest::{Client, StatusCode};

pub struct DiscordServiceImpl {
    config: DiscordServiceConfig,
    client: Client,
}

impl DiscordServiceImpl {
    pub fn new(config: DiscordServiceConfig) -> anyhow::Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl DiscordService for DiscordServiceImpl {
    async fn send(&self, message: output::ChatMessage) -> Result<(), Error> {
        tracing::info!(embeds = message.embeds.len(), "executing discord webhook");
        tracing::trace!(?message);

        let response = self
            .client
            .post(self.config.webhook_url.clone())
            .json(&message)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            return Err(Error::UnexpectedStatus(status));
        }

        tracing::info!("executed discord webhook");

        Ok(())
    }
}
