use crate::{dto::input, error::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeploymentsService: Send + Sync {
    ///
    /// Turn deployment notification into a chat message
    /// and forward it to the chat platform.
    ///
    /// ### Errors
    /// - [Error::Forward] when
    ///     - chat platform rejected the message
    ///     - chat platform could not be reached
    ///
    async fn relay_notification(
        &self,
        source: input::WebhookSource,
        payload: input::NotificationPayload,
    ) -> Result<(), Error>;
}
