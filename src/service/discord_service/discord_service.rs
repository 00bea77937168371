use super::Error;
use crate::dto::output;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiscordService: Send + Sync {
    ///
    /// Execute Discord webhook with the message.
    /// Request is sent exactly once, it's never retried.
    ///
    /// ### Errors
    /// - [Error::UnexpectedStatus] when
    ///     - Discord responded with anything other than 204 No Content
    /// - [Error::Transport] when
    ///     - request could not be sent or response could not be received
    ///
    async fn send(&self, message: output::ChatMessage) -> Result<(), Error>;
}
