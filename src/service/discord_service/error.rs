use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unexpected response: {0}")]
    UnexpectedStatus(StatusCode),

    ///
    /// Url is stripped before wrapping, it contains the webhook token
    ///
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
