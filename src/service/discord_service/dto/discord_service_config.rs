use reqwest::Url;

pub struct DiscordServiceConfig {
    ///
    /// Contains webhook token so it must never be logged
    ///
    pub webhook_url: Url,
}
