use anyhow::{anyhow, Context};
use reqwest::Url;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_BIND_ADDRESS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000);
const DEFAULT_MAX_HTTP_CONTENT_LEN: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Dev,
    Prod,
}

impl AppEnv {
    ///
    /// Only `prod` is recognized, every other value means development
    ///
    fn from_name(name: &str) -> Self {
        match name {
            "prod" => Self::Prod,
            _ => Self::Dev,
        }
    }
}

pub struct LogFile {
    pub directory: String,
    pub filename: String,
}

pub struct ApplicationEnv {
    pub app_env: AppEnv,
    pub log_file: Option<LogFile>,

    pub bind_address: SocketAddr,

    pub max_http_content_len: usize,

    pub discord_webhook_url: Url,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let app_env = Self::env_var_opt("APP_ENV")
            .map(|name| AppEnv::from_name(&name))
            .unwrap_or(AppEnv::Dev);
        let log_file = match (
            Self::env_var_opt("DEPLOY_RELAY_LOG_DIRECTORY"),
            Self::env_var_opt("DEPLOY_RELAY_LOG_FILENAME"),
        ) {
            (Some(directory), Some(filename)) => Some(LogFile {
                directory,
                filename,
            }),
            (None, None) => None,
            _ => {
                return Err(anyhow!(
                    "DEPLOY_RELAY_LOG_DIRECTORY and DEPLOY_RELAY_LOG_FILENAME must be set together"
                ))
            }
        };
        let bind_address = match Self::env_var_opt("DEPLOY_RELAY_BIND_ADDRESS") {
            Some(bind_address) => bind_address
                .parse()
                .context("DEPLOY_RELAY_BIND_ADDRESS is not a valid socket address")?,
            None => DEFAULT_BIND_ADDRESS,
        };
        let max_http_content_len = match Self::env_var_opt("DEPLOY_RELAY_MAX_HTTP_CONTENT_LEN") {
            Some(max_http_content_len) => max_http_content_len
                .parse()
                .context("DEPLOY_RELAY_MAX_HTTP_CONTENT_LEN is not a valid number")?,
            None => DEFAULT_MAX_HTTP_CONTENT_LEN,
        };
        let discord_webhook_url = Url::parse(&Self::env_var("DISCORD_WEBHOOK_URL")?)
            .context("DISCORD_WEBHOOK_URL is not a valid url")?;

        Ok(Self {
            app_env,
            log_file,
            bind_address,
            max_http_content_len,
            discord_webhook_url,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        Self::env_var_opt(name).ok_or(anyhow!("environment variable {name} not set"))
    }

    ///
    /// Empty variable is treated as not set
    ///
    fn env_var_opt(name: &'static str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}
