use super::{AppEnv, ApplicationEnv};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

///
/// Console logs are pretty printed in development
/// and written as JSON lines in production.
///
pub fn setup_tracing(env: &ApplicationEnv) -> anyhow::Result<()> {
    let default_level = match env.app_env {
        AppEnv::Dev => LevelFilter::DEBUG,
        AppEnv::Prod => LevelFilter::INFO,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env()?;

    let (pretty_console_layer, json_console_layer) = match env.app_env {
        AppEnv::Dev => (
            Some(tracing_subscriber::fmt::layer().with_target(false)),
            None,
        ),
        AppEnv::Prod => (
            None,
            Some(tracing_subscriber::fmt::layer().json().with_target(false)),
        ),
    };

    let file_layer = env.log_file.as_ref().map(|log_file| {
        let file_appender =
            tracing_appender::rolling::hourly(&log_file.directory, &log_file.filename);
        tracing_subscriber::fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(pretty_console_layer)
        .with(json_console_layer)
        .init();

    Ok(())
}
