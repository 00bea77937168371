use deploy_relay::application::{self, ApplicationEnv};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let application_state = application::create_state(&env)?;
    let application_middleware = application::create_middleware(&env);
    let application = application::create_application(application_state, application_middleware);

    let listener = TcpListener::bind(env.bind_address).await?;
    tracing::info!(address = %env.bind_address, "webhook server listening");

    axum::serve(listener, application)
        .with_graceful_shutdown(application::shutdown_signal())
        .await?;

    tracing::info!("webhook server stopped");

    Ok(())
}
