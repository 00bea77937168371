use crate::{
    application::ApplicationState, dto::input, error::Error,
    service::deployments_service::DeploymentsService,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Router,
};
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new().route("/webhooks/:source", post(receive_webhook))
}

async fn receive_webhook(
    State(deployments_service): State<Arc<dyn DeploymentsService>>,
    Path(source): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), Error> {
    let source = source
        .parse::<input::WebhookSource>()
        .map_err(|_| Error::UnknownSource(source))?;

    tracing::debug!(%source, body = %String::from_utf8_lossy(&body), "received webhook");

    // content type is not enforced
    let payload = serde_json::from_slice::<input::NotificationPayload>(&body)?;

    deployments_service
        .relay_notification(source, payload)
        .await?;

    Ok((StatusCode::OK, "Webhook received"))
}
