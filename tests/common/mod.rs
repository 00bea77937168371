use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use deploy_relay::application::{self, AppEnv, ApplicationEnv};
use reqwest::Url;
use serde_json::Value;
use std::net::SocketAddr;
use tokio::{net::TcpListener, sync::mpsc};

pub const MAX_HTTP_CONTENT_LEN: usize = 1024;

///
/// Request received by the Discord mock
///
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct DiscordMockState {
    status: StatusCode,
    sender: mpsc::UnboundedSender<ReceivedRequest>,
}

///
/// Start server imitating Discord execute-webhook endpoint.
/// Every request is answered with `status`.
///
pub async fn spawn_discord_mock(
    status: StatusCode,
) -> (Url, mpsc::UnboundedReceiver<ReceivedRequest>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let router = Router::new()
        .route("/api/webhooks/:id/:token", post(execute_webhook))
        .with_state(DiscordMockState { status, sender });

    let address = serve(router).await;
    let url = Url::parse(&format!("http://{address}/api/webhooks/1/token")).unwrap();

    (url, receiver)
}

///
/// Url of a port that nothing listens on
///
pub async fn unreachable_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    Url::parse(&format!("http://{address}/api/webhooks/1/token")).unwrap()
}

pub async fn spawn_relay(discord_webhook_url: Url) -> SocketAddr {
    let env = ApplicationEnv {
        app_env: AppEnv::Dev,
        log_file: None,
        bind_address: SocketAddr::from(([127, 0, 0, 1], 0)),
        max_http_content_len: MAX_HTTP_CONTENT_LEN,
        discord_webhook_url,
    };

    let application_state = application::create_state(&env).unwrap();
    let application_middleware = application::create_middleware(&env);
    let application = application::create_application(application_state, application_middleware);

    serve(application).await
}

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    address
}

async fn execute_webhook(
    State(state): State<DiscordMockState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let _ = state.sender.send(ReceivedRequest { content_type, body });

    state.status
}
