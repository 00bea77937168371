use std::io;

///
/// Resolves when the process receives Ctrl+C or SIGTERM.
///
/// If listening for signals fails the error is logged
/// and the future never resolves, so the server keeps running.
///
pub async fn shutdown_signal() {
    let received = tokio::select! {
        result = tokio::signal::ctrl_c() => result.map(|_| "ctrl_c"),
        result = terminate() => result.map(|_| "terminate"),
    };

    match received {
        Ok(signal) => tracing::info!(signal, "starting shutdown"),
        Err(err) => {
            tracing::error!(%err, "cannot listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(unix)]
async fn terminate() -> io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    signal(SignalKind::terminate())?.recv().await;

    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> io::Result<()> {
    std::future::pending().await
}
