//! Graceful shutdown signal handling

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Wait for Ctrl+C, or SIGTERM on Unix.
async fn wait_for_signal() -> Result<&'static str, ShutdownSignalError> {
    let ctrl_c = async {
        signal::ctrl_c().await.map_err(ShutdownSignalError::CtrlC)?;

        Ok::<_, ShutdownSignalError>("ctrl_c")
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(ShutdownSignalError::SigTerm)?
            .recv()
            .await;

        Ok::<_, ShutdownSignalError>("terminate")
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<&'static str, ShutdownSignalError>>();

    tokio::select! {
        signal = ctrl_c => signal,
        signal = terminate => signal,
    }
}

/// Stop the server gracefully once a shutdown signal arrives.
///
/// In-flight requests are allowed to finish before the server exits.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let signal = wait_for_signal().await?;

    info!(signal, "shutdown signal received, draining requests");

    handle.stop_graceful(None);

    Ok(())
}
