//! Shared helpers: shutdown signal and timestamp formatting.

use chrono::{SecondsFormat, Utc};
use tracing::info;

/// Current time as an RFC 3339 / ISO-8601 string (UTC, millisecond precision).
pub fn iso8601_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
///
/// Used as the graceful-shutdown trigger for [`axum::serve`].
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .unwrap_or_else(|e| tracing::error!("failed to install Ctrl-C handler: {}", e));
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl-C received: shutting down"),
        _ = terminate => info!("SIGTERM received: shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_rfc3339_utc() {
        let ts = iso8601_now();
        let parsed = chrono::DateTime::parse_from_rfc3339(&ts);
        assert!(parsed.is_ok(), "not RFC 3339: {}", ts);
        assert!(ts.ends_with('Z'));
    }
}
