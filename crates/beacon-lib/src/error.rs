use thiserror::Error;

/// Failures surfaced by the push subscription lifecycle.
///
/// The notification manager classifies these into user-visible toasts; no raw
/// platform failure is ever handed to the presentation layer.
#[derive(Debug, Error)]
pub enum PushError {
    #[error("Push notifications are not supported in this browser")]
    Unsupported,

    #[error("Permission denied for notifications")]
    PermissionDenied,

    #[error("Worker registration failed: {0}")]
    Registration(anyhow::Error),

    #[error("Timed out waiting for the background worker to become ready")]
    Timeout,

    #[error("No active subscription found")]
    NoSubscription,

    #[error(transparent)]
    Platform(#[from] anyhow::Error),
}
