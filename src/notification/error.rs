//! Notification system error types.
//!
//! Notifications are best-effort: every error here is logged and dropped
//! by the runner, never surfaced to the timer.

use thiserror::Error;

/// Errors that can occur in the notification system.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The desktop notification service rejected or failed the request.
    #[error("failed to send notification: {0}")]
    SendFailed(String),
}

impl NotificationError {
    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::SendFailed(_) => {
                "check that a notification daemon is running, or pass --no-notify"
            }
        }
    }
}

impl From<notify_rust::error::Error> for NotificationError {
    fn from(err: notify_rust::error::Error) -> Self {
        Self::SendFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NotificationError::SendFailed("dbus timeout".to_string());
        assert_eq!(err.to_string(), "failed to send notification: dbus timeout");
    }

    #[test]
    fn test_suggestion() {
        assert!(NotificationError::SendFailed(String::new())
            .suggestion()
            .contains("--no-notify"));
    }
}
