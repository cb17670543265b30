//! Best-effort interval notifications.
//!
//! The runner raises a notification whenever an interval starts. Delivery
//! goes through the [`Notifier`] trait so the desktop backend can be
//! swapped for [`DisabledNotifier`] (`--no-notify`) or a recording mock
//! in tests. Failures are reported to the caller, which logs and drops
//! them; see [`notify_best_effort`].

mod desktop;
pub mod error;

use tracing::warn;

pub use self::desktop::DesktopNotifier;
pub use self::error::NotificationError;

use crate::types::{IntervalConfig, IntervalKind};

/// Title and body of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
}

impl NotificationContent {
    /// Content announcing the start of an interval.
    pub fn interval_started(kind: IntervalKind, config: &IntervalConfig) -> Self {
        let minutes = config.minutes_for(kind);
        let (title, body) = match kind {
            IntervalKind::Work => ("Focus Time!", format!("Work for {} minutes!", minutes)),
            IntervalKind::ShortBreak => ("Break Time!", format!("Take a {}-minute break!", minutes)),
            IntervalKind::LongBreak => (
                "Long Break Time!",
                format!("Take a {}-minute break!", minutes),
            ),
        };
        Self {
            title: title.to_string(),
            body,
        }
    }
}

/// Trait for notification delivery.
///
/// Sends may block on the platform service, so the runner calls
/// [`Notifier::notify`] from a blocking task rather than the event loop.
pub trait Notifier: Send + Sync {
    /// Shows a notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification could not be delivered.
    fn notify(&self, content: &NotificationContent) -> Result<(), NotificationError>;
}

/// Sends a notification, logging and discarding any failure.
///
/// Returns true if the notification was delivered.
pub fn notify_best_effort<N: Notifier + ?Sized>(notifier: &N, content: &NotificationContent) -> bool {
    match notifier.notify(content) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, suggestion = e.suggestion(), "Notification failed");
            false
        }
    }
}

/// Notifier that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledNotifier;

impl Notifier for DisabledNotifier {
    fn notify(&self, _content: &NotificationContent) -> Result<(), NotificationError> {
        Ok(())
    }
}

/// Either the desktop backend or nothing, chosen at startup.
#[derive(Debug, Clone, Copy)]
pub enum SystemNotifier {
    Desktop(DesktopNotifier),
    Disabled(DisabledNotifier),
}

impl SystemNotifier {
    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self::Desktop(DesktopNotifier::new())
        } else {
            Self::Disabled(DisabledNotifier)
        }
    }
}

impl Notifier for SystemNotifier {
    fn notify(&self, content: &NotificationContent) -> Result<(), NotificationError> {
        match self {
            Self::Desktop(n) => n.notify(content),
            Self::Disabled(n) => n.notify(content),
        }
    }
}

/// Mock notifier for testing.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MockNotifier {
    sent: std::sync::Mutex<Vec<NotificationContent>>,
    should_fail: std::sync::atomic::AtomicBool,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn sent(&self) -> Vec<NotificationContent> {
        self.sent.lock().unwrap().clone()
    }

    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Notifier for MockNotifier {
    fn notify(&self, content: &NotificationContent) -> Result<(), NotificationError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(NotificationError::SendFailed("Mock failure".to_string()));
        }
        self.sent.lock().unwrap().push(content.clone());
        Ok(())
    }
}
