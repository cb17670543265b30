//! Desktop notifications through `notify-rust`.

use notify_rust::Notification;
use tracing::debug;

use super::{NotificationContent, NotificationError, Notifier};

/// How long a notification stays on screen, in milliseconds.
const DISPLAY_TIMEOUT_MS: i32 = 3000;

const APP_NAME: &str = "tomato";

/// Sends notifications to the platform notification service.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, content: &NotificationContent) -> Result<(), NotificationError> {
        debug!(title = %content.title, "Sending desktop notification");
        Notification::new()
            .appname(APP_NAME)
            .summary(&content.title)
            .body(&content.body)
            .timeout(DISPLAY_TIMEOUT_MS)
            .show()?;
        Ok(())
    }
}
