use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How long a notification stays visible unless configured otherwise.
pub const DEFAULT_NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Error,
    Warning,
    Info,
    Success,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
        };
        f.write_str(label)
    }
}

/// A toast-style message describing the outcome of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub success: bool,
    pub kind: NotificationKind,
    pub subtitle: String,
    #[serde(with = "crate::serde_utils::duration_millis")]
    pub timeout: Duration,
}

impl Notification {
    /// Failure notification with the given subtitle.
    pub fn error(subtitle: impl Into<String>, timeout: Duration) -> Self {
        Self {
            success: false,
            kind: NotificationKind::Error,
            subtitle: subtitle.into(),
            timeout,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.subtitle)
    }
}
