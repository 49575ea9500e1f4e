//! Transient user-facing notifications.
//!
//! The request path only produces typed errors; presentation is layered on
//! by attaching a [`Notifier`] to the client. Implementations are
//! fire-and-forget and must not block the calling task.

use std::time::Duration;

/// Visual style of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Plain text, no icon.
    None,
    Success,
    Error,
}

/// A transient notification to surface to the user.
#[derive(Clone, Debug)]
pub struct Notice {
    pub title: String,
    pub kind: NoticeKind,
    /// How long to display the notice. `None` leaves it to the surface.
    pub duration: Option<Duration>,
}

impl Notice {
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: NoticeKind::Error,
            duration: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: NoticeKind::Success,
            duration: None,
        }
    }
}

/// Surface that displays transient notices. No return value is consumed.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that routes notices through `tracing` instead of a UI.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Error => tracing::warn!("{}", notice.title),
            _ => tracing::info!("{}", notice.title),
        }
    }
}
