// ── User-facing notifications ──
//
// Transient messages emitted by core operations (create/delete
// failures, state fetch failures, settings saves). Front ends
// subscribe and render them however they like -- toasts, stderr lines,
// status bars. A notification is emitted at most once per triggering
// event; the bulk state poll emits one per failed batch, not one per
// item.

use tokio::sync::broadcast;

const NOTIFICATION_CHANNEL_SIZE: usize = 64;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient user-facing message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Broadcast hub for notifications.
pub(crate) struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    pub(crate) fn new() -> Self {
        let (tx, _) = broadcast::channel(NOTIFICATION_CHANNEL_SIZE);
        Self { tx }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    /// Emit a notification. Send errors (no subscribers) are ignored --
    /// oneshot CLI consumers often don't subscribe at all.
    pub(crate) fn notify(&self, message: impl Into<String>, severity: Severity) {
        let _ = self.tx.send(Notification {
            message: message.into(),
            severity,
        });
    }

    pub(crate) fn error(&self, message: impl Into<String>) {
        self.notify(message, Severity::Error);
    }

    pub(crate) fn success(&self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_notifications_in_order() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();

        notifier.success("saved");
        notifier.error("boom");

        let first = rx.recv().await.unwrap();
        assert_eq!(first.severity, Severity::Success);
        let second = rx.recv().await.unwrap();
        assert_eq!(second.severity, Severity::Error);
        assert_eq!(second.message, "boom");
    }

    #[test]
    fn notify_without_subscribers_does_not_panic() {
        let notifier = Notifier::new();
        notifier.error("nobody listening");
    }
}
