// ── Transient user notifications ──
//
// Mutation and fetch outcomes surface as toasts that expire on their own.
// Each toast schedules its own removal, keyed by id rather than position,
// so overlapping toasts may expire out of order without removing the
// wrong one.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use uuid::Uuid;

/// How long a toast stays up before it dismisses itself.
pub const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

/// Fan-out point for transient notifications.
///
/// Cheaply cloneable; the active toast list is broadcast through a `watch`
/// channel that the TUI renders from. Requires a tokio runtime (each push
/// spawns the expiry timer for its own toast).
#[derive(Clone)]
pub struct Notifier {
    active: watch::Sender<Arc<Vec<Notification>>>,
}

impl Notifier {
    pub fn new() -> Self {
        let (active, _) = watch::channel(Arc::new(Vec::new()));
        Self { active }
    }

    /// Push a toast and schedule its removal after [`TOAST_TTL`].
    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        let notification = Notification {
            id,
            kind,
            message: message.into(),
        };

        self.active.send_modify(|toasts| {
            let mut next = toasts.as_ref().clone();
            next.push(notification);
            *toasts = Arc::new(next);
        });

        let tx = self.active.clone();
        tokio::spawn(async move {
            tokio::time::sleep(TOAST_TTL).await;
            remove(&tx, id);
        });

        id
    }

    /// Remove a toast before its timer fires (user dismissed it).
    pub fn dismiss(&self, id: Uuid) {
        remove(&self.active, id);
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(NotificationKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(NotificationKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.push(NotificationKind::Info, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> Uuid {
        self.push(NotificationKind::Warning, message)
    }

    /// Snapshot of the currently visible toasts, oldest first.
    pub fn active(&self) -> Arc<Vec<Notification>> {
        self.active.borrow().clone()
    }

    /// Subscribe to toast-list changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<Notification>>> {
        self.active.subscribe()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

fn remove(tx: &watch::Sender<Arc<Vec<Notification>>>, id: Uuid) {
    tx.send_modify(|toasts| {
        if toasts.iter().any(|t| t.id == id) {
            let next = toasts.iter().filter(|t| t.id != id).cloned().collect();
            *toasts = Arc::new(next);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn toast_expires_after_ttl() {
        let notifier = Notifier::new();
        notifier.success("created");
        assert_eq!(notifier.active().len(), 1);

        tokio::time::sleep(TOAST_TTL + Duration::from_millis(10)).await;
        assert!(notifier.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_toasts_expire_independently() {
        let notifier = Notifier::new();
        let first = notifier.error("first");
        tokio::time::sleep(Duration::from_secs(2)).await;
        let second = notifier.info("second");

        // 5s after the first push: only the first is gone.
        tokio::time::sleep(Duration::from_secs(3) + Duration::from_millis(10)).await;
        let active = notifier.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, second);
        assert_ne!(active[0].id, first);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(notifier.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_removes_before_expiry_and_timer_is_harmless() {
        let notifier = Notifier::new();
        let id = notifier.warning("heads up");
        notifier.dismiss(id);
        assert!(notifier.active().is_empty());

        // The scheduled removal fires later against an absent id.
        tokio::time::sleep(TOAST_TTL + Duration::from_millis(10)).await;
        assert!(notifier.active().is_empty());
    }
}
