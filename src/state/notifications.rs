//! Transient toast notifications with a fixed lifetime.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::time::Duration;

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS modifier for the toast.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notification notification--success",
            Self::Error => "notification notification--error",
        }
    }
}

/// A single user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub kind: NoticeKind,
}

impl Notification {
    #[must_use]
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), message: message.into(), kind }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Success)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Error)
    }
}

/// Display queue; each entry expires [`NOTIFICATION_TTL`] after it was pushed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    items: Vec<(Notification, f64)>,
}

impl Notifications {
    /// Append a notification shown from `now_ms`.
    pub fn push(&mut self, notification: Notification, now_ms: f64) {
        let expires_at = now_ms + ttl_ms();
        self.items.push((notification, expires_at));
    }

    /// Drop every expired entry; returns how many were removed.
    pub fn prune(&mut self, now_ms: f64) -> usize {
        let before = self.items.len();
        self.items.retain(|(_, expires_at)| *expires_at > now_ms);
        before - self.items.len()
    }

    /// Remove one entry early (user clicked it away).
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|(n, _)| n.id != id);
        before != self.items.len()
    }

    /// Timer callback for the entry `id`: it is removed regardless of what
    /// the clock reads, along with anything else already past its TTL.
    pub fn expire(&mut self, id: &str, now_ms: f64) -> usize {
        usize::from(self.dismiss(id)) + self.prune(now_ms)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().map(|(n, _)| n)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[allow(clippy::cast_precision_loss)]
fn ttl_ms() -> f64 {
    NOTIFICATION_TTL.as_millis() as f64
}
