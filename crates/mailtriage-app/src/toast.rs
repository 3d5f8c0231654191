//! Transient notifications
//!
//! At most one toast is visible. A new notification replaces the current one
//! and restarts the timer; a toast expires [`TOAST_DURATION`] after it was
//! shown.

use std::time::{Duration, Instant};

use mailtriage_core::ToastKind;

/// How long a toast stays visible
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

#[derive(Debug, Clone)]
pub struct Notifier {
    current: Option<Toast>,
    duration: Duration,
    /// Incremented for every notification, visible or not
    seq: u64,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(TOAST_DURATION)
    }
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
            seq: 0,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.notify_at(message, kind, Instant::now());
    }

    pub fn notify_at(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        let message = message.into();
        tracing::debug!("Toast ({:?}): {}", kind, message);
        self.current = Some(Toast {
            message,
            kind,
            shown_at: now,
        });
        self.seq = self.seq.wrapping_add(1);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(message, ToastKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(message, ToastKind::Error);
    }

    /// Hide the toast if its time is up. Returns true if it was hidden.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|t| now.saturating_duration_since(t.shown_at) >= self.duration);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_visible_until_duration() {
        let start = Instant::now();
        let mut notifier = Notifier::default();
        notifier.notify_at("Resposta copiada!", ToastKind::Success, start);

        assert!(!notifier.expire(start + Duration::from_millis(2999)));
        assert!(notifier.is_visible());
        assert!(notifier.expire(start + Duration::from_secs(3)));
        assert!(!notifier.is_visible());
    }

    #[test]
    fn test_new_toast_replaces_and_restarts_timer() {
        let start = Instant::now();
        let mut notifier = Notifier::default();
        notifier.notify_at("first", ToastKind::Success, start);
        notifier.notify_at("second", ToastKind::Error, start + Duration::from_secs(2));

        let toast = notifier.current().unwrap();
        assert_eq!(toast.message, "second");
        assert!(toast.is_error());

        // 3s after the first, 1s after the second
        assert!(!notifier.expire(start + Duration::from_secs(3)));
        assert!(notifier.expire(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_seq_counts_notifications() {
        let mut notifier = Notifier::default();
        assert_eq!(notifier.seq(), 0);
        notifier.success("a");
        notifier.error("b");
        assert_eq!(notifier.seq(), 2);
    }

    #[test]
    fn test_expire_without_toast_is_noop() {
        let mut notifier = Notifier::default();
        assert!(!notifier.expire(Instant::now()));
    }
}
