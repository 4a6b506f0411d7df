//! Toast notifications - fire-and-forget, expire on their own

use chrono::{DateTime, Duration, Utc};

use crate::constants::MAX_TOASTS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
}

impl ToastLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Info => "i",
            ToastLevel::Warning => "!",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Visible toasts, oldest first
#[derive(Clone, Debug)]
pub struct Toasts {
    items: Vec<Toast>,
    ttl: Duration,
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Toasts {
            items: Vec::new(),
            ttl,
        }
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.push_at(level, message, Utc::now());
    }

    pub fn push_at(&mut self, level: ToastLevel, message: impl Into<String>, now: DateTime<Utc>) {
        if self.items.len() >= MAX_TOASTS {
            self.items.remove(0);
        }
        self.items.push(Toast {
            level,
            message: message.into(),
            created_at: now,
        });
    }

    /// Drop expired toasts, returns true if any were removed
    pub fn prune(&mut self, now: DateTime<Utc>) -> bool {
        let before = self.items.len();
        let ttl = self.ttl;
        self.items.retain(|t| now - t.created_at < ttl);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_expired() {
        let mut toasts = Toasts::new(Duration::seconds(5));
        let t0 = Utc::now();
        toasts.push_at(ToastLevel::Success, "User added", t0);
        toasts.push_at(ToastLevel::Info, "User updated", t0 + Duration::seconds(3));

        assert!(!toasts.prune(t0 + Duration::seconds(4)));
        assert_eq!(toasts.items().len(), 2);

        assert!(toasts.prune(t0 + Duration::seconds(6)));
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].message, "User updated");

        assert!(toasts.prune(t0 + Duration::seconds(9)));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let mut toasts = Toasts::new(Duration::seconds(5));
        for i in 0..MAX_TOASTS + 2 {
            toasts.push(ToastLevel::Warning, format!("t{}", i));
        }
        assert_eq!(toasts.items().len(), MAX_TOASTS);
        assert_eq!(toasts.items()[0].message, "t2");
    }
}
