//! Transient notifications

use std::collections::VecDeque;

use crate::constants::toast::{DEFAULT_SECS, MAX_VISIBLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    pub duration_secs: f64,
}

impl Toast {
    fn new(kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
            duration_secs: DEFAULT_SECS,
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title, description)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title, description)
    }

    pub fn lasting(mut self, secs: f64) -> Self {
        self.duration_secs = secs;
        self
    }
}

#[derive(Debug)]
struct ActiveToast {
    toast: Toast,
    expires_at: f64,
}

/// FIFO of toasts; the oldest `MAX_VISIBLE` are shown
#[derive(Debug, Default)]
pub struct Toasts {
    queue: VecDeque<ActiveToast>,
}

impl Toasts {
    pub fn push(&mut self, toast: Toast, now: f64) {
        let expires_at = now + toast.duration_secs;
        self.queue.push_back(ActiveToast { toast, expires_at });
    }

    /// Drop expired toasts
    pub fn prune(&mut self, now: f64) {
        self.queue.retain(|t| t.expires_at > now);
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter().take(MAX_VISIBLE).map(|t| &t.toast)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_toasts_pruned() {
        let mut toasts = Toasts::default();
        toasts.push(Toast::info("a", "short"), 0.0);
        toasts.push(Toast::info("b", "long").lasting(10.0), 0.0);

        toasts.prune(3.5);
        let titles: Vec<_> = toasts.visible().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["b"]);

        toasts.prune(10.0);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_visible_is_capped() {
        let mut toasts = Toasts::default();
        for i in 0..5 {
            toasts.push(Toast::success(format!("t{i}"), ""), 0.0);
        }
        assert_eq!(toasts.len(), 5);
        assert_eq!(toasts.visible().count(), MAX_VISIBLE);
        assert_eq!(toasts.visible().next().map(|t| t.title.as_str()), Some("t0"));
    }
}
